use dioxus::prelude::*;

use crate::context::AppContext;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.assessment().catalog();
    let total = catalog.len();
    let categories: Vec<String> = catalog
        .categories()
        .into_iter()
        .map(str::to_string)
        .collect();

    rsx! {
        div { class: "page",
            h2 { "Welcome to the NDPA Compliance Assessment Tool" }
            p {
                "This tool helps organizations assess their compliance with the Nigeria Data Protection Act (NDPA). "
                "The assessment has {total} questions covering:"
            }
            ul {
                for category in categories {
                    li { "{category}" }
                }
            }
            h3 { "Getting Started" }
            ol {
                li { "Navigate to 'Answer Questions' to begin the assessment" }
                li { "Complete all questions honestly and accurately" }
                li { "Review your results in the 'View Results' section" }
                li { "Upload relevant documentation in the 'Upload Documents' section" }
            }
        }
    }
}
