use dioxus::prelude::*;

#[component]
pub fn AboutView() -> Element {
    rsx! {
        div { class: "page",
            h2 { "About NDPA Compliance" }
            p {
                "The Nigeria Data Protection Act (NDPA) establishes guidelines for processing personal data "
                "and protecting the privacy rights of data subjects in Nigeria."
            }
            p { "This assessment tool helps organizations:" }
            ul {
                li { "Evaluate their current compliance status" }
                li { "Identify areas needing improvement" }
                li { "Track progress toward full compliance" }
                li { "Generate compliance reports" }
            }
        }
    }
}
