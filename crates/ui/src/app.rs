use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::use_user_session_provider;
use crate::routes::Route;

pub const APP_TITLE: &str = "NDPA Compliance Assessment";

#[component]
pub fn App() -> Element {
    use_user_session_provider(None, None);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{APP_TITLE}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
