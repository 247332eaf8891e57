use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::UserSession;
use crate::views::{AboutView, HomeView, LoginView, QuestionsView, ResultsView, UploadView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/about", AboutView)] About {},
        #[route("/questions", QuestionsView)] Questions {},
        #[route("/results", ResultsView)] Results {},
        #[route("/upload", UploadView)] Upload {},
}

#[component]
fn Layout() -> Element {
    let session = use_context::<UserSession>();

    if session.user.read().is_none() {
        return rsx! {
            main { class: "content content-login",
                LoginView {}
            }
        };
    }

    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let mut session = use_context::<UserSession>();
    let user = session.user.read().clone();

    rsx! {
        nav { class: "sidebar",
            h1 { "Navigation" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::About {}, "About" } }
                li { Link { to: Route::Questions {}, "Answer Questions" } }
                li { Link { to: Route::Results {}, "View Results" } }
                li { Link { to: Route::Upload {}, "Upload Documents" } }
            }
            if let Some(user) = user {
                div { class: "sidebar-user",
                    p { strong { "Logged in as:" } }
                    p { "Email: {user.email}" }
                    p { "Organization: {user.organization}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| session.sign_out(),
                        "Log out"
                    }
                }
            }
        }
    }
}
