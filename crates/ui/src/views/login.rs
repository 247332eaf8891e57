use dioxus::prelude::*;

use crate::context::{AppContext, UserSession};
use crate::views::ViewError;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_context::<UserSession>();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut organization = use_signal(String::new);
    let mut error = use_signal(|| None::<ViewError>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match ctx
            .auth()
            .login(&email.read(), &password.read(), &organization.read())
        {
            Ok(user) => {
                error.set(None);
                password.set(String::new());
                session.sign_in(user, ctx.assessment().start_session());
            }
            Err(err) => error.set(Some(ViewError::from(&err))),
        }
    };

    rsx! {
        div { class: "page login",
            h2 { "NDPA Compliance Assessment Login" }
            form { class: "login-form", onsubmit: on_submit,
                label { r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label { r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                label { r#for: "login-organization", "Organization Name" }
                input {
                    id: "login-organization",
                    r#type: "text",
                    value: "{organization}",
                    oninput: move |evt| organization.set(evt.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", "Login" }
            }
            if let Some(err) = error() {
                p { class: "alert alert-error", "{err.message()}" }
            }
        }
    }
}
