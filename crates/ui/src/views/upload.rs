use dioxus::prelude::*;
use services::ACCEPTED_EXTENSIONS;

use crate::context::UserSession;
use crate::views::ViewError;

#[component]
pub fn UploadView() -> Element {
    let session = use_context::<UserSession>();
    let mut documents = session.documents;
    let mut rejected = use_signal(Vec::<String>::new);

    let accept = ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",");

    let on_files = move |evt: FormEvent| {
        let mut refused = Vec::new();
        for file in evt.files() {
            let name = file.name();
            if let Err(err) = documents.write().acknowledge(&name) {
                tracing::debug!(%err, "upload refused");
                refused.push(name);
            }
        }
        rejected.set(refused);
    };

    let received = documents.read().received().to_vec();

    rsx! {
        div { class: "page upload",
            h2 { "Upload Supporting Documents" }
            p { "Upload relevant documentation to support your compliance assessment." }
            p { class: "muted", "Accepted file types: PDF, DOCX, TXT" }
            input {
                id: "upload-input",
                r#type: "file",
                multiple: true,
                accept: "{accept}",
                onchange: on_files,
            }
            for name in received {
                p { class: "alert alert-success", "File uploaded successfully: {name}" }
            }
            for name in rejected() {
                p { class: "alert alert-error", "{name}: {ViewError::UnsupportedFile.message()}" }
            }
        }
    }
}

