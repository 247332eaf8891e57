use std::collections::HashMap;

use comply_core::model::QuestionId;
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::{AppContext, UserSession};
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{QuestionVm, map_current_question};

#[cfg(test)]
use services::AssessmentSession;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NavIntent {
    Previous,
    Next,
    Submit,
}

#[component]
pub fn QuestionsView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<UserSession>();
    let mut assessment = session.assessment;

    // Comments typed before an option is picked.
    let mut drafts = use_signal(HashMap::<QuestionId, String>::new);
    let mut error = use_signal(|| None::<ViewError>);
    let mut submitted = use_signal(|| false);

    let on_select = {
        let ctx = ctx.clone();
        use_callback(move |(id, option): (QuestionId, String)| {
            let comment = {
                let guard = assessment.read();
                guard
                    .as_ref()
                    .and_then(|s| s.answer_for(&id))
                    .and_then(|a| a.comment().map(str::to_string))
                    .or_else(|| drafts.read().get(&id).cloned())
            };
            let mut guard = assessment.write();
            let Some(current) = guard.as_mut() else {
                return;
            };
            match ctx
                .assessment()
                .record_answer(current, &id, &option, comment)
            {
                Ok(()) => {
                    drafts.write().remove(&id);
                    error.set(None);
                }
                Err(err) => error.set(Some(ViewError::from(&err))),
            }
        })
    };

    let on_comment = {
        let ctx = ctx.clone();
        use_callback(move |(id, text): (QuestionId, String)| {
            let selected = assessment
                .read()
                .as_ref()
                .and_then(|s| s.answer_for(&id))
                .map(|a| a.selected_option().to_string());
            let Some(option) = selected else {
                drafts.write().insert(id, text);
                return;
            };
            let mut guard = assessment.write();
            if let Some(current) = guard.as_mut() {
                if let Err(err) = ctx
                    .assessment()
                    .record_answer(current, &id, &option, Some(text))
                {
                    error.set(Some(ViewError::from(&err)));
                }
            }
        })
    };

    let on_nav = use_callback(move |intent: NavIntent| {
        let mut guard = assessment.write();
        let Some(current) = guard.as_mut() else {
            return;
        };
        match intent {
            NavIntent::Previous => current.retreat(),
            NavIntent::Next => current.advance(),
            NavIntent::Submit => match ctx.assessment().submit(current) {
                Ok(()) => {
                    error.set(None);
                    submitted.set(true);
                }
                Err(err) => error.set(Some(ViewError::from(&err))),
            },
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuestionTestHandles>() {
                handles.register(on_select, on_comment, assessment);
            }
        }
    }

    let vm = assessment.read().as_ref().and_then(map_current_question);
    let Some(vm) = vm else {
        return rsx! {
            div { class: "page",
                h2 { "NDPA Compliance Assessment" }
                p { "No assessment is in progress." }
            }
        };
    };

    let progress_style = format!("width: {:.0}%", vm.progress_percent);
    let comment_value = if vm.comment.is_empty() {
        drafts.read().get(&vm.id).cloned().unwrap_or_default()
    } else {
        vm.comment.clone()
    };

    rsx! {
        div { class: "page questions",
            h2 { "NDPA Compliance Assessment" }
            div { class: "progress",
                div { class: "progress-bar", style: "{progress_style}" }
            }
            p { class: "progress-label", "{vm.position_label}" }

            QuestionCard {
                vm: vm.clone(),
                comment: comment_value,
                on_select,
                on_comment,
            }

            div { class: "question-nav",
                if !vm.is_first {
                    button {
                        id: "question-prev",
                        class: "btn btn-secondary",
                        onclick: move |_| on_nav.call(NavIntent::Previous),
                        "Previous"
                    }
                }
                if !vm.is_last {
                    button {
                        id: "question-next",
                        class: "btn btn-primary",
                        onclick: move |_| on_nav.call(NavIntent::Next),
                        "Next"
                    }
                }
                if vm.is_last && !vm.locked {
                    button {
                        id: "question-submit",
                        class: "btn btn-primary",
                        onclick: move |_| on_nav.call(NavIntent::Submit),
                        "Submit"
                    }
                }
            }

            if let Some(err) = error() {
                p { class: "alert alert-error", "{err.message()}" }
            }
            if submitted() || vm.locked {
                div { class: "alert alert-success",
                    "Assessment completed! View your results in the "
                    Link { to: Route::Results {}, "View Results" }
                    " section."
                }
            }
        }
    }
}

#[component]
fn QuestionCard(
    vm: QuestionVm,
    comment: String,
    on_select: Callback<(QuestionId, String)>,
    on_comment: Callback<(QuestionId, String)>,
) -> Element {
    let id_for_comment = vm.id.clone();

    rsx! {
        section { class: "question-card",
            h3 { "Category: {vm.category}" }
            p { class: "risk {vm.risk_class}", "Risk Level: {vm.risk_badge} {vm.risk_label}" }
            p { class: "question-text", strong { "{vm.text}" } }
            if !vm.guidance_html.is_empty() {
                div { class: "guidance", dangerous_inner_html: "{vm.guidance_html}" }
            }

            fieldset { class: "options", disabled: vm.locked,
                legend { "Select your answer:" }
                for option in vm.options.iter().cloned() {
                    label { class: "option",
                        input {
                            r#type: "radio",
                            name: "answer-{vm.id}",
                            value: "{option.label}",
                            checked: option.selected,
                            onchange: {
                                let id = vm.id.clone();
                                let label = option.label.clone();
                                move |_: FormEvent| on_select.call((id.clone(), label.clone()))
                            },
                        }
                        span { "{option.label}" }
                    }
                }
            }

            label { r#for: "question-comment", "Additional Comments (optional)" }
            textarea {
                id: "question-comment",
                disabled: vm.locked,
                value: "{comment}",
                oninput: move |evt: FormEvent| on_comment.call((id_for_comment.clone(), evt.value())),
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuestionTestHandles {
    select: Rc<RefCell<Option<Callback<(QuestionId, String)>>>>,
    comment: Rc<RefCell<Option<Callback<(QuestionId, String)>>>>,
    assessment: Rc<RefCell<Option<Signal<Option<AssessmentSession>>>>>,
}

#[cfg(test)]
impl QuestionTestHandles {
    pub(crate) fn register(
        &self,
        select: Callback<(QuestionId, String)>,
        comment: Callback<(QuestionId, String)>,
        assessment: Signal<Option<AssessmentSession>>,
    ) {
        *self.select.borrow_mut() = Some(select);
        *self.comment.borrow_mut() = Some(comment);
        *self.assessment.borrow_mut() = Some(assessment);
    }

    pub(crate) fn select(&self) -> Callback<(QuestionId, String)> {
        (*self.select.borrow()).expect("select callback registered")
    }

    pub(crate) fn comment(&self) -> Callback<(QuestionId, String)> {
        (*self.comment.borrow()).expect("comment callback registered")
    }

    pub(crate) fn assessment(&self) -> Signal<Option<AssessmentSession>> {
        (*self.assessment.borrow()).expect("assessment signal registered")
    }
}
