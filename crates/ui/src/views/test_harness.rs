use std::sync::Arc;

use comply_core::time::fixed_now;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AssessmentService, AssessmentSession, AuthService, Clock, UserInfo};
use storage::{InMemoryCatalog, InMemorySink, ReportSink};

use crate::context::{UiApp, build_app_context, use_user_session_provider};
use crate::routes::Route;
use crate::views::questions::QuestionTestHandles;
use crate::views::{AboutView, HomeView, QuestionsView, ResultsView, UploadView};

#[derive(Clone)]
struct TestApp {
    assessment: Arc<AssessmentService>,
    auth: Arc<AuthService>,
}

impl UiApp for TestApp {
    fn assessment(&self) -> Arc<AssessmentService> {
        Arc::clone(&self.assessment)
    }

    fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    /// The full routed app, including the login gate and sidebar.
    Shell,
    Home,
    About,
    Questions,
    Results,
    Upload,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    user: Option<UserInfo>,
    assessment: Option<AssessmentSession>,
    question_handles: Option<QuestionTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(app));
    use_context_provider(|| props.view);
    use_user_session_provider(props.user.clone(), props.assessment.clone());
    if let Some(handles) = props.question_handles.clone() {
        use_context_provider(|| handles);
    }

    if props.view == ViewKind::Shell {
        return rsx! { Router::<Route> {} };
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Shell | ViewKind::Home => rsx! { HomeView {} },
        ViewKind::About => rsx! { AboutView {} },
        ViewKind::Questions => rsx! { QuestionsView {} },
        ViewKind::Results => rsx! { ResultsView {} },
        ViewKind::Upload => rsx! { UploadView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub sink: Arc<InMemorySink>,
    pub question_handles: Option<QuestionTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn test_user() -> UserInfo {
    UserInfo {
        email: AuthService::DEMO_EMAIL.to_string(),
        organization: "Acme Ltd".to_string(),
    }
}

/// Build a harness over the bundled catalog.
///
/// `prepare` runs against a freshly started session before the view mounts;
/// pass `None` as `user` to render the signed-out state.
pub async fn setup_view_harness(
    view: ViewKind,
    user: Option<UserInfo>,
    prepare: impl FnOnce(&AssessmentService, &mut AssessmentSession),
) -> ViewHarness {
    let sink = Arc::new(InMemorySink::new());
    let reports: Arc<dyn ReportSink> = sink.clone();
    let service = AssessmentService::from_source(
        Clock::fixed(fixed_now()),
        &InMemoryCatalog::bundled(),
        reports,
    )
    .await
    .expect("bundled catalog");

    let assessment = user.as_ref().map(|_| {
        let mut session = service.start_session();
        prepare(&service, &mut session);
        session
    });

    let app = Arc::new(TestApp {
        assessment: Arc::new(service),
        auth: Arc::new(AuthService::demo()),
    });

    let question_handles = match view {
        ViewKind::Questions => Some(QuestionTestHandles::default()),
        _ => None,
    };

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            user,
            assessment,
            question_handles: question_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        sink,
        question_handles,
    }
}

/// Answer every question with `option` (falling back to the first option).
pub fn answer_all(service: &AssessmentService, session: &mut AssessmentSession, option: &str) {
    let picks: Vec<_> = session
        .catalog()
        .iter()
        .map(|q| {
            let choice = if q.accepts(option) {
                option.to_string()
            } else {
                q.options()[0].clone()
            };
            (q.id().clone(), choice)
        })
        .collect();
    for (id, choice) in picks {
        service
            .record_answer(session, &id, &choice, None)
            .expect("valid answer");
    }
}
