use std::sync::Arc;

use dioxus::prelude::*;
use services::{AssessmentService, AssessmentSession, AuthService, DocumentIntake, UserInfo};

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn assessment(&self) -> Arc<AssessmentService>;
    fn auth(&self) -> Arc<AuthService>;
}

#[derive(Clone)]
pub struct AppContext {
    assessment: Arc<AssessmentService>,
    auth: Arc<AuthService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            assessment: app.assessment(),
            auth: app.auth(),
        }
    }

    #[must_use]
    pub fn assessment(&self) -> Arc<AssessmentService> {
        Arc::clone(&self.assessment)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(&app)
}

/// Per-window state of the signed-in user.
///
/// Dropping back to the login screen clears all three.
#[derive(Clone, Copy, PartialEq)]
pub struct UserSession {
    pub user: Signal<Option<UserInfo>>,
    pub assessment: Signal<Option<AssessmentSession>>,
    pub documents: Signal<DocumentIntake>,
}

impl UserSession {
    /// Sign in and start a fresh assessment.
    pub fn sign_in(&mut self, user: UserInfo, assessment: AssessmentSession) {
        self.assessment.set(Some(assessment));
        self.documents.set(DocumentIntake::new());
        self.user.set(Some(user));
    }

    pub fn sign_out(&mut self) {
        self.user.set(None);
        self.assessment.set(None);
        self.documents.set(DocumentIntake::new());
    }
}

/// Create the user session signals and provide them to descendants.
pub fn use_user_session_provider(
    user: Option<UserInfo>,
    assessment: Option<AssessmentSession>,
) -> UserSession {
    let user = use_signal(move || user);
    let assessment = use_signal(move || assessment);
    let documents = use_signal(DocumentIntake::new);
    use_context_provider(|| UserSession {
        user,
        assessment,
        documents,
    })
}
