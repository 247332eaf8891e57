#![forbid(unsafe_code)]

pub mod auth_service;
pub mod document_intake;
pub mod error;
pub mod sessions;

pub use comply_core::Clock;
pub use sessions as session;

pub use auth_service::{AuthService, UserInfo};
pub use document_intake::{ACCEPTED_EXTENSIONS, DocumentIntake};
pub use error::{AssessmentServiceError, AuthError, DocumentError, SessionError};
pub use sessions::{AssessmentService, AssessmentSession, SessionProgress, SessionState};
pub use storage::SavedReport;
