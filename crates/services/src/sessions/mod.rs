mod progress;
mod service;
mod workflow;

// Public API of the assessment subsystem.
pub use crate::error::SessionError;
pub use progress::SessionProgress;
pub use service::{AssessmentSession, SessionState};
pub use workflow::AssessmentService;
