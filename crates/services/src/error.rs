//! Shared error types for the services crate.

use thiserror::Error;

use comply_core::model::{CatalogError, QuestionId};
use storage::ExportError;

/// Errors emitted by `AssessmentSession`.
///
/// Every variant is returned before any state is touched, so a failed call
/// leaves the session exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("{option:?} is not an option for question {question_id}")]
    InvalidOption {
        question_id: QuestionId,
        option: String,
    },
    #[error("question {0} is not part of this assessment")]
    UnknownQuestion(QuestionId),
    #[error("{answered} of {total} questions answered; answer all questions before submitting")]
    IncompleteSubmission { answered: usize, total: usize },
    #[error("question index {index} is outside 0..{len}")]
    OutOfRange { index: usize, len: usize },
    #[error("assessment already submitted")]
    AlreadyCompleted,
}

/// Errors emitted by `AssessmentService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssessmentServiceError {
    #[error("assessment must be submitted before it can be exported")]
    NotCompleted,
    #[error("report generation was interrupted: {0}")]
    Interrupted(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
}

/// Errors emitted by `DocumentIntake`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DocumentError {
    #[error("{name}: only PDF, DOCX and TXT files are accepted")]
    UnsupportedType { name: String },
    #[error("file name is empty")]
    EmptyName,
}
