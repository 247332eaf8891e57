use services::{AssessmentServiceError, AuthError, DocumentError, SessionError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    InvalidCredentials,
    IncompleteSubmission,
    AlreadySubmitted,
    NotSubmitted,
    UnsupportedFile,
    ExportFailed,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::InvalidCredentials => "Invalid email or password",
            ViewError::IncompleteSubmission => "Please answer all questions before submitting.",
            ViewError::AlreadySubmitted => "This assessment has already been submitted.",
            ViewError::NotSubmitted => "Please complete the assessment before viewing results.",
            ViewError::UnsupportedFile => "Only PDF, DOCX and TXT files are accepted.",
            ViewError::ExportFailed => "The report could not be saved. Please try again.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&SessionError> for ViewError {
    fn from(err: &SessionError) -> Self {
        match err {
            SessionError::IncompleteSubmission { .. } => ViewError::IncompleteSubmission,
            SessionError::AlreadyCompleted => ViewError::AlreadySubmitted,
            _ => ViewError::Unknown,
        }
    }
}

impl From<&AssessmentServiceError> for ViewError {
    fn from(err: &AssessmentServiceError) -> Self {
        match err {
            AssessmentServiceError::NotCompleted => ViewError::NotSubmitted,
            AssessmentServiceError::Export(_) | AssessmentServiceError::Interrupted(_) => {
                ViewError::ExportFailed
            }
            _ => ViewError::Unknown,
        }
    }
}

impl From<&AuthError> for ViewError {
    fn from(_: &AuthError) -> Self {
        ViewError::InvalidCredentials
    }
}

impl From<&DocumentError> for ViewError {
    fn from(_: &DocumentError) -> Self {
        ViewError::UnsupportedFile
    }
}

/// Progress of a one-shot action triggered from a view.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

impl<T> ViewState<T> {
    #[must_use]
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        for<'a> ViewError: From<&'a E>,
    {
        match result {
            Ok(value) => ViewState::Ready(value),
            Err(err) => ViewState::Error(ViewError::from(&err)),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}
