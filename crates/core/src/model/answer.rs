use std::collections::BTreeMap;
use std::fmt;

use crate::model::ids::QuestionId;

/// Answers keyed by question id. Ordered so that derived output is stable.
pub type AnswerSet = BTreeMap<QuestionId, Answer>;

/// The user's choice for one question, plus an optional note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    question_id: QuestionId,
    selected_option: String,
    comment: Option<String>,
}

impl Answer {
    /// Blank comments are stored as absent.
    #[must_use]
    pub fn new(
        question_id: QuestionId,
        selected_option: impl Into<String>,
        comment: Option<String>,
    ) -> Self {
        let comment = comment.filter(|c| !c.trim().is_empty());
        Self {
            question_id,
            selected_option: selected_option.into(),
            comment,
        }
    }

    #[must_use]
    pub fn question_id(&self) -> &QuestionId {
        &self.question_id
    }

    #[must_use]
    pub fn selected_option(&self) -> &str {
        &self.selected_option
    }

    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// What a summary reports for one question.
///
/// `NotAnswered` is never confused with a real option, even one spelled
/// "Not Answered". Answered values sort before it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Response {
    Answered(String),
    NotAnswered,
}

impl Response {
    pub const NOT_ANSWERED_LABEL: &'static str = "Not Answered";

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Response::Answered(option) => option,
            Response::NotAnswered => Self::NOT_ANSWERED_LABEL,
        }
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        matches!(self, Response::Answered(_))
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
