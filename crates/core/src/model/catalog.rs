use std::collections::HashMap;

use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::{Question, QuestionDraft};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Reasons a catalog cannot be used. All of them are fatal at startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog {origin} could not be read: {reason}")]
    Unreadable { origin: String, reason: String },

    #[error("catalog is malformed: {0}")]
    Malformed(String),

    #[error("catalog contains no questions")]
    Empty,

    #[error("question id {0} appears more than once")]
    DuplicateId(QuestionId),

    #[error("question {0} has no options")]
    NoOptions(QuestionId),

    #[error("question {id} lists option {option:?} more than once")]
    DuplicateOption { id: QuestionId, option: String },

    #[error("question {id} offers {option:?}, which is reserved for unanswered questions")]
    ReservedOption { id: QuestionId, option: String },

    #[error("question {id:?} has a blank {field}")]
    BlankField { id: QuestionId, field: &'static str },

    #[error("question {id} marks {option:?} as compliant but does not offer it")]
    UnknownCompliantOption { id: QuestionId, option: String },
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// The fixed, ordered question set for an assessment.
///
/// Always holds at least one question and never repeats an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    questions: Vec<Question>,
    positions: HashMap<QuestionId, usize>,
}

impl Catalog {
    /// Build a catalog from already validated questions.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for an empty list and
    /// `CatalogError::DuplicateId` if two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut positions = HashMap::with_capacity(questions.len());
        for (idx, question) in questions.iter().enumerate() {
            if positions.insert(question.id().clone(), idx).is_some() {
                return Err(CatalogError::DuplicateId(question.id().clone()));
            }
        }

        Ok(Self {
            questions,
            positions,
        })
    }

    /// Validate drafts in order and build a catalog from them.
    ///
    /// # Errors
    ///
    /// Returns the first `CatalogError` found, in catalog order.
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, CatalogError> {
        let questions = drafts
            .into_iter()
            .map(QuestionDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn position(&self, id: &QuestionId) -> Option<usize> {
        self.positions.get(id).copied()
    }

    #[must_use]
    pub fn find(&self, id: &QuestionId) -> Option<&Question> {
        self.position(id).map(|idx| &self.questions[idx])
    }

    /// Distinct categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for question in &self.questions {
            if !seen.contains(&question.category()) {
                seen.push(question.category());
            }
        }
        seen
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
