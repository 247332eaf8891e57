use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

use comply_core::model::{Answer, AnswerSet, AssessmentId, Catalog, Question, QuestionId};
use comply_core::{Summary, summarize};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Lifecycle of an assessment. `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Completed,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory assessment for one user.
///
/// Steps through the catalog in order, records one answer per question and
/// derives a `Summary` on demand. `current_index` always stays inside the
/// catalog: navigation clamps at both ends.
#[derive(Clone)]
pub struct AssessmentSession {
    id: AssessmentId,
    catalog: Arc<Catalog>,
    current: usize,
    answers: AnswerSet,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl AssessmentSession {
    /// `started_at` should come from the services layer clock.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, started_at: DateTime<Utc>) -> Self {
        Self {
            id: AssessmentId::generate(),
            catalog,
            current: 0,
            answers: AnswerSet::new(),
            started_at,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> AssessmentId {
        self.id
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.completed_at.is_some() {
            SessionState::Completed
        } else if self.current == 0 && self.answers.is_empty() {
            SessionState::NotStarted
        } else {
            SessionState::InProgress
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.catalog.len()
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.catalog.len()
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    #[must_use]
    pub fn answer_for(&self, question_id: &QuestionId) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    /// Ids of questions still waiting for an answer, in catalog order.
    #[must_use]
    pub fn unanswered(&self) -> Vec<&QuestionId> {
        self.catalog
            .iter()
            .map(Question::id)
            .filter(|id| !self.answers.contains_key(*id))
            .collect()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.catalog.len();
        let answered = self.answers.len();
        SessionProgress {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            position: self.current + 1,
            is_complete: self.is_complete(),
        }
    }

    /// The question at the current position.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::OutOfRange` if the index is outside the catalog.
    /// Navigation never produces such an index.
    pub fn current_question(&self) -> Result<&Question, SessionError> {
        self.catalog
            .get(self.current)
            .ok_or(SessionError::OutOfRange {
                index: self.current,
                len: self.catalog.len(),
            })
    }

    /// Store (or overwrite) the answer for a question.
    ///
    /// Recording the same answer twice leaves the session unchanged.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyCompleted` after submission,
    /// `SessionError::UnknownQuestion` for ids outside the catalog, and
    /// `SessionError::InvalidOption` if the option is not offered.
    pub fn record_answer(
        &mut self,
        question_id: &QuestionId,
        selected_option: &str,
        comment: Option<String>,
    ) -> Result<&Answer, SessionError> {
        if self.is_complete() {
            return Err(SessionError::AlreadyCompleted);
        }
        let question = self
            .catalog
            .find(question_id)
            .ok_or_else(|| SessionError::UnknownQuestion(question_id.clone()))?;
        if !question.accepts(selected_option) {
            return Err(SessionError::InvalidOption {
                question_id: question_id.clone(),
                option: selected_option.to_string(),
            });
        }

        let answer = Answer::new(question_id.clone(), selected_option, comment);
        self.answers.insert(question_id.clone(), answer);
        self.answers
            .get(question_id)
            .ok_or_else(|| SessionError::UnknownQuestion(question_id.clone()))
    }

    /// Move to the next question; stays put on the last one.
    pub fn advance(&mut self) {
        if self.current + 1 < self.catalog.len() {
            self.current += 1;
        }
    }

    /// Move to the previous question; stays put on the first one.
    pub fn retreat(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Jump to a position, clamped into the catalog.
    pub fn go_to(&mut self, index: usize) {
        self.current = index.min(self.catalog.len().saturating_sub(1));
    }

    /// Confirm the assessment. Submitting twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::IncompleteSubmission` unless every question has
    /// an answer; the session then stays in progress.
    pub fn submit(&mut self, completed_at: DateTime<Utc>) -> Result<(), SessionError> {
        if self.is_complete() {
            return Ok(());
        }
        let total = self.catalog.len();
        let answered = self.answers.len();
        if answered != total {
            return Err(SessionError::IncompleteSubmission { answered, total });
        }
        self.completed_at = Some(completed_at);
        Ok(())
    }

    /// Scored view of the current answers; tolerant of unanswered questions.
    #[must_use]
    pub fn summary(&self) -> Summary {
        summarize(&self.catalog, &self.answers)
    }
}

impl fmt::Debug for AssessmentSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssessmentSession")
            .field("id", &self.id)
            .field("catalog_len", &self.catalog.len())
            .field("current", &self.current)
            .field("answers_len", &self.answers.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

impl PartialEq for AssessmentSession {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.current == other.current
            && self.answers == other.answers
            && self.completed_at == other.completed_at
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
