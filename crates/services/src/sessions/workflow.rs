use std::sync::Arc;

use comply_core::model::{Catalog, QuestionId};
use storage::{CatalogSource, ReportSink, SavedReport, build_workbook, report_file_name};

use super::service::AssessmentSession;
use crate::Clock;
use crate::error::{AssessmentServiceError, SessionError};

/// Orchestrates assessment start, submission and report export.
#[derive(Clone)]
pub struct AssessmentService {
    clock: Clock,
    catalog: Arc<Catalog>,
    reports: Arc<dyn ReportSink>,
}

impl AssessmentService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<Catalog>, reports: Arc<dyn ReportSink>) -> Self {
        Self {
            clock,
            catalog,
            reports,
        }
    }

    /// Load the catalog from `source` and build the service around it.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentServiceError::Catalog` if the catalog cannot be loaded.
    pub async fn from_source(
        clock: Clock,
        source: &dyn CatalogSource,
        reports: Arc<dyn ReportSink>,
    ) -> Result<Self, AssessmentServiceError> {
        let catalog = source.load().await?;
        Ok(Self::new(clock, Arc::new(catalog), reports))
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// Start a fresh assessment over the whole catalog.
    #[must_use]
    pub fn start_session(&self) -> AssessmentSession {
        let session = AssessmentSession::new(Arc::clone(&self.catalog), self.clock.now());
        tracing::debug!(assessment = %session.id(), questions = self.catalog.len(), "assessment started");
        session
    }

    /// Record an answer and log the change.
    ///
    /// # Errors
    ///
    /// Propagates `SessionError` from the session unchanged.
    pub fn record_answer(
        &self,
        session: &mut AssessmentSession,
        question_id: &QuestionId,
        selected_option: &str,
        comment: Option<String>,
    ) -> Result<(), SessionError> {
        match session.record_answer(question_id, selected_option, comment) {
            Ok(_) => {
                tracing::debug!(
                    assessment = %session.id(),
                    question = %question_id,
                    option = selected_option,
                    "answer recorded"
                );
                Ok(())
            }
            Err(err) => {
                tracing::debug!(assessment = %session.id(), %err, "answer rejected");
                Err(err)
            }
        }
    }

    /// Submit the assessment using the service clock.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::IncompleteSubmission` when answers are missing.
    pub fn submit(&self, session: &mut AssessmentSession) -> Result<(), SessionError> {
        match session.submit(self.clock.now()) {
            Ok(()) => {
                tracing::info!(
                    assessment = %session.id(),
                    score = session.summary().compliance_score(),
                    "assessment submitted"
                );
                Ok(())
            }
            Err(err) => {
                tracing::warn!(assessment = %session.id(), %err, "submission rejected");
                Err(err)
            }
        }
    }

    /// Build the workbook for a submitted assessment and hand it to the sink.
    ///
    /// The workbook is assembled on the blocking pool; the buffer is released
    /// once the sink has it.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentServiceError::NotCompleted` for unsubmitted sessions and
    /// `AssessmentServiceError::Export` if generation or saving fails.
    pub async fn export(
        &self,
        session: &AssessmentSession,
        organization: &str,
    ) -> Result<SavedReport, AssessmentServiceError> {
        if !session.is_complete() {
            return Err(AssessmentServiceError::NotCompleted);
        }

        let summary = session.summary();
        let bytes = tokio::task::spawn_blocking(move || build_workbook(&summary))
            .await
            .map_err(|err| AssessmentServiceError::Interrupted(err.to_string()))??;

        let file_name = report_file_name(organization);
        let saved = self.reports.save(&file_name, bytes).await?;
        tracing::info!(
            assessment = %session.id(),
            file = %saved.file_name,
            bytes = saved.bytes,
            "report exported"
        );
        Ok(saved)
    }
}
