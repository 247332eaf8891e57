use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use comply_core::Summary;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use thiserror::Error;

pub const RESULTS_SHEET: &str = "Compliance Results";
pub const SUMMARY_SHEET: &str = "Summary";

const RESULT_HEADERS: [&str; 5] = ["Category", "Question", "Response", "Risk Level", "Comments"];
const RESULT_WIDTHS: [f64; 5] = [26.0, 70.0, 16.0, 12.0, 40.0];

/// Errors surfaced while producing or saving a report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error(transparent)]
    Workbook(#[from] XlsxError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("report sink unavailable: {0}")]
    Sink(String),
}

//
// ─── WORKBOOK ──────────────────────────────────────────────────────────────────
//

/// Render a summary as an `.xlsx` workbook held in memory.
///
/// Sheet "Compliance Results" has one row per question; sheet "Summary" holds
/// metric/value pairs.
///
/// # Errors
///
/// Returns `ExportError::Workbook` if the workbook cannot be assembled.
pub fn build_workbook(summary: &Summary) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let results = workbook.add_worksheet();
    results.set_name(RESULTS_SHEET)?;
    for (col, (title, width)) in (0_u16..).zip(RESULT_HEADERS.iter().zip(RESULT_WIDTHS)) {
        results.write_string_with_format(0, col, *title, &header)?;
        results.set_column_width(col, width)?;
    }
    for (row, line) in (1_u32..).zip(summary.rows()) {
        results.write_string(row, 0, &line.category)?;
        results.write_string(row, 1, &line.question)?;
        results.write_string(row, 2, line.response.label())?;
        results.write_string(row, 3, line.risk_level.label())?;
        results.write_string(row, 4, &line.comment)?;
    }

    let totals = workbook.add_worksheet();
    totals.set_name(SUMMARY_SHEET)?;
    totals.write_string_with_format(0, 0, "Metric", &header)?;
    totals.write_string_with_format(0, 1, "Value", &header)?;
    totals.set_column_width(0, 22.0)?;
    totals.set_column_width(1, 12.0)?;
    totals.write_string(1, 0, "Compliance Score")?;
    totals.write_string(1, 1, summary.compliance_score_label())?;
    totals.write_string(2, 0, "Total Questions")?;
    totals.write_number(2, 1, count_cell(summary.total_questions()))?;
    totals.write_string(3, 0, "Questions Answered")?;
    totals.write_number(3, 1, count_cell(summary.answered()))?;

    Ok(workbook.save_to_buffer()?)
}

#[allow(clippy::cast_precision_loss)]
fn count_cell(value: usize) -> f64 {
    value as f64
}

/// `ndpa_compliance_report_<organization>.xlsx`, with the organization reduced
/// to characters that are safe in file names on every platform.
#[must_use]
pub fn report_file_name(organization: &str) -> String {
    let cleaned: String = organization
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_matches('_');
    let label = if cleaned.is_empty() { "unknown" } else { cleaned };
    format!("ndpa_compliance_report_{label}.xlsx")
}

//
// ─── SINKS ─────────────────────────────────────────────────────────────────────
//

/// Where a finished report ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedReport {
    pub file_name: String,
    /// Full path for file-backed sinks, `None` for in-memory ones.
    pub path: Option<PathBuf>,
    pub bytes: usize,
}

/// Destination for generated report files.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Take ownership of a finished report.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if the report cannot be stored.
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> Result<SavedReport, ExportError>;
}

/// Writes reports into a directory, replacing files with the same name.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl ReportSink for DirectorySink {
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> Result<SavedReport, ExportError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(file_name);
        let len = bytes.len();
        tokio::fs::write(&path, bytes).await?;
        tracing::info!(path = %path.display(), bytes = len, "report written");
        Ok(SavedReport {
            file_name: file_name.to_string(),
            path: Some(path),
            bytes: len,
        })
    }
}

/// Keeps reports in memory; used by tests and previews.
#[derive(Debug, Clone, Default)]
pub struct InMemorySink {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes of a previously saved report.
    #[must_use]
    pub fn get(&self, file_name: &str) -> Option<Vec<u8>> {
        self.files
            .lock()
            .ok()
            .and_then(|guard| guard.get(file_name).cloned())
    }
}

#[async_trait]
impl ReportSink for InMemorySink {
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> Result<SavedReport, ExportError> {
        let len = bytes.len();
        let mut guard = self
            .files
            .lock()
            .map_err(|e| ExportError::Sink(e.to_string()))?;
        guard.insert(file_name.to_string(), bytes);
        Ok(SavedReport {
            file_name: file_name.to_string(),
            path: None,
            bytes: len,
        })
    }
}
