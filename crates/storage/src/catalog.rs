use std::path::{Path, PathBuf};

use async_trait::async_trait;
use comply_core::model::{Catalog, CatalogError, QuestionDraft, QuestionId, RiskLevel};
use serde::Deserialize;

/// The NDPA question set shipped with the application.
pub const BUNDLED_CATALOG_JSON: &str = include_str!("../assets/ndpa_questions.json");

/// Where the question catalog comes from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable origin, used in logs and errors.
    fn origin(&self) -> String;

    /// Read and validate the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the source is missing, malformed, or violates
    /// catalog invariants.
    async fn load(&self) -> Result<Catalog, CatalogError>;
}

//
// ─── SOURCE DOCUMENT ───────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    questions: Vec<QuestionEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EntryId {
    Text(String),
    Integer(i64),
}

impl From<EntryId> for QuestionId {
    fn from(value: EntryId) -> Self {
        match value {
            EntryId::Text(text) => QuestionId::new(text),
            EntryId::Integer(n) => QuestionId::new(n.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct QuestionEntry {
    id: EntryId,
    category: String,
    risk_level: String,
    question: String,
    guidance: String,
    #[serde(default)]
    options: Option<Vec<String>>,
    #[serde(default)]
    compliant_option: Option<String>,
}

impl QuestionEntry {
    fn into_draft(self) -> Result<QuestionDraft, CatalogError> {
        let id = QuestionId::from(self.id);
        let risk_level = self
            .risk_level
            .parse::<RiskLevel>()
            .map_err(|err| CatalogError::Malformed(format!("question {id}: {err}")))?;
        Ok(QuestionDraft {
            id,
            category: self.category,
            risk_level,
            question: self.question,
            guidance: self.guidance,
            options: self.options,
            compliant_option: self.compliant_option,
        })
    }
}

/// Parse a catalog document (`{"questions": [...]}`) and validate it.
///
/// # Errors
///
/// Returns `CatalogError::Malformed` for JSON or field errors, and the
/// validation variants of `CatalogError` for invariant violations.
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let document: CatalogDocument =
        serde_json::from_str(json).map_err(|err| CatalogError::Malformed(err.to_string()))?;
    let drafts = document
        .questions
        .into_iter()
        .map(QuestionEntry::into_draft)
        .collect::<Result<Vec<_>, _>>()?;
    Catalog::from_drafts(drafts)
}

//
// ─── SOURCES ───────────────────────────────────────────────────────────────────
//

/// Catalog stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonCatalogFile {
    path: PathBuf,
}

impl JsonCatalogFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonCatalogFile {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Catalog, CatalogError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|err| CatalogError::Unreadable {
                origin: self.origin(),
                reason: err.to_string(),
            })?;
        let catalog = parse_catalog(&text)?;
        tracing::info!(
            origin = %self.path.display(),
            questions = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

/// Catalog held in memory, either bundled or supplied by the caller.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    label: String,
    json: String,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn from_json(label: impl Into<String>, json: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            json: json.into(),
        }
    }

    #[must_use]
    pub fn bundled() -> Self {
        Self::from_json("bundled NDPA catalog", BUNDLED_CATALOG_JSON)
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::bundled()
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    fn origin(&self) -> String {
        self.label.clone()
    }

    async fn load(&self) -> Result<Catalog, CatalogError> {
        let catalog = parse_catalog(&self.json)?;
        tracing::info!(origin = %self.label, questions = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}
