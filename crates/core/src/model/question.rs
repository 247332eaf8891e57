use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::answer::Response;
use crate::model::catalog::CatalogError;
use crate::model::ids::QuestionId;

/// Options offered when a catalog entry does not list its own.
pub const DEFAULT_OPTIONS: [&str; 2] = ["Yes", "No"];

/// Answer that counts toward the compliance score unless a question overrides it.
pub const DEFAULT_COMPLIANT_OPTION: &str = "Yes";

//
// ─── RISK LEVEL ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown risk level: {0:?}")]
pub struct ParseRiskLevelError(pub String);

/// Severity classifier attached to each question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low];

    /// Lowercase form used in catalogs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        }
    }

    /// Title-cased form used in reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
        }
    }

    #[must_use]
    pub fn badge(self) -> &'static str {
        match self {
            RiskLevel::High => "🔴",
            RiskLevel::Medium => "🟡",
            RiskLevel::Low => "🟢",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = ParseRiskLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(RiskLevel::High),
            "medium" => Ok(RiskLevel::Medium),
            "low" => Ok(RiskLevel::Low),
            _ => Err(ParseRiskLevelError(s.to_string())),
        }
    }
}

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question as read from a catalog source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub category: String,
    pub risk_level: RiskLevel,
    pub question: String,
    pub guidance: String,
    pub options: Option<Vec<String>>,
    pub compliant_option: Option<String>,
}

impl QuestionDraft {
    /// Check the per-question invariants and produce an immutable `Question`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::BlankField` for a blank id, category or prompt.
    /// Returns `CatalogError::NoOptions` if an explicit option list is empty.
    /// Returns `CatalogError::DuplicateOption` if an option is listed twice.
    /// Returns `CatalogError::ReservedOption` if an option reads "Not Answered".
    /// Returns `CatalogError::UnknownCompliantOption` if the compliant option is not offered.
    pub fn validate(self) -> Result<Question, CatalogError> {
        if self.id.as_str().trim().is_empty() {
            return Err(CatalogError::BlankField {
                id: self.id,
                field: "id",
            });
        }
        for (field, value) in [("category", &self.category), ("question", &self.question)] {
            if value.trim().is_empty() {
                return Err(CatalogError::BlankField { id: self.id, field });
            }
        }

        let options = match self.options {
            Some(options) => options,
            None => DEFAULT_OPTIONS.iter().map(|o| (*o).to_string()).collect(),
        };
        if options.is_empty() {
            return Err(CatalogError::NoOptions(self.id));
        }
        for (idx, option) in options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(CatalogError::BlankField {
                    id: self.id,
                    field: "options",
                });
            }
            if option.trim().eq_ignore_ascii_case(Response::NOT_ANSWERED_LABEL) {
                return Err(CatalogError::ReservedOption {
                    id: self.id,
                    option: option.clone(),
                });
            }
            if options[..idx].contains(option) {
                return Err(CatalogError::DuplicateOption {
                    id: self.id,
                    option: option.clone(),
                });
            }
        }

        let compliant_option = match self.compliant_option {
            Some(option) if !options.contains(&option) => {
                return Err(CatalogError::UnknownCompliantOption {
                    id: self.id,
                    option,
                });
            }
            Some(option) => option,
            // Questions without a "Yes" option simply never score.
            None => DEFAULT_COMPLIANT_OPTION.to_string(),
        };

        Ok(Question {
            id: self.id,
            category: self.category.trim().to_string(),
            risk_level: self.risk_level,
            question: self.question,
            guidance: self.guidance,
            options,
            compliant_option,
        })
    }
}

/// A validated catalog entry. Immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    category: String,
    risk_level: RiskLevel,
    question: String,
    guidance: String,
    options: Vec<String>,
    compliant_option: String,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    /// The prompt text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn guidance(&self) -> &str {
        &self.guidance
    }

    /// Permissible answers, in display order. Never empty.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn compliant_option(&self) -> &str {
        &self.compliant_option
    }

    #[must_use]
    pub fn accepts(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    #[must_use]
    pub fn is_compliant(&self, option: &str) -> bool {
        self.compliant_option == option
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
