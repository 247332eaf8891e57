//! Summary statistics over an answer set.
//!
//! Everything here is a pure function of the catalog and the answers, so a
//! summary can be recomputed at any time and compared for equality.

use std::collections::BTreeMap;

use crate::model::{AnswerSet, Catalog, QuestionId, Response, RiskLevel};

//
// ─── SUMMARY TYPES ─────────────────────────────────────────────────────────────
//

/// One line of the detail table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub question_id: QuestionId,
    pub category: String,
    pub question: String,
    pub response: Response,
    pub risk_level: RiskLevel,
    /// Empty when no comment was left.
    pub comment: String,
}

/// Category × response contingency table.
///
/// Rows are sorted by category, columns by response; every cell is present.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryTable {
    columns: Vec<Response>,
    rows: Vec<CategoryRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub category: String,
    /// Aligned with `CategoryTable::columns`.
    pub counts: Vec<usize>,
}

impl CategoryTable {
    #[must_use]
    pub fn columns(&self) -> &[Response] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[CategoryRow] {
        &self.rows
    }

    /// Cell lookup; combinations that never occurred count as zero.
    #[must_use]
    pub fn count(&self, category: &str, response: &Response) -> usize {
        let Some(col) = self.columns.iter().position(|c| c == response) else {
            return 0;
        };
        self.rows
            .iter()
            .find(|row| row.category == category)
            .map_or(0, |row| row.counts[col])
    }

    fn from_rows(rows: &[SummaryRow]) -> Self {
        let mut cells: BTreeMap<&str, BTreeMap<&Response, usize>> = BTreeMap::new();
        let mut columns: Vec<Response> = Vec::new();

        for row in rows {
            *cells
                .entry(row.category.as_str())
                .or_default()
                .entry(&row.response)
                .or_insert(0) += 1;
            if !columns.contains(&row.response) {
                columns.push(row.response.clone());
            }
        }
        columns.sort();

        let rows = cells
            .into_iter()
            .map(|(category, counts)| CategoryRow {
                category: category.to_string(),
                counts: columns
                    .iter()
                    .map(|col| counts.get(col).copied().unwrap_or(0))
                    .collect(),
            })
            .collect();

        Self { columns, rows }
    }
}

/// Number of questions sharing a (category, risk level) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskBreakdownEntry {
    pub category: String,
    pub risk_level: RiskLevel,
    pub count: usize,
}

/// Scored view of an assessment, ready for display or export.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    rows: Vec<SummaryRow>,
    compliant: usize,
    answered: usize,
    compliance_score: f64,
    category_table: CategoryTable,
    distribution: Vec<(Response, usize)>,
    risk_breakdown: Vec<RiskBreakdownEntry>,
}

impl Summary {
    /// Per-question rows in catalog order.
    #[must_use]
    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn answered(&self) -> usize {
        self.answered
    }

    #[must_use]
    pub fn compliant(&self) -> usize {
        self.compliant
    }

    /// Percentage in `[0, 100]`.
    #[must_use]
    pub fn compliance_score(&self) -> f64 {
        self.compliance_score
    }

    /// The score as shown to users and written to reports, e.g. `75.0%`.
    #[must_use]
    pub fn compliance_score_label(&self) -> String {
        format_score(self.compliance_score)
    }

    #[must_use]
    pub fn category_table(&self) -> &CategoryTable {
        &self.category_table
    }

    /// Count per distinct response value, sorted by response.
    #[must_use]
    pub fn distribution(&self) -> &[(Response, usize)] {
        &self.distribution
    }

    /// Counts per (category, risk level), sorted by category then severity.
    #[must_use]
    pub fn risk_breakdown(&self) -> &[RiskBreakdownEntry] {
        &self.risk_breakdown
    }
}

#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{score:.1}%")
}

//
// ─── SUMMARIZE ─────────────────────────────────────────────────────────────────
//

/// Derive a `Summary` from the catalog and whatever answers exist.
///
/// Questions without an answer are reported as `Response::NotAnswered` and
/// count against the score. Answers for ids outside the catalog are ignored.
#[must_use]
pub fn summarize(catalog: &Catalog, answers: &AnswerSet) -> Summary {
    let mut compliant = 0_usize;
    let mut rows = Vec::with_capacity(catalog.len());

    for question in catalog {
        let answer = answers.get(question.id());
        let response = match answer {
            Some(answer) => {
                if question.is_compliant(answer.selected_option()) {
                    compliant += 1;
                }
                Response::Answered(answer.selected_option().to_string())
            }
            None => Response::NotAnswered,
        };

        rows.push(SummaryRow {
            question_id: question.id().clone(),
            category: question.category().to_string(),
            question: question.text().to_string(),
            response,
            risk_level: question.risk_level(),
            comment: answer
                .and_then(|a| a.comment())
                .unwrap_or_default()
                .to_string(),
        });
    }

    let answered = rows.iter().filter(|row| row.response.is_answered()).count();
    #[allow(clippy::cast_precision_loss)]
    let compliance_score = if rows.is_empty() {
        0.0
    } else {
        compliant as f64 / rows.len() as f64 * 100.0
    };

    let mut distribution: BTreeMap<&Response, usize> = BTreeMap::new();
    let mut breakdown: BTreeMap<(&str, RiskLevel), usize> = BTreeMap::new();
    for row in &rows {
        *distribution.entry(&row.response).or_insert(0) += 1;
        *breakdown
            .entry((row.category.as_str(), row.risk_level))
            .or_insert(0) += 1;
    }
    let distribution = distribution
        .into_iter()
        .map(|(response, count)| (response.clone(), count))
        .collect();
    let risk_breakdown = breakdown
        .into_iter()
        .map(|((category, risk_level), count)| RiskBreakdownEntry {
            category: category.to_string(),
            risk_level,
            count,
        })
        .collect();

    let category_table = CategoryTable::from_rows(&rows);

    Summary {
        rows,
        compliant,
        answered,
        compliance_score,
        category_table,
        distribution,
        risk_breakdown,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
