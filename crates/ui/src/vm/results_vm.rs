use comply_core::Summary;
use services::SavedReport;

use crate::vm::question_vm::risk_class;

/// One horizontal bar; `width_percent` is relative to the longest bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarVm {
    pub label: String,
    pub count: usize,
    pub width_percent: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RiskBarVm {
    pub category: String,
    pub risk_label: &'static str,
    pub risk_class: &'static str,
    pub count: usize,
    pub width_percent: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryRowVm {
    pub category: String,
    pub counts: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRowVm {
    pub category: String,
    pub question: String,
    pub response: String,
    pub risk_label: &'static str,
    pub comment: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_label: String,
    pub total: usize,
    pub answered: usize,
    pub compliant: usize,
    pub columns: Vec<String>,
    pub category_rows: Vec<CategoryRowVm>,
    pub distribution: Vec<BarVm>,
    pub risk_breakdown: Vec<RiskBarVm>,
    pub details: Vec<DetailRowVm>,
}

/// Where an exported report ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportVm {
    pub file_name: String,
    pub location: String,
}

impl From<SavedReport> for ExportVm {
    fn from(saved: SavedReport) -> Self {
        let location = saved
            .path
            .as_ref()
            .map_or_else(|| saved.file_name.clone(), |p| p.display().to_string());
        Self {
            file_name: saved.file_name,
            location,
        }
    }
}

/// Bar length as a whole percentage of `max`, never zero for a non-zero count.
#[must_use]
pub fn bar_width(count: usize, max: usize) -> usize {
    if max == 0 || count == 0 {
        return 0;
    }
    (count * 100 / max).max(1)
}

#[must_use]
pub fn map_results(summary: &Summary) -> ResultsVm {
    let table = summary.category_table();

    let dist_max = summary
        .distribution()
        .iter()
        .map(|(_, n)| *n)
        .max()
        .unwrap_or(0);
    let distribution = summary
        .distribution()
        .iter()
        .map(|(response, count)| BarVm {
            label: response.label().to_string(),
            count: *count,
            width_percent: bar_width(*count, dist_max),
        })
        .collect();

    let risk_max = summary
        .risk_breakdown()
        .iter()
        .map(|entry| entry.count)
        .max()
        .unwrap_or(0);
    let risk_breakdown = summary
        .risk_breakdown()
        .iter()
        .map(|entry| RiskBarVm {
            category: entry.category.clone(),
            risk_label: entry.risk_level.label(),
            risk_class: risk_class(entry.risk_level),
            count: entry.count,
            width_percent: bar_width(entry.count, risk_max),
        })
        .collect();

    ResultsVm {
        score_label: summary.compliance_score_label(),
        total: summary.total_questions(),
        answered: summary.answered(),
        compliant: summary.compliant(),
        columns: table
            .columns()
            .iter()
            .map(|r| r.label().to_string())
            .collect(),
        category_rows: table
            .rows()
            .iter()
            .map(|row| CategoryRowVm {
                category: row.category.clone(),
                counts: row.counts.clone(),
            })
            .collect(),
        distribution,
        risk_breakdown,
        details: summary
            .rows()
            .iter()
            .map(|row| DetailRowVm {
                category: row.category.clone(),
                question: row.question.clone(),
                response: row.response.label().to_string(),
                risk_label: row.risk_level.label(),
                comment: row.comment.clone(),
            })
            .collect(),
    }
}
