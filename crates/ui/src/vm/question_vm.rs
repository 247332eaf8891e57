use comply_core::model::{QuestionId, RiskLevel};
use services::AssessmentSession;

use crate::vm::markdown_vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    pub selected: bool,
}

/// Everything the Answer Questions page shows for the current question.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionVm {
    pub id: QuestionId,
    pub position_label: String,
    pub progress_percent: f64,
    pub category: String,
    pub risk_badge: &'static str,
    pub risk_label: &'static str,
    pub risk_class: &'static str,
    pub text: String,
    pub guidance_html: String,
    pub options: Vec<OptionVm>,
    pub comment: String,
    pub is_first: bool,
    pub is_last: bool,
    pub answered: usize,
    pub total: usize,
    pub locked: bool,
}

#[must_use]
pub fn risk_class(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "risk-high",
        RiskLevel::Medium => "risk-medium",
        RiskLevel::Low => "risk-low",
    }
}

#[must_use]
pub fn map_current_question(session: &AssessmentSession) -> Option<QuestionVm> {
    let question = session.current_question().ok()?;
    let progress = session.progress();
    let answer = session.answer_for(question.id());
    let selected = answer.map(|a| a.selected_option());

    Some(QuestionVm {
        id: question.id().clone(),
        position_label: format!("Question {} of {}", progress.position, progress.total),
        progress_percent: progress.position_fraction() * 100.0,
        category: question.category().to_string(),
        risk_badge: question.risk_level().badge(),
        risk_label: question.risk_level().label(),
        risk_class: risk_class(question.risk_level()),
        text: question.text().to_string(),
        guidance_html: markdown_to_html(question.guidance()),
        options: question
            .options()
            .iter()
            .map(|option| OptionVm {
                label: option.clone(),
                selected: selected == Some(option.as_str()),
            })
            .collect(),
        comment: answer
            .and_then(|a| a.comment())
            .unwrap_or_default()
            .to_string(),
        is_first: session.is_first(),
        is_last: session.is_last(),
        answered: progress.answered,
        total: progress.total,
        locked: progress.is_complete,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use comply_core::model::{Catalog, QuestionDraft};
    use comply_core::time::fixed_now;

    use super::*;

    fn session() -> AssessmentSession {
        let drafts = vec![
            QuestionDraft {
                id: QuestionId::new("q1"),
                category: "Security Standards".into(),
                risk_level: RiskLevel::High,
                question: "Is data encrypted at rest?".into(),
                guidance: "Check **all** storage.".into(),
                options: None,
                compliant_option: None,
            },
            QuestionDraft {
                id: QuestionId::new("q2"),
                category: "Incident Management".into(),
                risk_level: RiskLevel::Low,
                question: "Is there a breach log?".into(),
                guidance: String::new(),
                options: Some(vec!["Yes".into(), "Partly".into(), "No".into()]),
                compliant_option: None,
            },
        ];
        AssessmentSession::new(Arc::new(Catalog::from_drafts(drafts).unwrap()), fixed_now())
    }

    #[test]
    fn first_question_has_no_selection() {
        let vm = map_current_question(&session()).unwrap();
        assert_eq!(vm.position_label, "Question 1 of 2");
        assert!((vm.progress_percent - 50.0).abs() < f64::EPSILON);
        assert_eq!(vm.risk_badge, "🔴");
        assert_eq!(vm.risk_class, "risk-high");
        assert!(vm.guidance_html.contains("<strong>all</strong>"));
        assert!(vm.options.iter().all(|o| !o.selected));
        assert!(vm.is_first);
        assert!(!vm.is_last);
    }

    #[test]
    fn recorded_answer_is_selected_with_comment() {
        let mut session = session();
        session.advance();
        session
            .record_answer(&QuestionId::new("q2"), "Partly", Some("log started".into()))
            .unwrap();

        let vm = map_current_question(&session).unwrap();
        let selected: Vec<_> = vm
            .options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(selected, ["Partly"]);
        assert_eq!(vm.comment, "log started");
        assert_eq!(vm.answered, 1);
        assert!(vm.is_last);
    }
}
