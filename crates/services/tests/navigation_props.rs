use std::sync::Arc;

use comply_core::model::{Catalog, QuestionDraft, QuestionId, RiskLevel};
use comply_core::time::fixed_now;
use proptest::prelude::*;
use services::AssessmentSession;

#[derive(Debug, Clone)]
enum Step {
    Advance,
    Retreat,
    GoTo(usize),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Advance),
        Just(Step::Retreat),
        (0_usize..40).prop_map(Step::GoTo),
    ]
}

fn catalog(len: usize) -> Arc<Catalog> {
    let drafts = (0..len)
        .map(|i| QuestionDraft {
            id: QuestionId::new(format!("q{i}")),
            category: format!("C{}", i % 3),
            risk_level: RiskLevel::ALL[i % 3],
            question: format!("Question {i}?"),
            guidance: String::new(),
            options: None,
            compliant_option: None,
        })
        .collect();
    Arc::new(Catalog::from_drafts(drafts).unwrap())
}

proptest! {
    #[test]
    fn index_stays_inside_catalog(len in 1_usize..15, steps in prop::collection::vec(step(), 0..60)) {
        let mut session = AssessmentSession::new(catalog(len), fixed_now());
        for step in steps {
            match step {
                Step::Advance => session.advance(),
                Step::Retreat => session.retreat(),
                Step::GoTo(i) => session.go_to(i),
            }
            prop_assert!(session.current_index() < len);
            prop_assert!(session.current_question().is_ok());
            prop_assert_eq!(session.progress().position, session.current_index() + 1);
        }
    }

    #[test]
    fn answered_count_never_exceeds_total(len in 1_usize..10, picks in prop::collection::vec((0_usize..10, any::<bool>()), 0..30)) {
        let mut session = AssessmentSession::new(catalog(len), fixed_now());
        for (idx, yes) in picks {
            let id = QuestionId::new(format!("q{}", idx % len));
            session.record_answer(&id, if yes { "Yes" } else { "No" }, None).unwrap();
        }
        let progress = session.progress();
        prop_assert!(progress.answered <= progress.total);
        prop_assert_eq!(progress.answered + progress.remaining, progress.total);
        let summary = session.summary();
        prop_assert!((0.0..=100.0).contains(&summary.compliance_score()));
    }
}
