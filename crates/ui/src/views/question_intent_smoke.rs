use comply_core::model::QuestionId;

use super::test_harness::{ViewKind, drive_dom, setup_view_harness, test_user};

#[tokio::test(flavor = "current_thread")]
async fn comment_typed_before_selection_is_kept_on_the_answer() {
    let mut harness =
        setup_view_harness(ViewKind::Questions, Some(test_user()), |_, _| {}).await;
    harness.rebuild();

    let handles = harness.question_handles.clone().expect("question handles");
    let select = handles.select();
    let comment = handles.comment();
    let assessment = handles.assessment();

    let first = harness.dom.in_runtime(|| {
        assessment
            .peek()
            .as_ref()
            .and_then(|s| s.current_question().ok().map(|q| q.id().clone()))
    });
    let first = first.expect("first question");
    assert_eq!(first, QuestionId::new("dpv-1"));

    harness
        .dom
        .in_runtime(|| comment.call((first.clone(), "DPO appointed in March".to_string())));
    drive_dom(&mut harness.dom);

    let stored = harness.dom.in_runtime(|| {
        assessment
            .peek()
            .as_ref()
            .map(|s| s.answer_for(&first).is_some())
    });
    assert_eq!(stored, Some(false), "draft must not create an answer");
    let html = harness.render();
    assert!(html.contains("DPO appointed in March"), "draft missing in {html}");

    harness
        .dom
        .in_runtime(|| select.call((first.clone(), "Yes".to_string())));
    drive_dom(&mut harness.dom);

    let answer = harness.dom.in_runtime(|| {
        assessment
            .peek()
            .as_ref()
            .and_then(|s| s.answer_for(&first).cloned())
    });
    let answer = answer.expect("answer recorded");
    assert_eq!(answer.selected_option(), "Yes");
    assert_eq!(answer.comment(), Some("DPO appointed in March"));
    let html = harness.render();
    assert!(html.contains("DPO appointed in March"), "comment missing in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn editing_comment_after_selection_keeps_the_option() {
    let mut harness =
        setup_view_harness(ViewKind::Questions, Some(test_user()), |_, _| {}).await;
    harness.rebuild();

    let handles = harness.question_handles.clone().expect("question handles");
    let select = handles.select();
    let comment = handles.comment();
    let assessment = handles.assessment();
    let first = QuestionId::new("dpv-1");

    harness
        .dom
        .in_runtime(|| select.call((first.clone(), "No".to_string())));
    drive_dom(&mut harness.dom);
    harness
        .dom
        .in_runtime(|| comment.call((first.clone(), "register pending".to_string())));
    drive_dom(&mut harness.dom);

    let answer = harness.dom.in_runtime(|| {
        assessment
            .peek()
            .as_ref()
            .and_then(|s| s.answer_for(&first).cloned())
    });
    let answer = answer.expect("answer recorded");
    assert_eq!(answer.selected_option(), "No");
    assert_eq!(answer.comment(), Some("register pending"));

    harness
        .dom
        .in_runtime(|| select.call((first.clone(), "Maybe".to_string())));
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("alert-error"), "missing error in {html}");
    let kept = harness.dom.in_runtime(|| {
        assessment
            .peek()
            .as_ref()
            .and_then(|s| s.answer_for(&first).map(|a| a.selected_option().to_string()))
    });
    assert_eq!(kept.as_deref(), Some("No"));
}
