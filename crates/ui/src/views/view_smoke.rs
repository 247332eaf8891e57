use services::SessionState;

use super::test_harness::{ViewKind, answer_all, setup_view_harness, test_user};

#[tokio::test(flavor = "current_thread")]
async fn shell_without_user_shows_login_form() {
    let mut harness = setup_view_harness(ViewKind::Shell, None, |_, _| {}).await;
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("NDPA Compliance Assessment Login"),
        "missing login title in {html}"
    );
    assert!(html.contains("Organization Name"), "missing field in {html}");
    assert!(!html.contains("Logged in as:"), "sidebar leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shell_with_user_shows_sidebar_and_home() {
    let mut harness = setup_view_harness(ViewKind::Shell, Some(test_user()), |_, _| {}).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Logged in as:"), "missing sidebar in {html}");
    assert!(html.contains("Organization: Acme Ltd"), "missing org in {html}");
    assert!(html.contains("View Results"), "missing nav link in {html}");
    assert!(
        html.contains("Welcome to the NDPA Compliance Assessment Tool"),
        "missing home in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_lists_catalog_categories() {
    let mut harness = setup_view_harness(ViewKind::Home, Some(test_user()), |_, _| {}).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("11 questions"), "missing count in {html}");
    for category in ["Data Processing Volume", "Incident Management", "Digital Processing"] {
        assert!(html.contains(category), "missing {category} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn about_view_renders_static_text() {
    let mut harness = setup_view_harness(ViewKind::About, Some(test_user()), |_, _| {}).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("About NDPA Compliance"), "missing title in {html}");
    assert!(html.contains("Generate compliance reports"), "missing list in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_renders_first_question() {
    let mut harness =
        setup_view_harness(ViewKind::Questions, Some(test_user()), |_, _| {}).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 of 11"), "missing position in {html}");
    assert!(
        html.contains("Category: Data Processing Volume"),
        "missing category in {html}"
    );
    assert!(html.contains("🔴 High"), "missing risk badge in {html}");
    assert!(html.contains("question-next"), "missing next in {html}");
    assert!(!html.contains("question-prev"), "prev on first in {html}");
    assert!(!html.contains("question-submit"), "submit on first in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_shows_submit_on_last_question() {
    let mut harness = setup_view_harness(ViewKind::Questions, Some(test_user()), |_, session| {
        session.go_to(usize::MAX);
    })
    .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 11 of 11"), "missing position in {html}");
    assert!(html.contains("question-prev"), "missing prev in {html}");
    assert!(html.contains("question-submit"), "missing submit in {html}");
    assert!(!html.contains("question-next"), "next on last in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_locks_after_submission() {
    let mut harness =
        setup_view_harness(ViewKind::Questions, Some(test_user()), |service, session| {
            answer_all(service, session, "Yes");
            service.submit(session).expect("submit");
            assert_eq!(session.state(), SessionState::Completed);
            session.go_to(usize::MAX);
        })
        .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Assessment completed!"), "missing notice in {html}");
    assert!(!html.contains("question-submit"), "submit still offered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_warns_before_submission() {
    let mut harness = setup_view_harness(ViewKind::Results, Some(test_user()), |_, _| {}).await;
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Please complete the assessment before viewing results."),
        "missing warning in {html}"
    );
    assert!(!html.contains("Compliance Score"), "score leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_shows_score_tables_and_charts() {
    let mut harness =
        setup_view_harness(ViewKind::Results, Some(test_user()), |service, session| {
            answer_all(service, session, "Yes");
            service.submit(session).expect("submit");
        })
        .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("100.0%"), "missing score in {html}");
    assert!(
        html.contains("Response Summary by Category"),
        "missing category table in {html}"
    );
    assert!(
        html.contains("Overall Response Distribution"),
        "missing distribution chart in {html}"
    );
    assert!(
        html.contains("Responses by Category and Risk Level"),
        "missing risk chart in {html}"
    );
    assert!(html.contains("Export Results"), "missing export in {html}");
    assert!(harness.sink.get("ndpa_compliance_report_Acme_Ltd.xlsx").is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn upload_view_lists_accepted_types() {
    let mut harness = setup_view_harness(ViewKind::Upload, Some(test_user()), |_, _| {}).await;
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Upload Supporting Documents"),
        "missing title in {html}"
    );
    assert!(html.contains(".pdf,.docx,.txt"), "missing accept list in {html}");
}
