use std::io::Cursor;

use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};
use comply_core::model::{Answer, AnswerSet, QuestionId};
use comply_core::summarize;
use storage::report::{RESULTS_SHEET, SUMMARY_SHEET};
use storage::{DirectorySink, ReportSink, build_workbook, parse_catalog, report_file_name};

const CATALOG: &str = r#"{"questions": [
    {"id": "q1", "category": "A", "risk_level": "high", "question": "First?", "guidance": ""},
    {"id": "q2", "category": "A", "risk_level": "low", "question": "Second?", "guidance": ""},
    {"id": "q3", "category": "B", "risk_level": "high", "question": "Third?", "guidance": ""},
    {"id": "q4", "category": "B", "risk_level": "medium", "question": "Fourth?", "guidance": ""}
]}"#;

fn answer(set: &mut AnswerSet, id: &str, option: &str, comment: Option<&str>) {
    let id = QuestionId::new(id);
    set.insert(
        id.clone(),
        Answer::new(id, option, comment.map(str::to_string)),
    );
}

fn open(bytes: Vec<u8>) -> Xlsx<Cursor<Vec<u8>>> {
    open_workbook_from_rs(Cursor::new(bytes)).expect("open workbook")
}

#[test]
fn summary_sheet_score_matches_direct_computation() {
    let catalog = parse_catalog(CATALOG).unwrap();
    let mut answers = AnswerSet::new();
    answer(&mut answers, "q1", "Yes", None);
    answer(&mut answers, "q2", "No", Some("vendor contract pending"));
    answer(&mut answers, "q3", "Yes", None);
    answer(&mut answers, "q4", "Yes", None);
    let summary = summarize(&catalog, &answers);

    let mut workbook = open(build_workbook(&summary).unwrap());

    assert_eq!(workbook.sheet_names(), vec![RESULTS_SHEET, SUMMARY_SHEET]);
    let totals = workbook.worksheet_range(SUMMARY_SHEET).unwrap();
    assert_eq!(
        totals.get_value((1, 0)),
        Some(&Data::String("Compliance Score".into()))
    );
    assert_eq!(
        totals.get_value((1, 1)),
        Some(&Data::String(format!("{:.1}%", summary.compliance_score())))
    );
    assert_eq!(totals.get_value((1, 1)), Some(&Data::String("75.0%".into())));
    assert_eq!(totals.get_value((2, 1)), Some(&Data::Float(4.0)));
    assert_eq!(totals.get_value((3, 1)), Some(&Data::Float(4.0)));
}

#[test]
fn results_sheet_has_one_row_per_question() {
    let catalog = parse_catalog(CATALOG).unwrap();
    let mut answers = AnswerSet::new();
    answer(&mut answers, "q2", "No", Some("vendor contract pending"));
    let summary = summarize(&catalog, &answers);

    let mut workbook = open(build_workbook(&summary).unwrap());
    let rows = workbook.worksheet_range(RESULTS_SHEET).unwrap();

    assert_eq!(rows.height(), 5);
    assert_eq!(rows.get_value((0, 4)), Some(&Data::String("Comments".into())));
    assert_eq!(rows.get_value((2, 1)), Some(&Data::String("Second?".into())));
    assert_eq!(rows.get_value((2, 2)), Some(&Data::String("No".into())));
    assert_eq!(
        rows.get_value((2, 4)),
        Some(&Data::String("vendor contract pending".into()))
    );
    assert_eq!(
        rows.get_value((1, 2)),
        Some(&Data::String("Not Answered".into()))
    );
    assert_eq!(rows.get_value((3, 3)), Some(&Data::String("High".into())));

    let totals = workbook.worksheet_range(SUMMARY_SHEET).unwrap();
    assert_eq!(totals.get_value((1, 1)), Some(&Data::String("0.0%".into())));
    assert_eq!(totals.get_value((3, 1)), Some(&Data::Float(1.0)));
}

#[tokio::test]
async fn directory_sink_writes_named_file() {
    let catalog = parse_catalog(CATALOG).unwrap();
    let summary = summarize(&catalog, &AnswerSet::new());
    let bytes = build_workbook(&summary).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let sink = DirectorySink::new(dir.path().join("reports"));

    let name = report_file_name("Acme");
    let saved = sink.save(&name, bytes.clone()).await.unwrap();

    let path = saved.path.expect("file path");
    assert_eq!(path, dir.path().join("reports").join("ndpa_compliance_report_Acme.xlsx"));
    assert_eq!(std::fs::read(&path).unwrap(), bytes);
    assert_eq!(saved.bytes, bytes.len());
}
