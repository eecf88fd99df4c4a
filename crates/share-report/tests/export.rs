//! Tests for finding exports and report naming.

use chrono::NaiveDate;
use share_model::FindingLog;
use share_report::{
    ReportFormat, report_file_name, template_title, write_csv, write_json, write_report,
};

fn sample_log() -> FindingLog {
    let mut log = FindingLog::new();
    log.log(
        "VITAL SIGNS Template.xlsx",
        "Generic",
        "",
        "HEADINGS",
        "Number of columns doesn't meet expectations: extras 'Comments' - missing 'NOTES'",
    );
    log.log(
        "VITAL SIGNS Template.xlsx",
        "Generic",
        "--ORRES",
        "Variable Name C-Code",
        "Column must be set",
    );
    log.log(
        "VITAL SIGNS Template.xlsx",
        "Blood Pressure",
        "SYSBP",
        "Variable name",
        "Variable SYSBP is in a Concept Tab, but not in the Generic Tab",
    );
    log
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).expect("valid date")
}

#[test]
fn csv_export_has_fixed_columns() {
    let mut out = Vec::new();
    write_csv(sample_log().all(), &mut out).expect("write csv");
    let text = String::from_utf8(out).expect("utf8").replace("\r\n", "\n");
    insta::assert_snapshot!(text, @r#"
    Template,Sheet,Field,Column,Message
    VITAL SIGNS Template.xlsx,Generic,,HEADINGS,Number of columns doesn't meet expectations: extras 'Comments' - missing 'NOTES'
    VITAL SIGNS Template.xlsx,Generic,'--ORRES,Variable Name C-Code,Column must be set
    VITAL SIGNS Template.xlsx,Blood Pressure,SYSBP,Variable name,"Variable SYSBP is in a Concept Tab, but not in the Generic Tab"
    "#);
}

#[test]
fn json_export_is_one_object_per_finding() {
    let mut out = Vec::new();
    write_json(sample_log().all(), &mut out).expect("write json");
    let value: serde_json::Value = serde_json::from_slice(&out).expect("parse json");
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 3);
    assert_eq!(items[1]["field"], "--ORRES");
    assert_eq!(items[1]["column"], "Variable Name C-Code");
    assert_eq!(items[2]["sheet"], "Blood Pressure");
    let keys: Vec<&str> = items[0]
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys.len(), 5);
}

#[test]
fn empty_export_still_has_header() {
    let mut out = Vec::new();
    write_csv(&[], &mut out).expect("write csv");
    assert_eq!(
        String::from_utf8(out).expect("utf8").trim_end(),
        "Template,Sheet,Field,Column,Message"
    );
}

#[test]
fn report_names_are_dated() {
    assert_eq!(
        report_file_name(date(), "csv"),
        "Content_Template_Check_2026-10-14.csv"
    );
}

#[test]
fn writes_report_into_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let target = dir.path().join("reports");
    let path =
        write_report(&sample_log(), &target, ReportFormat::Json, date()).expect("write report");
    assert_eq!(path, target.join("Content_Template_Check_2026-10-14.json"));
    let written = std::fs::read_to_string(&path).expect("read report");
    assert!(written.contains("SYSBP"));
}

#[test]
fn template_titles() {
    assert_eq!(template_title("VITAL SIGNS Template.xlsx"), "VITAL SIGNS");
    assert_eq!(template_title("share/AE-SAE Template.xls"), "AE-SAE");
    assert_eq!(template_title("Demographics.xlsx"), "Demographics");
}
