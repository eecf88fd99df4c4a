//! Sheet and template level behaviour of the checker.

use proptest::prelude::*;
use share_model::{Cell, FindingLog, Sheet, TemplateWorkbook};
use share_standards::CheckerConfig;
use share_standards::builtin::{PER_TAB_COLUMNS, REFERENCE_COLUMNS};
use share_validate::{CrossTabState, RowMapper, TemplateChecker};

fn cells(values: &[&str]) -> Vec<Cell> {
    values.iter().map(|value| Cell::from(*value)).collect()
}

fn preamble() -> Vec<Vec<Cell>> {
    vec![
        cells(&["BRIDG VERSION", "3.0.3"]),
        cells(&["Domain", "DM"]),
        Vec::new(),
    ]
}

fn sheet(name: &str, header: &[&str], data: &[Vec<Cell>]) -> Sheet {
    let mut rows = preamble();
    rows.push(cells(header));
    rows.extend(data.iter().cloned());
    Sheet::new(name, rows)
}

/// A reference row valid for every built-in rule.
fn reference_data(identifier: &str) -> Vec<Cell> {
    REFERENCE_COLUMNS
        .iter()
        .map(|column| {
            let value = match *column {
                "Variable Name" => identifier,
                "Variable Name C-Code" => "C1",
                "Variable Label" => "Label",
                "SHARE Generic Definition" => "Definition",
                "SDTM IG 3.1.2" | "CDASH V1.1" => "N",
                "Mapping to BRIDG Performed Class" => "PerformedObservationResult",
                "BRIDG Performed Class C-Code" => "C2",
                "ISO 21090 Datatype" => "CD",
                "ISO 21090 Datatype C-Code" => "C3",
                "ISO 21090 Datatype Component" => "code",
                name if name.starts_with("Mapping to BRIDG") => "NA",
                "Observation, ObservationResult, Activity, Relationship" => "Observation",
                name if name.ends_with("CODED VALUES") => "NA",
                _ => "",
            };
            Cell::from(value)
        })
        .collect()
}

fn generic_sheet(identifiers: &[&str]) -> Sheet {
    let data: Vec<Vec<Cell>> = identifiers.iter().copied().map(reference_data).collect();
    sheet("Generic", REFERENCE_COLUMNS, &data)
}

fn concept_sheet(name: &str, identifiers: &[&str]) -> Sheet {
    let data: Vec<Vec<Cell>> = identifiers
        .iter()
        .map(|id| cells(&[*id, "Label"]))
        .collect();
    sheet(name, PER_TAB_COLUMNS, &data)
}

fn checker() -> TemplateChecker {
    match TemplateChecker::new(CheckerConfig::builtin()) {
        Ok(checker) => checker,
        Err(error) => panic!("builtin config rejected: {error}"),
    }
}

fn check(workbook: &TemplateWorkbook) -> FindingLog {
    let mut log = FindingLog::new();
    checker().check_template(workbook, &mut log);
    log
}

#[test]
fn clean_template_has_no_findings() {
    let workbook = TemplateWorkbook::new(
        "Demographics Template.xlsx",
        vec![
            generic_sheet(&["AGE", "SEX"]),
            concept_sheet("Age", &["AGE"]),
        ],
    );
    let log = check(&workbook);
    assert!(!log.has_issues(), "unexpected findings: {:?}", log.all());
}

#[test]
fn unknown_variable_on_concept_tab() {
    let workbook = TemplateWorkbook::new(
        "T1",
        vec![
            generic_sheet(&["AGE", "SEX"]),
            concept_sheet("Race", &["RACE"]),
        ],
    );
    let log = check(&workbook);
    assert!(log.has_issues());
    assert_eq!(log.len(), 1);
    let finding = &log.all()[0];
    assert_eq!(finding.template, "T1");
    assert_eq!(finding.sheet, "Race");
    assert_eq!(finding.field, "RACE");
    assert_eq!(finding.column, "Variable name");
    assert_eq!(
        finding.message,
        "Variable RACE is in a Concept Tab, but not in the Generic Tab"
    );
}

#[test]
fn reference_tab_is_checked_first() {
    let workbook = TemplateWorkbook::new(
        "T1",
        vec![concept_sheet("Age", &["AGE"]), generic_sheet(&["AGE"])],
    );
    assert!(!check(&workbook).has_issues());
}

#[test]
fn cross_tab_state_is_per_template() {
    let first = TemplateWorkbook::new("A", vec![generic_sheet(&["AGE"])]);
    let second = TemplateWorkbook::new("B", vec![concept_sheet("Age", &["AGE"])]);
    let run = checker().check_all([
        ("A".to_string(), Ok::<_, String>(first)),
        ("B".to_string(), Ok(second)),
    ]);
    assert_eq!(run.checked, vec!["A", "B"]);
    assert_eq!(run.log.len(), 1);
    assert_eq!(run.log.all()[0].template, "B");
    assert_eq!(run.log.templates(), ["B".to_string()]);
}

#[test]
fn unreadable_template_does_not_stop_the_run() {
    let good = TemplateWorkbook::new(
        "good",
        vec![generic_sheet(&["AGE"]), concept_sheet("Race", &["RACE"])],
    );
    let run = checker().check_all([
        ("broken".to_string(), Err("file is not a workbook".to_string())),
        ("good".to_string(), Ok(good)),
    ]);
    assert!(run.has_failures());
    assert_eq!(run.failures.len(), 1);
    assert_eq!(run.failures[0].template, "broken");
    assert_eq!(run.failures[0].reason, "file is not a workbook");
    assert_eq!(run.checked, vec!["good"]);
    assert_eq!(run.log.len(), 1);
    assert!(!run.is_clean());
}

#[test]
fn header_with_one_extra_and_one_missing_column() {
    let mut header: Vec<&str> = PER_TAB_COLUMNS.to_vec();
    header[5] = "Comments";
    let data = vec![cells(&["AGE", ""])];
    let workbook = TemplateWorkbook::new(
        "T1",
        vec![generic_sheet(&["AGE"]), sheet("Age", &header, &data)],
    );
    let log = check(&workbook);

    let headings: Vec<_> = log
        .all()
        .iter()
        .filter(|finding| finding.column == "HEADINGS")
        .collect();
    assert_eq!(headings.len(), 1);
    assert_eq!(headings[0].field, "");
    assert_eq!(
        headings[0].message,
        "Number of columns doesn't meet expectations: extras 'Comments' - missing 'Null Flavors'"
    );

    // rows are still checked against the observed header
    assert_eq!(log.len(), 2);
    assert_eq!(log.all()[1].field, "AGE");
    assert_eq!(log.all()[1].column, "Variable Label");
    assert_eq!(log.all()[1].message, "Column must be set");
}

#[test]
fn reordered_header_maps_by_name() {
    let mut header: Vec<&str> = PER_TAB_COLUMNS.to_vec();
    header.swap(1, 2);
    let data = vec![cells(&["AGE", "", "Age"])];
    let workbook = TemplateWorkbook::new(
        "T1",
        vec![generic_sheet(&["AGE"]), sheet("Age", &header, &data)],
    );
    assert!(!check(&workbook).has_issues());
}

#[test]
fn trailing_blank_header_cells_are_ignored() {
    let mut rows = preamble();
    let mut header = cells(PER_TAB_COLUMNS);
    header.extend([Cell::Empty, Cell::from("  ")]);
    rows.push(header);
    rows.push(cells(&["AGE", "Age"]));
    let workbook = TemplateWorkbook::new(
        "T1",
        vec![generic_sheet(&["AGE"]), Sheet::new("Age", rows)],
    );
    assert!(!check(&workbook).has_issues());
}

#[test]
fn version_sentinel() {
    let mut wrong = concept_sheet("Age", &[]);
    wrong.rows[0] = cells(&["BRIDG Version", "3.0.2"]);
    let mut log = FindingLog::new();
    checker().check_sheet("T1", &wrong, &mut CrossTabState::new(), &mut log);
    assert_eq!(log.len(), 1);
    assert_eq!(log.all()[0].column, "BRIDG Version");
    assert_eq!(
        log.all()[0].message,
        "BRIDG Version not set or not equal to 3.0.3"
    );

    let mut third_cell = concept_sheet("Age", &[]);
    third_cell.rows[0] = cells(&["BRIDG VERSION", "", "3.0.3"]);
    let mut log = FindingLog::new();
    checker().check_sheet("T1", &third_cell, &mut CrossTabState::new(), &mut log);
    assert!(!log.has_issues());
}

#[test]
fn domain_sentinel() {
    let mut sheet = concept_sheet("Age", &[]);
    sheet.rows[1] = cells(&["Domain"]);
    let mut log = FindingLog::new();
    checker().check_sheet("T1", &sheet, &mut CrossTabState::new(), &mut log);
    assert_eq!(log.len(), 1);
    assert_eq!(log.all()[0].column, "Domain");
    assert_eq!(log.all()[0].message, "Domain not set");
}

#[test]
fn sheet_without_header_yields_no_rows() {
    let sheet = Sheet::new(
        "Age",
        vec![
            cells(&["BRIDG VERSION", "3.0.3"]),
            cells(&["RACE", "Race"]),
        ],
    );
    let config = CheckerConfig::builtin();
    let registry = share_standards::SchemaRegistry::from_config(&config);
    let mapped = RowMapper::new(&config, &registry).map_sheet(&sheet, &mut CrossTabState::new());
    assert!(!mapped.header_found);
    assert!(mapped.rows.is_empty());
    assert!(mapped.issues.is_empty());
}

#[test]
fn rows_without_identifier_are_skipped() {
    let data = vec![cells(&["", "orphan label"]), cells(&["  ", ""]), cells(&["AGE", "Age"])];
    let workbook = TemplateWorkbook::new(
        "T1",
        vec![generic_sheet(&["AGE"]), sheet("Age", PER_TAB_COLUMNS, &data)],
    );
    assert!(!check(&workbook).has_issues());
}

#[test]
fn short_rows_read_as_empty() {
    let data = vec![cells(&["AGE"])];
    let workbook = TemplateWorkbook::new(
        "T1",
        vec![generic_sheet(&["AGE"]), sheet("Age", PER_TAB_COLUMNS, &data)],
    );
    let log = check(&workbook);
    assert_eq!(log.len(), 1);
    assert_eq!(log.all()[0].column, "Variable Label");
}

#[test]
fn reference_identifiers_are_recorded() {
    let config = CheckerConfig::builtin();
    let registry = share_standards::SchemaRegistry::from_config(&config);
    let mut state = CrossTabState::new();
    let mapped =
        RowMapper::new(&config, &registry).map_sheet(&generic_sheet(&["AGE", "SEX"]), &mut state);
    assert_eq!(mapped.rows.len(), 2);
    assert!(state.contains("AGE") && state.contains("SEX"));

    let mapped = RowMapper::new(&config, &registry)
        .map_sheet(&concept_sheet("Race", &["RACE"]), &mut state);
    assert_eq!(mapped.rows.len(), 1);
    assert!(!state.contains("RACE"));
}

#[test]
fn work_in_progress_sheet_is_skipped() {
    let mut wip = concept_sheet("Race", &["RACE"]);
    wip.rows[0] = cells(&["BRIDG VERSION", "3.0.3", "wip"]);
    let workbook = TemplateWorkbook::new("T1", vec![generic_sheet(&["AGE"]), wip]);
    let log = check(&workbook);
    assert_eq!(log.len(), 1);
    let finding = &log.all()[0];
    assert_eq!(finding.sheet, "Race");
    assert_eq!(finding.field, "");
    assert_eq!(finding.column, "ALL");
    assert_eq!(
        finding.message,
        "Sheet has been marked as Work in Progress and has not been scanned"
    );
}

#[test]
fn sheets_without_scan_marker_are_ignored() {
    let mut notes = concept_sheet("Notes", &["RACE"]);
    notes.rows[0] = cells(&["Revision history"]);
    let mut concept = concept_sheet("Concept overview", &["AGE"]);
    concept.rows.insert(0, cells(&["Concept"]));
    let workbook = TemplateWorkbook::new("T1", vec![generic_sheet(&["AGE"]), notes, concept]);
    assert!(!check(&workbook).has_issues());
}

#[test]
fn findings_keep_row_then_rule_order() {
    let data = vec![cells(&["RACE", ""]), cells(&["ETHNIC", "Ethnicity"])];
    let workbook = TemplateWorkbook::new(
        "T1",
        vec![generic_sheet(&["AGE"]), sheet("Race", PER_TAB_COLUMNS, &data)],
    );
    let log = check(&workbook);
    let located: Vec<(&str, &str)> = log
        .all()
        .iter()
        .map(|finding| (finding.field.as_str(), finding.column.as_str()))
        .collect();
    assert_eq!(
        located,
        vec![
            ("RACE", "Variable Label"),
            ("RACE", "Variable name"),
            ("ETHNIC", "Variable name"),
        ]
    );
}

#[test]
fn log_spans_templates() {
    let checker = checker();
    let mut log = FindingLog::new();
    for name in ["A", "B"] {
        let workbook = TemplateWorkbook::new(name, vec![concept_sheet("Race", &["RACE"])]);
        checker.check_template(&workbook, &mut log);
    }
    assert_eq!(log.templates(), ["A".to_string(), "B".to_string()]);
    assert_eq!(log.for_template("B").count(), 1);
}

#[test]
fn invalid_configuration_is_rejected() {
    let mut config = CheckerConfig::builtin();
    config.rules.forbidden.push("Not a column".to_string());
    assert!(TemplateChecker::new(config).is_err());
}

fn cell_value() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        Just(Cell::from("NA")),
        Just(Cell::from("Y")),
        Just(Cell::from("N")),
        Just(Cell::from(" AGE ")),
        Just(Cell::from("RACE")),
        (0i64..5).prop_map(Cell::from),
        any::<bool>().prop_map(Cell::from),
    ]
}

proptest! {
    #[test]
    fn checking_is_deterministic(
        generic in prop::collection::vec(prop::collection::vec(cell_value(), 0..40), 0..6),
        concept in prop::collection::vec(prop::collection::vec(cell_value(), 0..12), 0..6),
    ) {
        let workbook = TemplateWorkbook::new(
            "T1",
            vec![
                sheet("Generic", REFERENCE_COLUMNS, &generic),
                sheet("Age", PER_TAB_COLUMNS, &concept),
            ],
        );
        let first = check(&workbook);
        let second = check(&workbook);
        prop_assert_eq!(first.all(), second.all());
    }
}
