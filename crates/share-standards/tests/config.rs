//! Tests for checker configuration loading and validation.

use std::fs;
use std::path::Path;

use share_model::{ColumnSchema, SheetKind};
use share_standards::{
    CheckerConfig, MarkerConfig, RequiredColumn, Requirement, SchemaRegistry, StandardsError,
    load_config,
};

const SHIPPED_CONFIG: &str = include_str!("../../../standards/content_template.toml");

fn parse(text: &str) -> Result<CheckerConfig, StandardsError> {
    CheckerConfig::from_toml_str(text, Path::new("inline.toml"))
}

#[test]
fn builtin_configuration_is_valid() {
    CheckerConfig::builtin().validate().expect("builtin config");
}

#[test]
fn shipped_configuration_matches_builtin_tables() {
    let config = parse(SHIPPED_CONFIG).expect("shipped config");
    assert_eq!(config, CheckerConfig::builtin());
}

#[test]
fn empty_file_falls_back_to_builtin_tables() {
    let config = parse("").expect("empty config");
    assert_eq!(config, CheckerConfig::builtin());
}

#[test]
fn partial_tables_keep_remaining_defaults() {
    let config = parse(
        r#"
[sheet]
bridg_version = "5.0"

[not_applicable]
case_insensitive = false
"#,
    )
    .expect("partial config");

    assert_eq!(config.sheet.bridg_version, "5.0");
    assert_eq!(config.sheet.primary_identifier, "Variable Name");
    assert_eq!(config.not_applicable.marker, "NA");
    assert!(!config.not_applicable.case_insensitive);
    assert_eq!(config.rules, CheckerConfig::builtin().rules);
}

#[test]
fn requirement_shapes_parse_as_tagged_variants() {
    let config = parse(
        r#"
[rules]
required = [
    { column = "Variable Label", when = "always" },
    { column = "SDTM IG 3.1.2 Datatype", when = "equals", dependency = "SDTM IG 3.1.2", value = "Y" },
    { column = "ISO 21090 Datatype Component", when = "set", dependency = "ISO 21090 Datatype" },
    { column = "ISO 21090 Datatype", when = "any_set", dependencies = ["Mapping to BRIDG Defined Class"] },
]
"#,
    )
    .expect("required table");

    assert_eq!(
        config.rules.required,
        vec![
            RequiredColumn::always("Variable Label"),
            RequiredColumn::when_equals("SDTM IG 3.1.2 Datatype", "SDTM IG 3.1.2", "Y"),
            RequiredColumn::when_set("ISO 21090 Datatype Component", "ISO 21090 Datatype"),
            RequiredColumn::when_any_set("ISO 21090 Datatype", &["Mapping to BRIDG Defined Class"]),
        ]
    );
    assert!(matches!(
        config.rules.required[3].requirement,
        Requirement::AnySet { .. }
    ));
}

#[test]
fn unknown_requirement_shape_is_a_parse_error() {
    let err = parse(
        r#"
[rules]
required = [{ column = "Variable Label", when = "sometimes" }]
"#,
    )
    .unwrap_err();
    assert!(matches!(err, StandardsError::Toml { .. }));
}

#[test]
fn rule_referencing_unknown_column_fails_fast() {
    let err = parse(
        r#"
[rules]
forbidden = ["SEND 4.0"]
"#,
    )
    .unwrap_err();

    match err {
        StandardsError::UnknownColumn { rule, column } => {
            assert_eq!(rule, "forbidden");
            assert_eq!(column, "SEND 4.0");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn conditional_dependency_must_be_known() {
    let mut config = CheckerConfig::builtin();
    config
        .rules
        .required
        .push(RequiredColumn::when_set("NOTES", "Comments"));

    let err = config.validate().unwrap_err();
    assert!(matches!(err, StandardsError::UnknownColumn { column, .. } if column == "Comments"));
}

#[test]
fn duplicate_schema_column_is_rejected() {
    let mut config = CheckerConfig::builtin();
    config.schemas.per_tab = ColumnSchema::new(["Variable Name", "Variable Label", "Variable Label"]);

    let err = config.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid per-tab schema: duplicate columns: Variable Label"
    );
}

#[test]
fn primary_identifier_must_be_in_both_schemas() {
    let mut config = CheckerConfig::builtin();
    config.sheet.primary_identifier = "Variable Label".to_string();
    config.validate().expect("label is in both schemas");

    config.sheet.primary_identifier = "NOTES".to_string();
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        StandardsError::MissingPrimaryIdentifier { schema, .. } if schema == "per-tab"
    ));
}

#[test]
fn self_exclusive_pair_is_rejected() {
    let err = parse(
        r#"
[[rules.mutually_exclusive]]
first = "NOTES"
second = "NOTES"
"#,
    )
    .unwrap_err();
    assert!(matches!(err, StandardsError::InvalidConfig { .. }));
}

#[test]
fn not_applicable_marker_case_sensitivity_is_configurable() {
    let insensitive = MarkerConfig {
        marker: "NA".to_string(),
        case_insensitive: true,
    };
    assert!(insensitive.matches("na"));
    assert!(insensitive.matches("NA"));
    assert!(!insensitive.matches("N/A"));

    let sensitive = MarkerConfig {
        case_insensitive: false,
        ..insensitive
    };
    assert!(sensitive.matches("NA"));
    assert!(!sensitive.matches("na"));
}

#[test]
fn registry_selects_schema_by_sheet_name_marker() {
    let registry = SchemaRegistry::from_config(&CheckerConfig::builtin());

    assert_eq!(registry.sheet_kind("Generic"), SheetKind::Reference);
    assert_eq!(registry.sheet_kind("VS GENERIC tab"), SheetKind::Reference);
    assert_eq!(registry.sheet_kind("Blood Pressure"), SheetKind::PerTab);
    assert!(registry.schema_for("generic").contains("SHARE Generic Definition"));
    assert_eq!(registry.schema_for("Temperature").len(), 11);
}

#[test]
fn load_config_reads_and_validates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checks.toml");
    fs::write(&path, "[sheet]\nbridg_version = \"4.1\"\n").unwrap();

    let config = load_config(&path).expect("config file");
    assert_eq!(config.sheet.bridg_version, "4.1");
}

#[test]
fn load_config_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, StandardsError::Io { .. }));
}
