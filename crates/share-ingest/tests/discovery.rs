//! Tests for template file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use share_ingest::{IngestError, collect_templates, is_template_file, list_template_files};

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"not really a workbook").expect("write file");
    path
}

fn names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn lists_templates_sorted_and_skips_lock_files() {
    let dir = tempfile::tempdir().expect("create temp dir");
    touch(dir.path(), "Vital Signs Template.xlsx");
    touch(dir.path(), "Demographics Template.xls");
    touch(dir.path(), "~$Vital Signs Template.xlsx");
    touch(dir.path(), "Adverse Events template.XLSX");
    touch(dir.path(), "Notes.xlsx");
    touch(dir.path(), "Template notes.txt");
    fs::create_dir(dir.path().join("Archive Template.xlsx")).expect("create dir");

    let files = list_template_files(dir.path()).expect("list templates");
    assert_eq!(
        names(&files),
        vec![
            "Adverse Events template.XLSX",
            "Demographics Template.xls",
            "Vital Signs Template.xlsx",
        ]
    );
}

#[test]
fn template_file_names() {
    assert!(is_template_file(Path::new("Vital Signs Template.xlsx")));
    assert!(is_template_file(Path::new("dir/LB Template.xls")));
    assert!(!is_template_file(Path::new("Vital Signs Template.csv")));
    assert!(!is_template_file(Path::new("Vital Signs.xlsx")));
    assert!(!is_template_file(Path::new(".~lock.Vital Signs Template.xlsx")));
}

#[test]
fn missing_directory() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("nope");
    let err = list_template_files(&missing).expect_err("missing dir");
    assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
}

#[test]
fn collects_files_and_directories_in_argument_order() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let nested = dir.path().join("batch");
    fs::create_dir(&nested).expect("create dir");
    touch(&nested, "B Template.xlsx");
    touch(&nested, "A Template.xlsx");
    let single = touch(dir.path(), "Z Template.xlsx");

    let templates = collect_templates(&[single, nested]).expect("collect");
    assert_eq!(
        names(&templates),
        vec!["Z Template.xlsx", "A Template.xlsx", "B Template.xlsx"]
    );
}

#[test]
fn collect_rejects_missing_path() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = collect_templates(&[dir.path().join("gone Template.xlsx")]).expect_err("missing");
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}
