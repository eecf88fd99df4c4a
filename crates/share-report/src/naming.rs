//! Report and template naming.

use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// File name prefix of dated check reports.
pub const REPORT_PREFIX: &str = "Content_Template_Check";

static TEMPLATE_TITLE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"([A-Z][A-Z\s\-]+) Template").ok());

/// `Content_Template_Check_<YYYY-MM-DD>.<extension>`
pub fn report_file_name(date: NaiveDate, extension: &str) -> String {
    format!("{REPORT_PREFIX}_{}.{extension}", date.format("%Y-%m-%d"))
}

/// Human title of a template, e.g. `VITAL SIGNS` for `VITAL SIGNS Template.xlsx`.
///
/// Falls back to the file stem when the name does not follow the
/// `<TITLE> Template` convention.
pub fn template_title(template: &str) -> String {
    let stem = Path::new(template)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| template.to_string());
    TEMPLATE_TITLE
        .as_ref()
        .and_then(|pattern| pattern.captures(&stem))
        .and_then(|captures| captures.get(1))
        .map(|title| title.as_str().trim().to_string())
        .unwrap_or(stem)
}
