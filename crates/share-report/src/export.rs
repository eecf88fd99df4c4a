//! JSON and CSV writers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use share_model::{Finding, FindingLog};
use tracing::info;

use crate::naming::report_file_name;

const CSV_HEADER: [&str; 5] = ["Template", "Sheet", "Field", "Column", "Message"];

/// Serialisation format of a findings report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Csv,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }
}

/// Write findings as a JSON array.
pub fn write_json<W: Write>(findings: &[Finding], writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, findings).context("serialise findings as JSON")
}

/// Write findings as CSV, one row per finding.
///
/// A field value starting with `-` is prefixed with `'` so spreadsheet
/// tools do not evaluate it as a formula.
pub fn write_csv<W: Write>(findings: &[Finding], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADER)
        .context("write CSV header")?;
    for finding in findings {
        let field = if finding.field.starts_with('-') {
            format!("'{}", finding.field)
        } else {
            finding.field.clone()
        };
        csv.write_record([
            finding.template.as_str(),
            finding.sheet.as_str(),
            field.as_str(),
            finding.column.as_str(),
            finding.message.as_str(),
        ])
        .context("write CSV row")?;
    }
    csv.flush().context("flush CSV output")?;
    Ok(())
}

/// Write a dated report for the whole log into `dir`.
///
/// Returns the path of the written file.
pub fn write_report(
    log: &FindingLog,
    dir: &Path,
    format: ReportFormat,
    date: NaiveDate,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create report directory {}", dir.display()))?;
    let path = dir.join(report_file_name(date, format.extension()));
    let file =
        File::create(&path).with_context(|| format!("create report {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    match format {
        ReportFormat::Json => write_json(log.all(), &mut writer)?,
        ReportFormat::Csv => write_csv(log.all(), &mut writer)?,
    }
    writer
        .flush()
        .with_context(|| format!("write report {}", path.display()))?;
    info!(path = %path.display(), findings = log.len(), "report written");
    Ok(path)
}
