//! Exports of checker findings.
//!
//! Findings are written either as a JSON array (one object per finding) or
//! as CSV with the fixed column order `Template,Sheet,Field,Column,Message`.

pub mod export;
pub mod naming;

pub use export::{ReportFormat, write_csv, write_json, write_report};
pub use naming::{REPORT_PREFIX, report_file_name, template_title};
