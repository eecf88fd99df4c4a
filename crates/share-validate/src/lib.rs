//! Consistency checks for SHARE content templates.
//!
//! A [`TemplateChecker`] maps each eligible sheet of a template into
//! [`MappedRow`](share_model::MappedRow)s, runs the registered rules of its
//! [`RuleEngine`] over every row and records the results in a
//! [`FindingLog`](share_model::FindingLog).
//!
//! # Example
//!
//! ```ignore
//! use share_model::FindingLog;
//! use share_standards::CheckerConfig;
//! use share_validate::TemplateChecker;
//!
//! let checker = TemplateChecker::new(CheckerConfig::builtin())?;
//! let mut log = FindingLog::new();
//! checker.check_template(&workbook, &mut log);
//! if log.has_issues() {
//!     println!("{}", log.to_json()?);
//! }
//! ```

mod checker;
mod engine;
mod mapper;
pub mod rules;
mod run;
mod state;

pub use checker::TemplateChecker;
pub use engine::RuleEngine;
pub use mapper::{MappedSheet, RowMapper};
pub use rules::{Rule, RowScope};
pub use run::{CheckRun, TemplateFailure};
pub use state::CrossTabState;
