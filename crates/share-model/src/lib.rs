//! Data model shared by the content template checker crates.
//!
//! The types here carry no spreadsheet library dependency: a
//! workbook arrives as plain [`Sheet`]s of [`Cell`] values, rows are turned
//! into [`MappedRow`]s, and rule violations leave the engine as [`Issue`]s
//! which the [`FindingLog`] records as located [`Finding`]s.

pub mod cell;
pub mod finding;
pub mod issue;
pub mod row;
pub mod schema;
pub mod terminology;
pub mod workbook;

pub use cell::{Cell, normalize_cell};
pub use finding::{Finding, FindingLog};
pub use issue::Issue;
pub use row::MappedRow;
pub use schema::{ColumnSchema, SheetKind};
pub use terminology::{CodedTerm, NEW_CODE_PLACEHOLDER};
pub use workbook::{Sheet, TemplateWorkbook};
