//! Validation issue types.
//!
//! Each variant carries only the data its message needs. The engine emits
//! issues; the [`FindingLog`](crate::FindingLog) attaches template, sheet
//! and field to turn them into findings.

use serde::{Deserialize, Serialize};

/// Pseudo-column used for issues about the header row.
pub const HEADINGS_COLUMN: &str = "HEADINGS";
/// Pseudo-column used for issues about a whole sheet.
pub const ALL_COLUMN: &str = "ALL";
/// Pseudo-column used for the BRIDG mapping presence check.
pub const BRIDG_MAPPINGS_COLUMN: &str = "BRIDG Mappings";
/// Pseudo-column used for the generic tab presence check.
pub const VARIABLE_NAME_COLUMN: &str = "Variable name";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Issue {
    // Sheet structure
    /// BRIDG version sentinel row does not carry the expected version
    VersionMismatch { label: String, expected: String },
    /// Domain sentinel row has no value
    DomainNotSet { label: String },
    /// Header row deviates from the expected schema
    HeadingMismatch {
        extras: Vec<String>,
        missing: Vec<String>,
    },
    /// Sheet flagged as work in progress and skipped
    WorkInProgress,

    // Presence checks
    ColumnNotSet { column: String },
    /// Conditionally required column is empty while its condition holds
    ConditionalColumnNotSet {
        column: String,
        dependency: String,
        value: String,
    },
    ColumnNotSetOrMarked { column: String },
    ColumnSetWhenForbidden { column: String },

    // Consistency checks
    MutuallyExclusive { first: String, second: String },
    DependentColumnSet { column: String },
    CodingMissing { code_column: String },
    NoBridgMapping { variable: String },

    // Cross reference checks
    NotInReferenceTab { variable: String },
}

impl Issue {
    /// Column (or pseudo-column) the issue is reported against.
    pub fn column(&self) -> &str {
        match self {
            Issue::VersionMismatch { label, .. } => label,
            Issue::DomainNotSet { label } => label,
            Issue::HeadingMismatch { .. } => HEADINGS_COLUMN,
            Issue::WorkInProgress => ALL_COLUMN,
            Issue::ColumnNotSet { column } => column,
            Issue::ConditionalColumnNotSet { column, .. } => column,
            Issue::ColumnNotSetOrMarked { column } => column,
            Issue::ColumnSetWhenForbidden { column } => column,
            Issue::MutuallyExclusive { first, .. } => first,
            Issue::DependentColumnSet { column } => column,
            Issue::CodingMissing { code_column } => code_column,
            Issue::NoBridgMapping { .. } => BRIDG_MAPPINGS_COLUMN,
            Issue::NotInReferenceTab { .. } => VARIABLE_NAME_COLUMN,
        }
    }

    /// Whether the issue concerns the sheet rather than one of its rows.
    pub fn is_sheet_level(&self) -> bool {
        matches!(
            self,
            Issue::VersionMismatch { .. }
                | Issue::DomainNotSet { .. }
                | Issue::HeadingMismatch { .. }
                | Issue::WorkInProgress
        )
    }

    pub fn message(&self) -> String {
        match self {
            Issue::VersionMismatch { expected, .. } => {
                format!("BRIDG Version not set or not equal to {expected}")
            }
            Issue::DomainNotSet { .. } => "Domain not set".to_string(),
            Issue::HeadingMismatch { extras, missing } => format!(
                "Number of columns doesn't meet expectations: extras '{}' - missing '{}'",
                extras.join(","),
                missing.join(",")
            ),
            Issue::WorkInProgress => {
                "Sheet has been marked as Work in Progress and has not been scanned".to_string()
            }
            Issue::ColumnNotSet { .. } => "Column must be set".to_string(),
            Issue::ConditionalColumnNotSet {
                dependency, value, ..
            } => format!(
                "Column must be set but is not - based on dependency of '{dependency}' having value {value}"
            ),
            Issue::ColumnNotSetOrMarked { .. } => "Column must be set to value or na".to_string(),
            Issue::ColumnSetWhenForbidden { .. } => "Column is set when it shouldn't be".to_string(),
            Issue::MutuallyExclusive { first, second } => format!(
                "Columns '{first}' and '{second}' are mutually exclusive but both are set"
            ),
            Issue::DependentColumnSet { .. } => {
                "Should not be set, as is a dependent variable".to_string()
            }
            Issue::CodingMissing { .. } => "Expected Coding is missing".to_string(),
            Issue::NoBridgMapping { variable } => {
                format!("No BRIDG Mapping currently assigned to {variable}")
            }
            Issue::NotInReferenceTab { variable } => {
                format!("Variable {variable} is in a Concept Tab, but not in the Generic Tab")
            }
        }
    }
}
