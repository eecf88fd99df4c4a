//! Coded terminology: free-text terms and the C-Codes assigned to them.

use serde::{Deserialize, Serialize};

/// Code placeholder for a term submitted for coding but not yet assigned.
pub const NEW_CODE_PLACEHOLDER: &str = "CNEW";

/// One term of a terminology workbook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodedTerm {
    pub name: String,
    /// Assigned C-Code, `None` when the workbook leaves it blank.
    pub code: Option<String>,
    /// Terminology context the term belongs to.
    pub terminology_type: Option<String>,
}

impl CodedTerm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Whether a real C-Code has been assigned.
    pub fn is_coded(&self) -> bool {
        self.code
            .as_deref()
            .is_some_and(|code| code != NEW_CODE_PLACEHOLDER)
    }
}
