//! Column schemas and sheet classification.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Structural shape of a template sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetKind {
    /// The generic tab declaring every variable of the template.
    Reference,
    /// A concept tab restricted to a subset of the generic variables.
    PerTab,
}

impl SheetKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::PerTab => "per-tab",
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference)
    }
}

/// Ordered list of expected column names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnSchema {
    columns: Vec<String>,
}

impl ColumnSchema {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|name| name == column)
    }

    /// Names that occur more than once, in order of their second occurrence.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for name in &self.columns {
            if !seen.insert(name.as_str()) && !duplicates.contains(&name.as_str()) {
                duplicates.push(name.as_str());
            }
        }
        duplicates
    }
}
