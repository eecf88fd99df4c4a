//! Checker configuration: schemas, sheet conventions and rule tables.
//!
//! The tables are data. They are loaded once, validated before any row is
//! read, and never mutated while a run is in progress.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use share_model::ColumnSchema;

use crate::error::StandardsError;

/// Complete configuration for one checker instance.
///
/// Any table missing from a configuration file falls back to the built-in
/// SHARE content template tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    pub schemas: Schemas,
    pub sheet: SheetConventions,
    pub not_applicable: MarkerConfig,
    pub rules: RuleTables,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schemas {
    /// Columns of the generic (reference) tab.
    pub reference: ColumnSchema,
    /// Columns of every concept tab.
    pub per_tab: ColumnSchema,
}

/// Sentinel labels and markers that structure a template sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConventions {
    /// Column holding the row key. Rows with an empty key are skipped.
    pub primary_identifier: String,
    /// Case-insensitive sheet name marker of the reference tab.
    pub reference_marker: String,
    /// A1 values (case-insensitive) that make a sheet eligible for checking.
    pub scan_markers: Vec<String>,
    /// C1 value (case-insensitive) flagging a sheet as work in progress.
    pub work_in_progress_marker: String,
    pub version_label: String,
    pub domain_label: String,
    pub header_label: String,
    /// Expected value next to the version label.
    pub bridg_version: String,
}

/// The accepted "not applicable" placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub marker: String,
    pub case_insensitive: bool,
}

impl MarkerConfig {
    pub fn matches(&self, value: &str) -> bool {
        if self.case_insensitive {
            value.eq_ignore_ascii_case(&self.marker)
        } else {
            value == self.marker
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleTables {
    pub required: Vec<RequiredColumn>,
    pub set_or_marker: Vec<String>,
    pub forbidden: Vec<String>,
    pub mutually_exclusive: Vec<ExclusivePair>,
    pub reverse_dependencies: Vec<ReverseDependency>,
    pub coding: Vec<CodingPair>,
    /// Name prefix shared by the BRIDG classification mapping columns.
    pub mapping_prefix: String,
}

/// A column that must be populated, always or under a condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredColumn {
    pub column: String,
    #[serde(flatten)]
    pub requirement: Requirement,
}

impl RequiredColumn {
    pub fn always(column: &str) -> Self {
        Self {
            column: column.to_string(),
            requirement: Requirement::Always,
        }
    }

    pub fn when_equals(column: &str, dependency: &str, value: &str) -> Self {
        Self {
            column: column.to_string(),
            requirement: Requirement::Equals {
                dependency: dependency.to_string(),
                value: value.to_string(),
            },
        }
    }

    pub fn when_set(column: &str, dependency: &str) -> Self {
        Self {
            column: column.to_string(),
            requirement: Requirement::Set {
                dependency: dependency.to_string(),
            },
        }
    }

    pub fn when_any_set(column: &str, dependencies: &[&str]) -> Self {
        Self {
            column: column.to_string(),
            requirement: Requirement::AnySet {
                dependencies: dependencies.iter().map(|d| (*d).to_string()).collect(),
            },
        }
    }
}

/// Condition under which a required column must be populated.
///
/// The three conditional shapes differ in semantics and stay distinct:
/// equality against one column, non-empty of one column, non-empty of any
/// of several columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "when", rename_all = "snake_case")]
pub enum Requirement {
    Always,
    Equals { dependency: String, value: String },
    Set { dependency: String },
    AnySet { dependencies: Vec<String> },
}

impl Requirement {
    /// Columns the condition reads.
    pub fn dependencies(&self) -> Vec<&str> {
        match self {
            Requirement::Always => Vec::new(),
            Requirement::Equals { dependency, .. } | Requirement::Set { dependency } => {
                vec![dependency.as_str()]
            }
            Requirement::AnySet { dependencies } => {
                dependencies.iter().map(String::as_str).collect()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusivePair {
    pub first: String,
    pub second: String,
}

impl ExclusivePair {
    pub fn new(first: &str, second: &str) -> Self {
        Self {
            first: first.to_string(),
            second: second.to_string(),
        }
    }
}

/// `column` must stay empty while `depends_on` holds `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverseDependency {
    pub column: String,
    pub depends_on: String,
    pub value: String,
}

impl ReverseDependency {
    pub fn new(column: &str, depends_on: &str, value: &str) -> Self {
        Self {
            column: column.to_string(),
            depends_on: depends_on.to_string(),
            value: value.to_string(),
        }
    }
}

/// Free-text column whose content must be coded in `code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodingPair {
    pub text: String,
    pub code: String,
}

impl CodingPair {
    pub fn new(text: &str, code: &str) -> Self {
        Self {
            text: text.to_string(),
            code: code.to_string(),
        }
    }
}

impl CheckerConfig {
    /// Parse a TOML configuration and validate it.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, StandardsError> {
        let config: CheckerConfig = toml::from_str(text).map_err(|source| StandardsError::Toml {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the rule engine cannot evaluate meaningfully.
    pub fn validate(&self) -> Result<(), StandardsError> {
        validate_schema("reference", &self.schemas.reference)?;
        validate_schema("per-tab", &self.schemas.per_tab)?;

        let sheet = &self.sheet;
        for (name, value) in [
            ("primary_identifier", &sheet.primary_identifier),
            ("reference_marker", &sheet.reference_marker),
            ("version_label", &sheet.version_label),
            ("domain_label", &sheet.domain_label),
            ("header_label", &sheet.header_label),
            ("bridg_version", &sheet.bridg_version),
        ] {
            if value.trim().is_empty() {
                return Err(StandardsError::invalid(format!("sheet.{name} is empty")));
            }
        }
        if sheet.scan_markers.iter().all(|marker| marker.trim().is_empty()) {
            return Err(StandardsError::invalid("sheet.scan_markers is empty"));
        }
        if self.not_applicable.marker.trim().is_empty() {
            return Err(StandardsError::invalid("not_applicable.marker is empty"));
        }
        for (schema, columns) in [
            ("reference", &self.schemas.reference),
            ("per-tab", &self.schemas.per_tab),
        ] {
            if !columns.contains(&sheet.primary_identifier) {
                return Err(StandardsError::MissingPrimaryIdentifier {
                    schema: schema.to_string(),
                    column: sheet.primary_identifier.clone(),
                });
            }
        }

        let known: HashSet<&str> = self
            .schemas
            .reference
            .iter()
            .chain(self.schemas.per_tab.iter())
            .collect();
        let check = |rule: &str, column: &str| {
            if known.contains(column) {
                Ok(())
            } else {
                Err(StandardsError::unknown_column(rule, column))
            }
        };

        let rules = &self.rules;
        for required in &rules.required {
            check("required", &required.column)?;
            if let Requirement::AnySet { dependencies } = &required.requirement
                && dependencies.is_empty()
            {
                return Err(StandardsError::invalid(format!(
                    "required column '{}' has an empty dependency list",
                    required.column
                )));
            }
            for dependency in required.requirement.dependencies() {
                check("required", dependency)?;
            }
        }
        for column in &rules.set_or_marker {
            check("set-or-marker", column)?;
        }
        for column in &rules.forbidden {
            check("forbidden", column)?;
        }
        for pair in &rules.mutually_exclusive {
            check("mutual exclusivity", &pair.first)?;
            check("mutual exclusivity", &pair.second)?;
            if pair.first == pair.second {
                return Err(StandardsError::invalid(format!(
                    "column '{}' cannot be mutually exclusive with itself",
                    pair.first
                )));
            }
        }
        for dependency in &rules.reverse_dependencies {
            check("reverse dependency", &dependency.column)?;
            check("reverse dependency", &dependency.depends_on)?;
        }
        for pair in &rules.coding {
            check("coding", &pair.text)?;
            check("coding", &pair.code)?;
        }
        if rules.mapping_prefix.trim().is_empty() {
            return Err(StandardsError::invalid("rules.mapping_prefix is empty"));
        }
        if !known
            .iter()
            .any(|column| column.starts_with(&rules.mapping_prefix))
        {
            return Err(StandardsError::invalid(format!(
                "no schema column starts with mapping prefix '{}'",
                rules.mapping_prefix
            )));
        }
        Ok(())
    }
}

fn validate_schema(schema: &str, columns: &ColumnSchema) -> Result<(), StandardsError> {
    if columns.is_empty() {
        return Err(StandardsError::InvalidSchema {
            schema: schema.to_string(),
            message: "no columns declared".to_string(),
        });
    }
    if let Some(blank) = columns.iter().position(|name| name.trim().is_empty()) {
        return Err(StandardsError::InvalidSchema {
            schema: schema.to_string(),
            message: format!("column {} has an empty name", blank + 1),
        });
    }
    let duplicates = columns.duplicates();
    if !duplicates.is_empty() {
        return Err(StandardsError::InvalidSchema {
            schema: schema.to_string(),
            message: format!("duplicate columns: {}", duplicates.join(", ")),
        });
    }
    Ok(())
}
