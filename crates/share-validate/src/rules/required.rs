use share_model::{Issue, MappedRow};
use share_standards::{RequiredColumn, Requirement};

use super::{Rule, RowScope};

/// Columns that must be populated, unconditionally or while a condition holds.
///
/// Only columns the sheet carries are checked; condition columns the sheet
/// lacks read as empty.
#[derive(Debug, Clone)]
pub struct RequiredColumnsRule {
    columns: Vec<RequiredColumn>,
}

impl RequiredColumnsRule {
    pub fn new(columns: Vec<RequiredColumn>) -> Self {
        Self { columns }
    }
}

impl Rule for RequiredColumnsRule {
    fn name(&self) -> &'static str {
        "required"
    }

    fn description(&self) -> String {
        "required columns must be set, conditional ones while their dependency holds".to_string()
    }

    fn check(&self, row: &MappedRow, _scope: &RowScope<'_>) -> Vec<Issue> {
        let mut issues = Vec::new();
        for required in &self.columns {
            let column = &required.column;
            if !row.has_column(column) || row.is_set(column) {
                continue;
            }
            let issue = match &required.requirement {
                Requirement::Always => Some(Issue::ColumnNotSet {
                    column: column.clone(),
                }),
                Requirement::Equals { dependency, value } => (row.get(dependency) == value)
                    .then(|| Issue::ConditionalColumnNotSet {
                        column: column.clone(),
                        dependency: dependency.clone(),
                        value: value.clone(),
                    }),
                Requirement::Set { dependency } => {
                    row.is_set(dependency)
                        .then(|| Issue::ConditionalColumnNotSet {
                            column: column.clone(),
                            dependency: dependency.clone(),
                            value: "SET".to_string(),
                        })
                }
                Requirement::AnySet { dependencies } => dependencies
                    .iter()
                    .any(|dependency| row.is_set(dependency))
                    .then(|| Issue::ConditionalColumnNotSet {
                        column: column.clone(),
                        dependency: dependencies.join(","),
                        value: "SET".to_string(),
                    }),
            };
            issues.extend(issue);
        }
        issues
    }
}
