use share_model::{Issue, MappedRow};

use super::{Rule, RowScope};

/// Columns that must stay empty.
#[derive(Debug, Clone)]
pub struct ForbiddenColumnsRule {
    columns: Vec<String>,
}

impl ForbiddenColumnsRule {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }
}

impl Rule for ForbiddenColumnsRule {
    fn name(&self) -> &'static str {
        "forbidden"
    }

    fn description(&self) -> String {
        format!("columns {} must not be set", self.columns.join(", "))
    }

    fn check(&self, row: &MappedRow, _scope: &RowScope<'_>) -> Vec<Issue> {
        self.columns
            .iter()
            .filter(|column| row.is_set(column))
            .map(|column| Issue::ColumnSetWhenForbidden {
                column: column.clone(),
            })
            .collect()
    }
}
