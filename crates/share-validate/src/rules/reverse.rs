use share_model::{Issue, MappedRow};
use share_standards::ReverseDependency;

use super::{Rule, RowScope};

/// Columns that must stay empty while another column holds a given value.
#[derive(Debug, Clone)]
pub struct ReverseDependencyRule {
    dependencies: Vec<ReverseDependency>,
}

impl ReverseDependencyRule {
    pub fn new(dependencies: Vec<ReverseDependency>) -> Self {
        Self { dependencies }
    }
}

impl Rule for ReverseDependencyRule {
    fn name(&self) -> &'static str {
        "reverse-dependency"
    }

    fn description(&self) -> String {
        "dependent columns must stay empty while their dependency holds the excluding value"
            .to_string()
    }

    fn check(&self, row: &MappedRow, _scope: &RowScope<'_>) -> Vec<Issue> {
        self.dependencies
            .iter()
            .filter(|dependency| {
                row.get(&dependency.depends_on) == dependency.value && row.is_set(&dependency.column)
            })
            .map(|dependency| Issue::DependentColumnSet {
                column: dependency.column.clone(),
            })
            .collect()
    }
}
