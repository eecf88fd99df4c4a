use share_model::{Issue, MappedRow};

use super::{Rule, RowScope};

/// Rows carrying BRIDG mapping columns must fill at least one of them.
///
/// Any non-empty value counts, the not-applicable marker included. A row
/// without any column under the prefix is not checked.
#[derive(Debug, Clone)]
pub struct BridgMappingRule {
    prefix: String,
}

impl BridgMappingRule {
    pub fn new(prefix: String) -> Self {
        Self { prefix }
    }
}

impl Rule for BridgMappingRule {
    fn name(&self) -> &'static str {
        "bridg-mapping"
    }

    fn description(&self) -> String {
        format!(
            "rows need a value in one of their columns starting with '{}'",
            self.prefix
        )
    }

    fn check(&self, row: &MappedRow, scope: &RowScope<'_>) -> Vec<Issue> {
        let mapping: Vec<&str> = row
            .columns()
            .filter(|column| column.starts_with(&self.prefix))
            .collect();
        if mapping.is_empty() || mapping.iter().any(|column| row.is_set(column)) {
            return Vec::new();
        }
        vec![Issue::NoBridgMapping {
            variable: scope.identifier.to_string(),
        }]
    }
}
