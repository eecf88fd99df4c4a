use share_model::{Issue, MappedRow};
use share_standards::MarkerConfig;

use super::{Rule, RowScope};

/// Columns that must hold either a value or the not-applicable marker.
///
/// Any non-empty value satisfies the rule, the marker included.
#[derive(Debug, Clone)]
pub struct SetOrMarkerRule {
    columns: Vec<String>,
    marker: MarkerConfig,
}

impl SetOrMarkerRule {
    pub fn new(columns: Vec<String>, marker: MarkerConfig) -> Self {
        Self { columns, marker }
    }
}

impl Rule for SetOrMarkerRule {
    fn name(&self) -> &'static str {
        "set-or-marker"
    }

    fn description(&self) -> String {
        format!("columns must hold a value or '{}'", self.marker.marker)
    }

    fn check(&self, row: &MappedRow, _scope: &RowScope<'_>) -> Vec<Issue> {
        self.columns
            .iter()
            .filter(|column| row.has_column(column) && !row.is_set(column))
            .map(|column| Issue::ColumnNotSetOrMarked {
                column: column.clone(),
            })
            .collect()
    }
}
