use share_model::{Issue, MappedRow, SheetKind};

use super::{Rule, RowScope};

/// Concept tab rows must name a variable declared on the reference tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferencePresenceRule;

impl Rule for ReferencePresenceRule {
    fn name(&self) -> &'static str {
        "cross-tab"
    }

    fn description(&self) -> String {
        "concept tab variables must appear on the generic tab".to_string()
    }

    fn check(&self, _row: &MappedRow, scope: &RowScope<'_>) -> Vec<Issue> {
        if scope.kind == SheetKind::Reference || scope.cross_tab.contains(scope.identifier) {
            return Vec::new();
        }
        vec![Issue::NotInReferenceTab {
            variable: scope.identifier.to_string(),
        }]
    }
}
