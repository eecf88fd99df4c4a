use share_model::{Issue, MappedRow};
use share_standards::{CodingPair, MarkerConfig};

use super::{Rule, RowScope, is_filled};

/// Free-text columns whose content needs a companion code.
///
/// A text holding only the not-applicable marker needs no code.
#[derive(Debug, Clone)]
pub struct CodingCompletenessRule {
    pairs: Vec<CodingPair>,
    marker: MarkerConfig,
}

impl CodingCompletenessRule {
    pub fn new(pairs: Vec<CodingPair>, marker: MarkerConfig) -> Self {
        Self { pairs, marker }
    }
}

impl Rule for CodingCompletenessRule {
    fn name(&self) -> &'static str {
        "coding"
    }

    fn description(&self) -> String {
        "coded text columns require a C-Code".to_string()
    }

    fn check(&self, row: &MappedRow, _scope: &RowScope<'_>) -> Vec<Issue> {
        self.pairs
            .iter()
            .filter(|pair| {
                row.has_column(&pair.code)
                    && is_filled(row.get(&pair.text), &self.marker)
                    && !row.is_set(&pair.code)
            })
            .map(|pair| Issue::CodingMissing {
                code_column: pair.code.clone(),
            })
            .collect()
    }
}
