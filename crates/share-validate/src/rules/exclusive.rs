use share_model::{Issue, MappedRow};
use share_standards::{ExclusivePair, MarkerConfig};

use super::{Rule, RowScope, is_filled};

/// Column pairs of which at most one may carry a value.
///
/// The not-applicable marker does not count as a value, so a row may mark
/// one side `NA` and fill the other.
#[derive(Debug, Clone)]
pub struct MutualExclusionRule {
    pairs: Vec<ExclusivePair>,
    marker: MarkerConfig,
}

impl MutualExclusionRule {
    pub fn new(pairs: Vec<ExclusivePair>, marker: MarkerConfig) -> Self {
        Self { pairs, marker }
    }
}

impl Rule for MutualExclusionRule {
    fn name(&self) -> &'static str {
        "mutually-exclusive"
    }

    fn description(&self) -> String {
        "paired columns must not both hold a value".to_string()
    }

    fn check(&self, row: &MappedRow, _scope: &RowScope<'_>) -> Vec<Issue> {
        self.pairs
            .iter()
            .filter(|pair| {
                is_filled(row.get(&pair.first), &self.marker)
                    && is_filled(row.get(&pair.second), &self.marker)
            })
            .map(|pair| Issue::MutuallyExclusive {
                first: pair.first.clone(),
                second: pair.second.clone(),
            })
            .collect()
    }
}
