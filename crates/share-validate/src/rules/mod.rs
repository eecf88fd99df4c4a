//! Row level rules.
//!
//! Every rule is a pure function of one mapped row, the sheet it belongs
//! to and the identifiers collected from the reference tab. Rules never
//! read other rows and never mutate shared state, so running them in any
//! order over the same data yields the same issues.

mod coding;
mod cross_tab;
mod exclusive;
mod forbidden;
mod mapping;
mod marker;
mod required;
mod reverse;

pub use coding::CodingCompletenessRule;
pub use cross_tab::ReferencePresenceRule;
pub use exclusive::MutualExclusionRule;
pub use forbidden::ForbiddenColumnsRule;
pub use mapping::BridgMappingRule;
pub use marker::SetOrMarkerRule;
pub use required::RequiredColumnsRule;
pub use reverse::ReverseDependencyRule;

use std::collections::HashSet;

use share_model::{Issue, MappedRow, SheetKind};
use share_standards::{CheckerConfig, MarkerConfig, Requirement};

use crate::state::CrossTabState;

/// Context a rule sees besides the row itself.
#[derive(Debug, Clone, Copy)]
pub struct RowScope<'a> {
    pub kind: SheetKind,
    /// The row's primary identifier value.
    pub identifier: &'a str,
    pub cross_tab: &'a CrossTabState,
}

/// A single consistency check over one data row.
pub trait Rule: Send + Sync {
    /// Short stable name, e.g. `required`.
    fn name(&self) -> &'static str;

    /// Human readable statement of what the rule enforces.
    fn description(&self) -> String;

    fn check(&self, row: &MappedRow, scope: &RowScope<'_>) -> Vec<Issue>;
}

/// The built-in rules in registration order.
///
/// A column that is unconditionally required is reported by the required
/// rule only; the set-or-marker and coding rules leave it out.
pub fn builtin_rules(config: &CheckerConfig) -> Vec<Box<dyn Rule>> {
    let tables = &config.rules;
    let always: HashSet<&str> = tables
        .required
        .iter()
        .filter(|required| required.requirement == Requirement::Always)
        .map(|required| required.column.as_str())
        .collect();
    let set_or_marker = tables
        .set_or_marker
        .iter()
        .filter(|column| !always.contains(column.as_str()))
        .cloned()
        .collect();
    let coding = tables
        .coding
        .iter()
        .filter(|pair| !always.contains(pair.code.as_str()))
        .cloned()
        .collect();

    vec![
        Box::new(RequiredColumnsRule::new(tables.required.clone())),
        Box::new(SetOrMarkerRule::new(
            set_or_marker,
            config.not_applicable.clone(),
        )),
        Box::new(ForbiddenColumnsRule::new(tables.forbidden.clone())),
        Box::new(MutualExclusionRule::new(
            tables.mutually_exclusive.clone(),
            config.not_applicable.clone(),
        )),
        Box::new(ReverseDependencyRule::new(
            tables.reverse_dependencies.clone(),
        )),
        Box::new(CodingCompletenessRule::new(coding, config.not_applicable.clone())),
        Box::new(BridgMappingRule::new(tables.mapping_prefix.clone())),
        Box::new(ReferencePresenceRule),
    ]
}

/// Whether a value counts as populated, treating the marker as not set.
pub(crate) fn is_filled(value: &str, marker: &MarkerConfig) -> bool {
    !value.is_empty() && !marker.matches(value)
}
