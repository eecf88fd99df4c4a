//! Rule engine: runs the registered rules over one mapped row.

use share_model::{Issue, MappedRow};
use share_standards::CheckerConfig;

use crate::rules::{Rule, RowScope, builtin_rules};

/// Ordered collection of row rules.
///
/// Issues come out in rule registration order, and within a rule in the
/// order of its configuration table.
#[derive(Default)]
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    /// Create an engine without any rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the built-in rules bound to `config`.
    pub fn with_builtin_rules(config: &CheckerConfig) -> Self {
        Self {
            rules: builtin_rules(config),
        }
    }

    /// Append a rule; it runs after every rule registered before it.
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in run order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Run every rule over `row`.
    pub fn run(&self, row: &MappedRow, scope: &RowScope<'_>) -> Vec<Issue> {
        self.rules
            .iter()
            .flat_map(|rule| rule.check(row, scope))
            .collect()
    }

    /// `(name, description)` of every registered rule, in run order.
    pub fn describe(&self) -> Vec<(&'static str, String)> {
        self.rules
            .iter()
            .map(|rule| (rule.name(), rule.description()))
            .collect()
    }

    /// `name: description` of every registered rule, in run order.
    pub fn rule_specifications(&self) -> Vec<String> {
        self.describe()
            .into_iter()
            .map(|(name, description)| format!("{name}: {description}"))
            .collect()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.names())
            .finish()
    }
}
