use std::collections::HashSet;

/// Identifiers declared on the reference tab of one template.
///
/// Created empty per template, filled while the reference tab is mapped and
/// only read afterwards. Never shared between templates.
#[derive(Debug, Clone, Default)]
pub struct CrossTabState {
    identifiers: HashSet<String>,
}

impl CrossTabState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, identifier: &str) {
        self.identifiers.insert(identifier.to_string());
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.identifiers.contains(identifier)
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CrossTabState {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            identifiers: iter
                .into_iter()
                .map(|identifier| identifier.as_ref().to_string())
                .collect(),
        }
    }
}
