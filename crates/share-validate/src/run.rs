use share_model::FindingLog;

/// A template that could not be read and was left out of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFailure {
    pub template: String,
    pub reason: String,
}

/// Outcome of checking a batch of templates.
#[derive(Debug, Clone, Default)]
pub struct CheckRun {
    pub log: FindingLog,
    pub failures: Vec<TemplateFailure>,
    /// Templates that were read and checked, in input order.
    pub checked: Vec<String>,
}

impl CheckRun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_issues(&self) -> bool {
        self.log.has_issues()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Whether every template was read and none has findings.
    pub fn is_clean(&self) -> bool {
        !self.has_issues() && !self.has_failures()
    }
}
