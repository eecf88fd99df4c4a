//! Located findings and the per-run finding log.

use serde::{Deserialize, Serialize};

use crate::issue::Issue;

/// One reported validation issue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Finding {
    pub template: String,
    pub sheet: String,
    /// Row identifier, or `""` for header and sheet level issues.
    pub field: String,
    pub column: String,
    pub message: String,
}

/// Append-only collection of findings for one validation run.
///
/// Findings keep their append order and are never deduplicated. Grouping by
/// template spans every template logged during the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindingLog {
    findings: Vec<Finding>,
    templates: Vec<String>,
}

impl FindingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one finding.
    pub fn log(
        &mut self,
        template: impl Into<String>,
        sheet: impl Into<String>,
        field: impl Into<String>,
        column: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.push(Finding {
            template: template.into(),
            sheet: sheet.into(),
            field: field.into(),
            column: column.into(),
            message: message.into(),
        });
    }

    /// Append an engine issue located at `field` (ignored for sheet level issues).
    pub fn record(&mut self, template: &str, sheet: &str, field: &str, issue: &Issue) {
        let field = if issue.is_sheet_level() { "" } else { field };
        self.log(template, sheet, field, issue.column(), issue.message());
    }

    pub fn push(&mut self, finding: Finding) {
        if !self.templates.contains(&finding.template) {
            self.templates.push(finding.template.clone());
        }
        self.findings.push(finding);
    }

    pub fn has_issues(&self) -> bool {
        !self.findings.is_empty()
    }

    /// All findings in append order.
    pub fn all(&self) -> &[Finding] {
        &self.findings
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Templates that have at least one finding, in first-logged order.
    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    pub fn for_template<'a>(&'a self, template: &'a str) -> impl Iterator<Item = &'a Finding> {
        self.findings
            .iter()
            .filter(move |finding| finding.template == template)
    }

    /// Serialise the findings as a JSON array, one object per finding.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.findings)
    }

    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }
}

impl Extend<Finding> for FindingLog {
    fn extend<I: IntoIterator<Item = Finding>>(&mut self, iter: I) {
        for finding in iter {
            self.push(finding);
        }
    }
}
