//! Template checker: sheet selection and per-sheet driving of the engine.

use std::fmt::Display;

use share_model::{FindingLog, Issue, Sheet, SheetKind, TemplateWorkbook};
use share_standards::{CheckerConfig, SchemaRegistry, StandardsError};
use tracing::{debug, info, info_span, warn};

use crate::engine::RuleEngine;
use crate::mapper::RowMapper;
use crate::rules::{Rule, RowScope};
use crate::run::{CheckRun, TemplateFailure};
use crate::state::CrossTabState;

/// Checks content templates against one configuration.
///
/// The configuration is validated up front and stays fixed for the
/// lifetime of the checker.
#[derive(Debug)]
pub struct TemplateChecker {
    config: CheckerConfig,
    registry: SchemaRegistry,
    engine: RuleEngine,
}

impl TemplateChecker {
    /// Build a checker with the built-in rules.
    pub fn new(config: CheckerConfig) -> Result<Self, StandardsError> {
        config.validate()?;
        let registry = SchemaRegistry::from_config(&config);
        let engine = RuleEngine::with_builtin_rules(&config);
        Ok(Self {
            config,
            registry,
            engine,
        })
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    /// Register an additional rule after the built-in ones.
    pub fn register_rule(&mut self, rule: Box<dyn Rule>) {
        self.engine.register(rule);
    }

    pub fn rule_specifications(&self) -> Vec<String> {
        self.engine.rule_specifications()
    }

    /// Check one sheet and append its findings to `log`.
    ///
    /// Reference identifiers are recorded into `state` before any row of the
    /// sheet is checked.
    pub fn check_sheet(
        &self,
        template: &str,
        sheet: &Sheet,
        state: &mut CrossTabState,
        log: &mut FindingLog,
    ) {
        let mapped = RowMapper::new(&self.config, &self.registry).map_sheet(sheet, state);
        for issue in &mapped.issues {
            log.record(template, &sheet.name, "", issue);
        }
        debug!(
            sheet = %sheet.name,
            kind = mapped.kind.label(),
            rows = mapped.rows.len(),
            "checking sheet"
        );

        let primary = &self.config.sheet.primary_identifier;
        for row in &mapped.rows {
            let identifier = row.get(primary);
            let scope = RowScope {
                kind: mapped.kind,
                identifier,
                cross_tab: &*state,
            };
            for issue in self.engine.run(row, &scope) {
                log.record(template, &sheet.name, identifier, &issue);
            }
        }
    }

    /// Check every eligible sheet of a workbook.
    ///
    /// Sheets whose A1 cell is not a scan marker are ignored. Sheets flagged
    /// as work in progress get a single finding and are not scanned. The
    /// reference tab is checked first so concept tabs see its identifiers.
    pub fn check_template(&self, workbook: &TemplateWorkbook, log: &mut FindingLog) {
        let template = workbook.template.as_str();
        let _span = info_span!("template", template).entered();
        let conventions = &self.config.sheet;

        let mut eligible: Vec<&Sheet> = workbook
            .sheets
            .iter()
            .filter(|sheet| {
                let marker = sheet.value_at(0, 0).to_uppercase();
                let scan = conventions
                    .scan_markers
                    .iter()
                    .any(|candidate| candidate.to_uppercase() == marker);
                if !scan {
                    debug!(sheet = %sheet.name, "not a content sheet, skipping");
                }
                scan
            })
            .collect();
        eligible.sort_by_key(|sheet| self.registry.sheet_kind(&sheet.name) != SheetKind::Reference);

        let mut state = CrossTabState::new();
        for sheet in eligible {
            if sheet
                .value_at(0, 2)
                .eq_ignore_ascii_case(&conventions.work_in_progress_marker)
            {
                info!(sheet = %sheet.name, "sheet marked as work in progress");
                log.record(template, &sheet.name, "", &Issue::WorkInProgress);
                continue;
            }
            self.check_sheet(template, sheet, &mut state, log);
        }
    }

    /// Check a batch of templates.
    ///
    /// Each input pairs a template name with the outcome of reading it; a
    /// read failure is recorded and the remaining templates are still
    /// checked. Cross-tab state never leaks between templates.
    pub fn check_all<I, E>(&self, inputs: I) -> CheckRun
    where
        I: IntoIterator<Item = (String, Result<TemplateWorkbook, E>)>,
        E: Display,
    {
        let mut run = CheckRun::new();
        for (template, workbook) in inputs {
            match workbook {
                Ok(workbook) => {
                    self.check_template(&workbook, &mut run.log);
                    run.checked.push(template);
                }
                Err(error) => {
                    warn!(template = %template, "failed to read template: {error}");
                    run.failures.push(TemplateFailure {
                        template,
                        reason: error.to_string(),
                    });
                }
            }
        }
        info!(
            checked = run.checked.len(),
            failed = run.failures.len(),
            findings = run.log.len(),
            "check run complete"
        );
        run
    }
}
