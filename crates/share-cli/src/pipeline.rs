//! Check pipeline: configuration, template discovery, reading and checking.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use share_ingest::{IngestError, collect_templates, read_workbook};
use share_model::TemplateWorkbook;
use share_standards::{StandardsError, load_config, load_default_config};
use share_validate::{CheckRun, TemplateChecker};
use tracing::{debug, info};

/// Exit code when every template was read and no findings were logged.
pub const EXIT_CLEAN: i32 = 0;
/// Exit code when findings were logged or a template could not be read.
pub const EXIT_FINDINGS: i32 = 1;
/// Exit code for configuration and usage errors.
pub const EXIT_USAGE: i32 = 2;

/// A template path paired with the outcome of reading it.
pub type TemplateInput = (String, std::result::Result<TemplateWorkbook, IngestError>);

/// Build a checker from an explicit configuration file or the standards directory.
pub fn load_checker(config: Option<&Path>) -> Result<TemplateChecker> {
    let config = match config {
        Some(path) => load_config(path)
            .with_context(|| format!("load checker configuration {}", path.display()))?,
        None => load_default_config().context("load checker configuration")?,
    };
    let checker = TemplateChecker::new(config).context("build checker")?;
    Ok(checker)
}

/// Read every template named by `paths`, expanding directories.
///
/// A template that cannot be opened is kept as an `Err` entry; only a
/// missing path or unreadable directory fails the whole call.
pub fn read_templates(paths: &[PathBuf]) -> Result<Vec<TemplateInput>> {
    let templates = collect_templates(paths).context("locate templates")?;
    info!(count = templates.len(), "templates found");
    Ok(templates
        .into_iter()
        .map(|path| {
            debug!(path = %path.display(), "reading template");
            (template_name(&path), read_workbook(&path))
        })
        .collect())
}

/// Read and check every template named by `paths`.
pub fn check_paths(checker: &TemplateChecker, paths: &[PathBuf]) -> Result<CheckRun> {
    let inputs = read_templates(paths)?;
    Ok(checker.check_all(inputs))
}

/// Process exit code for a completed run.
pub fn exit_code(run: &CheckRun) -> i32 {
    if run.is_clean() {
        EXIT_CLEAN
    } else {
        EXIT_FINDINGS
    }
}

/// Process exit code for a run that could not start.
pub fn error_exit_code(error: &anyhow::Error) -> i32 {
    if error.downcast_ref::<StandardsError>().is_some()
        || error.downcast_ref::<IngestError>().is_some()
    {
        EXIT_USAGE
    } else {
        EXIT_FINDINGS
    }
}

fn template_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
