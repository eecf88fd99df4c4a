//! Template file discovery.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

const TEMPLATE_SUFFIX: &str = "template";
const LOCK_FILE_MARKER: char = '~';

/// Whether a path names a content template workbook.
///
/// Matches `*Template.xls` and `*Template.xlsx` (case-insensitive) and
/// rejects office lock files, whose names contain `~`.
pub fn is_template_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    if name.contains(LOCK_FILE_MARKER) {
        return false;
    }
    let is_workbook = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xls") || ext.eq_ignore_ascii_case("xlsx"));
    let is_template = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.to_lowercase().ends_with(TEMPLATE_SUFFIX));
    is_workbook && is_template
}

/// Lists all template workbooks directly inside a directory.
///
/// Returns files sorted by filename.
pub fn list_template_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if is_template_file(&path) {
            files.push(path);
        } else {
            debug!(path = %path.display(), "not a template, skipping");
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Expand a mix of template files and directories into template paths.
///
/// Directories contribute their template workbooks; files are taken as
/// given, in argument order.
pub fn collect_templates(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut templates = Vec::new();
    for path in paths {
        if path.is_dir() {
            templates.extend(list_template_files(path)?);
        } else if path.is_file() {
            templates.push(path.clone());
        } else {
            return Err(IngestError::FileNotFound { path: path.clone() });
        }
    }
    Ok(templates)
}
