//! Workbook reading through calamine.
//!
//! Converts every worksheet into a [`Sheet`] of neutral [`Cell`] values. A
//! calamine range starts at its first used cell; the conversion pads rows
//! and columns so that positions match the worksheet (A1 is `rows[0][0]`).

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use share_model::{Cell, Sheet, TemplateWorkbook};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Read every worksheet of a template workbook.
///
/// The template identifier is the file name.
pub fn read_workbook(path: &Path) -> Result<TemplateWorkbook> {
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::WorkbookOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let template = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|source| IngestError::SheetRead {
                path: path.to_path_buf(),
                sheet: name.clone(),
                source,
            })?;
        let sheet = sheet_from_range(&name, &range);
        debug!(template = %template, sheet = %name, rows = sheet.rows.len(), "read sheet");
        sheets.push(sheet);
    }

    Ok(TemplateWorkbook::new(template, sheets))
}

/// Convert a calamine range into a sheet anchored at A1.
pub fn sheet_from_range(name: &str, range: &Range<Data>) -> Sheet {
    let Some((first_row, first_col)) = range.start() else {
        return Sheet::new(name, Vec::new());
    };

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); first_row as usize];
    for row in range.rows() {
        let mut cells = vec![Cell::Empty; first_col as usize];
        cells.extend(row.iter().map(cell_from_data));
        rows.push(cells);
    }
    Sheet::new(name, rows)
}

/// Map one calamine cell onto the neutral cell type.
pub fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(value) | Data::DateTimeIso(value) | Data::DurationIso(value) => {
            Cell::Text(value.clone())
        }
        Data::Float(value) => Cell::Number(*value),
        Data::Int(value) => Cell::Integer(*value),
        Data::Bool(value) => Cell::Boolean(*value),
        Data::DateTime(value) => Cell::Number(value.as_f64()),
        Data::Error(error) => Cell::Text(format!("#{error:?}")),
    }
}
