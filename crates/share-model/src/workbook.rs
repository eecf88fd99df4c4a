//! Input contract consumed from the workbook reader.

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, normalize_cell};

/// One worksheet as an ordered sequence of rows of raw cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Normalised value at a zero-based position; `""` outside the data.
    pub fn value_at(&self, row: usize, column: usize) -> String {
        normalize_cell(self.rows.get(row).and_then(|cells| cells.get(column)))
    }
}

/// All sheets of one submitted template, in workbook order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateWorkbook {
    /// Template identifier, usually the file name.
    pub template: String,
    pub sheets: Vec<Sheet>,
}

impl TemplateWorkbook {
    pub fn new(template: impl Into<String>, sheets: Vec<Sheet>) -> Self {
        Self {
            template: template.into(),
            sheets,
        }
    }
}
