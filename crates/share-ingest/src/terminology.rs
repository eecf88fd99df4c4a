//! Terminology workbook reading.
//!
//! Every sheet carries a header row followed by one term per row. The term
//! is keyed by its `Field` column; `Code` and `Context` columns are optional.
//! A term listed on several sheets is merged into one entry.

use std::collections::HashMap;
use std::path::Path;

use share_model::{Cell, CodedTerm, Sheet};
use tracing::debug;

use crate::error::Result;
use crate::workbook::read_workbook;

pub const TERM_COLUMN: &str = "Field";
pub const CODE_COLUMN: &str = "Code";
pub const CONTEXT_COLUMN: &str = "Context";

/// Read the coded terms of a terminology workbook.
pub fn read_terminology(path: &Path) -> Result<Vec<CodedTerm>> {
    let workbook = read_workbook(path)?;
    let terms = terms_from_sheets(&workbook.sheets);
    debug!(path = %path.display(), terms = terms.len(), "read terminology");
    Ok(terms)
}

/// Collect terms in first-seen order.
///
/// Sheets without a `Field` header are skipped, as are rows with an empty
/// term. A blank code or context leaves the merged value untouched.
pub fn terms_from_sheets(sheets: &[Sheet]) -> Vec<CodedTerm> {
    let mut terms: Vec<CodedTerm> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for sheet in sheets {
        let header: Vec<String> = sheet
            .rows
            .first()
            .map(|cells| cells.iter().map(Cell::normalized).collect())
            .unwrap_or_default();
        let position = |name: &str| header.iter().position(|column| column == name);
        let Some(term_col) = position(TERM_COLUMN) else {
            debug!(sheet = %sheet.name, "no term column, sheet skipped");
            continue;
        };
        let code_col = position(CODE_COLUMN);
        let context_col = position(CONTEXT_COLUMN);

        for row in 1..sheet.rows.len() {
            let name = sheet.value_at(row, term_col);
            if name.is_empty() {
                continue;
            }
            let slot = *index.entry(name.clone()).or_insert_with(|| {
                terms.push(CodedTerm::new(name.as_str()));
                terms.len() - 1
            });
            let term = &mut terms[slot];
            if let Some(code) = code_col.map(|col| sheet.value_at(row, col))
                && !code.is_empty()
            {
                term.code = Some(code);
            }
            if let Some(context) = context_col.map(|col| sheet.value_at(row, col))
                && !context.is_empty()
            {
                term.terminology_type = Some(context);
            }
        }
    }
    terms
}
