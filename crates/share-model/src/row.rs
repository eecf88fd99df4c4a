//! Field-name keyed view over one data row.

use std::collections::HashMap;

use crate::cell::{Cell, normalize_cell};

/// A data row keyed by the sheet's effective column list.
///
/// Every column of the list is present; cells missing from a short row read
/// as `""`. When a header repeats a name, the right-most cell wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappedRow {
    columns: Vec<String>,
    values: Vec<String>,
    index: HashMap<String, usize>,
}

impl MappedRow {
    /// Zip a column list against one row of raw cells.
    pub fn from_cells(columns: &[String], cells: &[Cell]) -> Self {
        columns
            .iter()
            .enumerate()
            .map(|(idx, column)| (column.clone(), normalize_cell(cells.get(idx))))
            .collect()
    }

    /// Value of a column; `""` when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.index
            .get(column)
            .map(|&idx| self.values[idx].as_str())
            .unwrap_or("")
    }

    /// Whether the sheet carries this column at all.
    pub fn has_column(&self, column: &str) -> bool {
        self.index.contains_key(column)
    }

    pub fn is_set(&self, column: &str) -> bool {
        !self.get(column).is_empty()
    }

    /// Distinct column names in header order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(idx, name)| self.index.get(name.as_str()) == Some(idx))
            .map(|(_, name)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MappedRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = MappedRow::default();
        for (column, value) in iter {
            let column = column.into();
            row.index.insert(column.clone(), row.columns.len());
            row.columns.push(column);
            row.values.push(value.into());
        }
        row
    }
}
