//! Cell normalisation.
//!
//! Every downstream component works on trimmed strings only. This module is
//! the single place where a raw workbook cell becomes that string.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A raw cell value as handed over by a workbook reader.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Absent or blank cell.
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Integer(i64),
    Boolean(bool),
}

impl Cell {
    /// Trimmed text form of the cell; empty cells become `""`.
    pub fn normalized(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(value) => value.trim().to_string(),
            other => other.to_string().trim().to_string(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(value) => f.write_str(value),
            Cell::Number(value) => write!(f, "{value}"),
            Cell::Integer(value) => write!(f, "{value}"),
            Cell::Boolean(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Boolean(value)
    }
}

impl<T> From<Option<T>> for Cell
where
    T: Into<Cell>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Empty, Into::into)
    }
}

/// Normalise a possibly absent cell.
///
/// Rows shorter than the column list hand `None` for trailing positions,
/// which reads the same as an empty cell.
pub fn normalize_cell(cell: Option<&Cell>) -> String {
    cell.map(Cell::normalized).unwrap_or_default()
}
