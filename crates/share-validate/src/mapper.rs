//! Row mapping: sentinel rows, header detection and field-keyed data rows.

use std::collections::HashSet;

use share_model::{Cell, Issue, MappedRow, Sheet, SheetKind, normalize_cell};
use share_standards::{CheckerConfig, SchemaRegistry};
use tracing::debug;

use crate::state::CrossTabState;

/// Result of mapping one sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedSheet {
    pub kind: SheetKind,
    /// Effective column list used to key the data rows.
    pub columns: Vec<String>,
    /// Data rows with a non-empty primary identifier, in sheet order.
    pub rows: Vec<MappedRow>,
    /// Sheet level issues found while scanning for the header.
    pub issues: Vec<Issue>,
    pub header_found: bool,
}

/// Turns a raw sheet into [`MappedRow`]s.
#[derive(Debug, Clone, Copy)]
pub struct RowMapper<'a> {
    config: &'a CheckerConfig,
    registry: &'a SchemaRegistry,
}

impl<'a> RowMapper<'a> {
    pub fn new(config: &'a CheckerConfig, registry: &'a SchemaRegistry) -> Self {
        Self { config, registry }
    }

    /// Map `sheet`, recording reference identifiers into `state`.
    ///
    /// Rows above the header are scanned for the version and domain
    /// sentinels. Rows after the header become data rows; those without a
    /// primary identifier are skipped. A sheet without a header row yields
    /// no data rows.
    pub fn map_sheet(&self, sheet: &Sheet, state: &mut CrossTabState) -> MappedSheet {
        let conventions = &self.config.sheet;
        let kind = self.registry.sheet_kind(&sheet.name);
        let version_label = conventions.version_label.to_uppercase();
        let header_label = conventions.header_label.to_uppercase();

        let mut issues = Vec::new();
        let mut header_row = None;

        for (idx, cells) in sheet.rows.iter().enumerate() {
            let first = normalize_cell(cells.first());
            if first.is_empty() {
                continue;
            }
            let upper = first.to_uppercase();
            if upper == version_label {
                let expected = &conventions.bridg_version;
                if sheet.value_at(idx, 1) != *expected && sheet.value_at(idx, 2) != *expected {
                    issues.push(Issue::VersionMismatch {
                        label: first,
                        expected: expected.clone(),
                    });
                }
            } else if first == conventions.domain_label {
                if sheet.value_at(idx, 1).is_empty() {
                    issues.push(Issue::DomainNotSet { label: first });
                }
            } else if upper == header_label {
                header_row = Some(idx);
                break;
            }
        }

        let Some(header_idx) = header_row else {
            debug!(sheet = %sheet.name, "no header row found");
            return MappedSheet {
                kind,
                columns: Vec::new(),
                rows: Vec::new(),
                issues,
                header_found: false,
            };
        };

        let columns = header_columns(&sheet.rows[header_idx]);
        if let Some(issue) = compare_header(&columns, self.registry.schema(kind).columns()) {
            debug!(sheet = %sheet.name, "header deviates from the {} schema", kind.label());
            issues.push(issue);
        }

        let primary = &conventions.primary_identifier;
        let mut rows = Vec::new();
        for cells in &sheet.rows[header_idx + 1..] {
            let row = MappedRow::from_cells(&columns, cells);
            let identifier = row.get(primary);
            if identifier.is_empty() {
                continue;
            }
            if kind.is_reference() {
                state.record(identifier);
            }
            rows.push(row);
        }

        MappedSheet {
            kind,
            columns,
            rows,
            issues,
            header_found: true,
        }
    }
}

/// Normalised header names with trailing blank cells dropped.
fn header_columns(cells: &[Cell]) -> Vec<String> {
    let mut columns: Vec<String> = cells.iter().map(Cell::normalized).collect();
    while columns.last().is_some_and(String::is_empty) {
        columns.pop();
    }
    columns
}

/// Heading issue when the header differs from the schema in length or names.
///
/// Extras keep header order, missing names keep schema order.
fn compare_header(header: &[String], schema: &[String]) -> Option<Issue> {
    let header_set: HashSet<&str> = header.iter().map(String::as_str).collect();
    let schema_set: HashSet<&str> = schema.iter().map(String::as_str).collect();
    if header.len() == schema.len() && header_set == schema_set {
        return None;
    }

    let mut seen = HashSet::new();
    let extras = header
        .iter()
        .filter(|name| !schema_set.contains(name.as_str()) && seen.insert(name.as_str()))
        .cloned()
        .collect();
    let missing = schema
        .iter()
        .filter(|name| !header_set.contains(name.as_str()))
        .cloned()
        .collect();
    Some(Issue::HeadingMismatch { extras, missing })
}
