//! Schema selection by sheet name.

use share_model::{ColumnSchema, SheetKind};

use crate::config::CheckerConfig;

/// Holds the two column schemas and picks the one a sheet must follow.
///
/// Sheets whose name contains the reference marker (case-insensitive) are
/// the generic tab; every other sheet is a concept tab.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    reference: ColumnSchema,
    per_tab: ColumnSchema,
    reference_marker: String,
}

impl SchemaRegistry {
    pub fn new(reference: ColumnSchema, per_tab: ColumnSchema, reference_marker: &str) -> Self {
        Self {
            reference,
            per_tab,
            reference_marker: reference_marker.to_uppercase(),
        }
    }

    pub fn from_config(config: &CheckerConfig) -> Self {
        Self::new(
            config.schemas.reference.clone(),
            config.schemas.per_tab.clone(),
            &config.sheet.reference_marker,
        )
    }

    pub fn sheet_kind(&self, sheet_name: &str) -> SheetKind {
        if sheet_name.to_uppercase().contains(&self.reference_marker) {
            SheetKind::Reference
        } else {
            SheetKind::PerTab
        }
    }

    pub fn schema(&self, kind: SheetKind) -> &ColumnSchema {
        match kind {
            SheetKind::Reference => &self.reference,
            SheetKind::PerTab => &self.per_tab,
        }
    }

    pub fn schema_for(&self, sheet_name: &str) -> &ColumnSchema {
        self.schema(self.sheet_kind(sheet_name))
    }
}
