//! Built-in SHARE content template tables (BRIDG 3.0.3).

use share_model::ColumnSchema;

use crate::config::{
    CheckerConfig, CodingPair, ExclusivePair, MarkerConfig, RequiredColumn, ReverseDependency,
    RuleTables, Schemas, SheetConventions,
};

pub const BRIDG_VERSION: &str = "3.0.3";
pub const PRIMARY_IDENTIFIER: &str = "Variable Name";
pub const REFERENCE_MARKER: &str = "GENERIC";
pub const NOT_APPLICABLE_MARKER: &str = "NA";
pub const MAPPING_PREFIX: &str = "Mapping to BRIDG";

pub const CODED_VALUES: &str =
    "Description of Observation, ObservationResult or Activity or Relationship - CODED VALUES";
pub const CODED_VALUE_CODES: &str =
    "Description of Observation, ObservationResult or Activity or Relationship - C-Codes";
pub const NON_CODED_VALUES: &str =
    "Description of Observation, ObservationResult or Activity or Relationship - NON-CODED VALUES";
pub const OBSERVATION_TYPE: &str = "Observation, ObservationResult, Activity, Relationship";

/// Columns of the generic tab, in sheet order.
pub const REFERENCE_COLUMNS: &[&str] = &[
    "Variable Name",
    "Variable Name C-Code",
    "Variable Label",
    "SHARE Generic Definition",
    "SDTM IG 3.1.2",
    "SEND 3.0",
    "CDASH V1.1",
    "CDASH V1.1 Conceptual Datatype",
    "SDTM IG 3.1.2 Datatype",
    "Codelist Master",
    "Set of Valid Values",
    "Assigned Value",
    "Mapping to BRIDG Defined Class",
    "Mapping to BRIDG Defined Class Attribute",
    "BRIDG Defined Class C-Code",
    "BRIDG Defined Class Attribute C-Code",
    "Mapping to BRIDG Performed Class",
    "Mapping to BRIDG Performed Class Attribute",
    "BRIDG Performed Class C-Code",
    "BRIDG Performed Class Attribute C-Code",
    "Mapping to BRIDG Non-defined/Non-performed Class",
    "Mapping to BRIDG Non-defined/Non-performed Class Attribute",
    "BRIDG Non-defined/Non-performed Class C-Code",
    "BRIDG Non-defined/Non-performed Class Attribute C-Code",
    "Mapping to BRIDG Planned Class",
    "Mapping to BRIDG Planned Class Attribute",
    "BRIDG Planned Class C-Code",
    "BRIDG Planned Class Attribute C-Code",
    "ISO 21090 Datatype",
    "ISO 21090 Datatype C-Code",
    "ISO 21090 Datatype Component",
    "AsCollectedIndicator",
    OBSERVATION_TYPE,
    CODED_VALUES,
    CODED_VALUE_CODES,
    NON_CODED_VALUES,
    "NOTES",
];

/// Columns of a concept tab, in sheet order.
pub const PER_TAB_COLUMNS: &[&str] = &[
    "Variable Name",
    "Variable Label",
    "Codelist Master",
    "Set of Valid Values",
    "Assigned Value",
    "Null Flavors",
    "Boolean Mapping",
    "ISO 21090 Datatype Constraint",
    "ISO 21090 Datatype Constraint C-Code",
    "ISO 21090 Datatype Constraint Attribute",
    "Observation or Activity",
];

const BRIDG_CLASS_MAPPINGS: &[&str] = &[
    "Mapping to BRIDG Defined Class",
    "Mapping to BRIDG Performed Class",
    "Mapping to BRIDG Non-defined/Non-performed Class",
    "Mapping to BRIDG Planned Class",
];

impl CheckerConfig {
    /// The SHARE content template configuration.
    pub fn builtin() -> Self {
        Self {
            schemas: Schemas::default(),
            sheet: SheetConventions::default(),
            not_applicable: MarkerConfig::default(),
            rules: RuleTables::default(),
        }
    }
}

impl Default for Schemas {
    fn default() -> Self {
        Self {
            reference: ColumnSchema::new(REFERENCE_COLUMNS.iter().copied()),
            per_tab: ColumnSchema::new(PER_TAB_COLUMNS.iter().copied()),
        }
    }
}

impl Default for SheetConventions {
    fn default() -> Self {
        Self {
            primary_identifier: PRIMARY_IDENTIFIER.to_string(),
            reference_marker: REFERENCE_MARKER.to_string(),
            scan_markers: vec!["BRIDG VERSION".to_string(), "CONCEPT".to_string()],
            work_in_progress_marker: "WIP".to_string(),
            version_label: "BRIDG VERSION".to_string(),
            domain_label: "Domain".to_string(),
            header_label: "VARIABLE NAME".to_string(),
            bridg_version: BRIDG_VERSION.to_string(),
        }
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            marker: NOT_APPLICABLE_MARKER.to_string(),
            case_insensitive: true,
        }
    }
}

impl Default for RuleTables {
    fn default() -> Self {
        Self {
            required: vec![
                RequiredColumn::always("Variable Name"),
                RequiredColumn::always("Variable Name C-Code"),
                RequiredColumn::always("Variable Label"),
                RequiredColumn::always("SHARE Generic Definition"),
                RequiredColumn::always("SDTM IG 3.1.2"),
                RequiredColumn::always("CDASH V1.1"),
                RequiredColumn::when_equals("CDASH V1.1 Conceptual Datatype", "CDASH V1.1", "Y"),
                RequiredColumn::when_equals("SDTM IG 3.1.2 Datatype", "SDTM IG 3.1.2", "Y"),
                RequiredColumn::when_any_set("ISO 21090 Datatype", BRIDG_CLASS_MAPPINGS),
                RequiredColumn::when_set("ISO 21090 Datatype Component", "ISO 21090 Datatype"),
                RequiredColumn::always(OBSERVATION_TYPE),
            ],
            set_or_marker: [
                "Mapping to BRIDG Defined Class",
                "Mapping to BRIDG Defined Class Attribute",
                "Mapping to BRIDG Performed Class",
                "Mapping to BRIDG Performed Class Attribute",
                "Mapping to BRIDG Non-defined/Non-performed Class",
                "Mapping to BRIDG Non-defined/Non-performed Class Attribute",
                "Mapping to BRIDG Planned Class",
                "Mapping to BRIDG Planned Class Attribute",
                OBSERVATION_TYPE,
                CODED_VALUES,
                NON_CODED_VALUES,
            ]
            .iter()
            .map(|column| (*column).to_string())
            .collect(),
            forbidden: vec!["SEND 3.0".to_string()],
            mutually_exclusive: vec![ExclusivePair::new(CODED_VALUES, NON_CODED_VALUES)],
            reverse_dependencies: vec![
                ReverseDependency::new("CDASH V1.1 Conceptual Datatype", "CDASH V1.1", "N"),
                ReverseDependency::new("SDTM IG 3.1.2 Datatype", "SDTM IG 3.1.2", "N"),
            ],
            coding: vec![
                CodingPair::new("Variable Name", "Variable Name C-Code"),
                CodingPair::new("Mapping to BRIDG Defined Class", "BRIDG Defined Class C-Code"),
                CodingPair::new(
                    "Mapping to BRIDG Defined Class Attribute",
                    "BRIDG Defined Class Attribute C-Code",
                ),
                CodingPair::new("Mapping to BRIDG Performed Class", "BRIDG Performed Class C-Code"),
                CodingPair::new(
                    "Mapping to BRIDG Performed Class Attribute",
                    "BRIDG Performed Class Attribute C-Code",
                ),
                CodingPair::new(
                    "Mapping to BRIDG Non-defined/Non-performed Class",
                    "BRIDG Non-defined/Non-performed Class C-Code",
                ),
                CodingPair::new(
                    "Mapping to BRIDG Non-defined/Non-performed Class Attribute",
                    "BRIDG Non-defined/Non-performed Class Attribute C-Code",
                ),
                CodingPair::new("Mapping to BRIDG Planned Class", "BRIDG Planned Class C-Code"),
                CodingPair::new(
                    "Mapping to BRIDG Planned Class Attribute",
                    "BRIDG Planned Class Attribute C-Code",
                ),
                CodingPair::new("ISO 21090 Datatype", "ISO 21090 Datatype C-Code"),
                CodingPair::new(
                    "ISO 21090 Datatype Constraint",
                    "ISO 21090 Datatype Constraint C-Code",
                ),
                CodingPair::new(CODED_VALUES, CODED_VALUE_CODES),
            ],
            mapping_prefix: MAPPING_PREFIX.to_string(),
        }
    }
}
