#![deny(unsafe_code)]

pub mod builtin;
pub mod config;
pub mod error;
pub mod loaders;
pub mod registry;

pub use crate::config::{
    CheckerConfig, CodingPair, ExclusivePair, MarkerConfig, RequiredColumn, Requirement,
    ReverseDependency, RuleTables, Schemas, SheetConventions,
};
pub use crate::error::StandardsError;
pub use crate::loaders::{
    CONFIG_FILE_NAME, STANDARDS_ENV_VAR, load_config, load_default_config, standards_root,
};
pub use crate::registry::SchemaRegistry;
