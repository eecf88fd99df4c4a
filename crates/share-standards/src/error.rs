#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML configuration {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {schema} schema: {message}")]
    InvalidSchema { schema: String, message: String },

    #[error("primary identifier '{column}' is not part of the {schema} schema")]
    MissingPrimaryIdentifier { schema: String, column: String },

    #[error("{rule} rule references unknown column '{column}'")]
    UnknownColumn { rule: String, column: String },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn unknown_column(rule: &str, column: &str) -> Self {
        Self::UnknownColumn {
            rule: rule.to_string(),
            column: column.to_string(),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
