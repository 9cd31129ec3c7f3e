//! @acp:module "Errors"
//! @acp:summary "Error types for configuration updates and preset loading"
//! @acp:domain cli
//! @acp:layer types

use thiserror::Error;

/// Errors raised at the configuration boundary.
///
/// Composers never fail: once a [`crate::Configuration`] exists it is valid,
/// so every variant here comes from `set_field` or from loading a preset.
#[derive(Debug, Error)]
pub enum SparcError {
    #[error("invalid value '{value}' for {field}: {reason}")]
    InvalidFieldValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("invalid assignment '{0}': expected FIELD=VALUE")]
    InvalidAssignment(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SparcError {
    pub(crate) fn invalid(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SparcError::InvalidFieldValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SparcError>;
