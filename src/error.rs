//! Error types.

use thiserror::Error;

/// Errors raised while building an engine configuration or resolving
/// a strategy identifier strictly.
///
/// Running a strategy never fails; these only surface at setup time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("unknown strategy id: {0}")]
    UnknownStrategy(String),
}

impl ConfigError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
