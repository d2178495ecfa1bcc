//! Error types for aura_core.
//!
//! Configuration is the only user-facing failure: a world is either built from
//! a valid configuration or not built at all. The tick loop itself never
//! returns errors.

use thiserror::Error;

/// Rejected configuration, raised before any world state exists.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A grid or clock dimension that must be positive was zero.
    #[error("Invalid dimension: {field} must be positive (got {value})")]
    InvalidDimension { field: &'static str, value: u64 },

    /// A numeric parameter outside its accepted range.
    #[error("Out of range: {field} {reason}")]
    OutOfRange { field: &'static str, reason: String },

    /// Parameters that are valid alone but contradict each other.
    #[error("Inconsistent configuration: {0}")]
    Inconsistent(String),

    /// TOML could not be parsed into the configuration schema.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for configuration handling.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    #[must_use]
    pub fn dimension(field: &'static str, value: u64) -> Self {
        Self::InvalidDimension { field, value }
    }

    #[must_use]
    pub fn out_of_range<S: Into<String>>(field: &'static str, reason: S) -> Self {
        Self::OutOfRange {
            field,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn inconsistent<S: Into<String>>(msg: S) -> Self {
        Self::Inconsistent(msg.into())
    }

    /// Name of the offending field, when the error is tied to one.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidDimension { field, .. } | Self::OutOfRange { field, .. } => Some(field),
            _ => None,
        }
    }
}
