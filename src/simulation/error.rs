//! Error types for the simulation core.

use thiserror::Error;

/// Errors surfaced by the simulation core.
///
/// Normal operation is total; these only cover rejected configuration,
/// rejected time steps and config-file loading.
#[derive(Debug, Error)]
pub enum SimError {
    /// A configuration parameter failed validation.
    #[error("invalid configuration: `{field}` {reason}")]
    InvalidConfig {
        /// Name of the offending parameter.
        field: &'static str,
        /// Human-readable constraint that was violated.
        reason: String,
    },

    /// A tick was requested with a negative, NaN or infinite time step.
    #[error("invalid time step: {0} (must be finite and non-negative)")]
    InvalidTimestep(f32),

    /// The k-d tree rejected a moth position.
    #[error("spatial index error: {0}")]
    SpatialIndex(String),

    /// Reading a configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the core.
pub type Result<T> = std::result::Result<T, SimError>;
