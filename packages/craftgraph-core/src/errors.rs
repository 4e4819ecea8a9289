//! Error types for craftgraph-core
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

/// Main error type for craftgraph operations.
///
/// Only conditions that abort an operation live here. Negative resolution
/// results (unknown name, unreachable target, recipe cycle) are ordinary
/// outcomes carried by [`ResolveOutcome`](crate::ResolveOutcome) and must
/// never surface as errors.
#[derive(Debug, Error)]
pub enum CraftGraphError {
    /// Snapshot missing, unreadable, or not a valid dag document
    #[error("crafting dag unavailable: {0}")]
    DataUnavailable(String),
}

impl CraftGraphError {
    /// Create a data-unavailable error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        CraftGraphError::DataUnavailable(msg.into())
    }
}

/// Result type alias for craftgraph operations
pub type Result<T> = std::result::Result<T, CraftGraphError>;
