//! Shared module - Common types and utilities
//!
//! Types used by every feature. No infrastructure dependencies.

pub mod models;

// Re-exports for convenience
pub use models::*;
