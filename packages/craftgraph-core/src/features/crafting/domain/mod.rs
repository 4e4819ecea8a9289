//! Domain Models for Crafting Resolution
//!
//! Pure business logic, no infrastructure dependencies.

pub mod models;
pub mod report;

pub use models::CraftNode;
pub use report::{BuildFailure, ResolveMetrics, ResolveOutcome, ResolveReport};
