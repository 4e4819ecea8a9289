//! Crafting feature - Target resolution
//!
//! Expands a target name into its full combination tree:
//! - domain/         : tree nodes, outcomes, metrics
//! - application/    : ResolveUseCase (name lookup + build + metrics)
//! - infrastructure/ : memoized depth-first tree builder

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{resolve_target, ResolveUseCase, ResolveUseCaseImpl};
pub use domain::{BuildFailure, CraftNode, ResolveMetrics, ResolveOutcome, ResolveReport};
pub use infrastructure::TreeBuilder;
