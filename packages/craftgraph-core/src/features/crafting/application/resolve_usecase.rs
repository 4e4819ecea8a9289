//! Resolve Use Case - Application Layer
//!
//! Orchestrates name resolution, tree building, and metrics assembly.
//! Callers hand in a prebuilt index; building it is the recipe_index
//! feature's job.

use std::time::Instant;

use tracing::{debug, info};

use crate::features::crafting::domain::{
    BuildFailure, ResolveMetrics, ResolveOutcome, ResolveReport,
};
use crate::features::crafting::infrastructure::TreeBuilder;
use crate::features::recipe_index::RecipeIndex;

/// Use case: resolve a target name to its full crafting tree.
pub trait ResolveUseCase: Send + Sync {
    /// Always returns a report; negative outcomes are values, not errors.
    fn resolve(&self, index: &RecipeIndex, target_name: &str) -> ResolveReport;
}

/// Default implementation
pub struct ResolveUseCaseImpl;

impl ResolveUseCaseImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ResolveUseCaseImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolveUseCase for ResolveUseCaseImpl {
    fn resolve(&self, index: &RecipeIndex, target_name: &str) -> ResolveReport {
        let started = Instant::now();

        let Some(target) = index.find_by_name(target_name) else {
            debug!("resolve: no entity named {:?}", target_name);
            return ResolveReport {
                outcome: ResolveOutcome::NameNotFound,
                metrics: ResolveMetrics::new().with_build_time_ms(elapsed_ms(started)),
            };
        };
        let target_id = target.id.clone();
        let target_depth = target.depth;

        let mut builder = TreeBuilder::new(index);
        let outcome = match builder.build(&target_id) {
            Ok(tree) => ResolveOutcome::Resolved(tree),
            Err(BuildFailure::NoPath(element)) => ResolveOutcome::NoPath { element },
            Err(BuildFailure::Cycle(element)) => ResolveOutcome::CyclicRecipe { element },
        };

        let metrics = ResolveMetrics::new()
            .with_build_time_ms(elapsed_ms(started))
            .with_target_depth(target_depth)
            .with_unique_nodes(builder.cached_count());

        info!(
            "resolve: {:?} -> {} in {:.3}ms ({} unique nodes)",
            target_name,
            outcome.label(),
            metrics.build_time_ms,
            metrics.unique_nodes
        );
        ResolveReport { outcome, metrics }
    }
}

/// One-shot convenience over the default use case.
pub fn resolve_target(index: &RecipeIndex, target_name: &str) -> ResolveReport {
    ResolveUseCaseImpl::new().resolve(index, target_name)
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
