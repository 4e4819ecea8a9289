//! Resolution outcomes and metrics.
//!
//! Everything here is a normal result. Snapshot defects observed during
//! resolution (unreachable entities, recipe cycles) are data states, never
//! `Err` values; only an unloadable snapshot is an error, and that is
//! handled upstream of this feature.

use std::sync::Arc;

use serde::Serialize;

use crate::shared::models::ElementId;

use super::models::CraftNode;

/// Why a tree build stopped early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildFailure {
    /// An entity on the path has no metadata or no recipe.
    NoPath(ElementId),
    /// The recipe graph loops back into an entity still being resolved.
    Cycle(ElementId),
}

/// Final outcome of one resolution request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// Complete combination tree down to basic entities.
    Resolved(Arc<CraftNode>),
    /// No entity matched the requested name.
    NameNotFound,
    /// The target exists but cannot be reduced to basic entities; carries
    /// the first entity that blocked the build.
    NoPath { element: ElementId },
    /// Resolution hit a recipe cycle; carries the entity where the cycle
    /// closed. The snapshot is not a dag.
    CyclicRecipe { element: ElementId },
}

impl ResolveOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolveOutcome::Resolved(_))
    }

    /// The resolved tree, when there is one.
    pub fn tree(&self) -> Option<&Arc<CraftNode>> {
        match self {
            ResolveOutcome::Resolved(tree) => Some(tree),
            _ => None,
        }
    }

    /// Stable lowercase label, used by logs and machine-readable output.
    pub fn label(&self) -> &'static str {
        match self {
            ResolveOutcome::Resolved(_) => "resolved",
            ResolveOutcome::NameNotFound => "name_not_found",
            ResolveOutcome::NoPath { .. } => "no_path",
            ResolveOutcome::CyclicRecipe { .. } => "cyclic_recipe",
        }
    }
}

/// Timing and cache statistics for one resolution.
///
/// Populated on every outcome, including negative ones.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ResolveMetrics {
    /// Wall-clock build time in milliseconds.
    pub build_time_ms: f64,
    /// Precomputed depth of the target, when the name resolved.
    pub target_depth: Option<u32>,
    /// Distinct entities resolved into the memo cache.
    pub unique_nodes: usize,
}

impl ResolveMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_build_time_ms(mut self, ms: f64) -> Self {
        self.build_time_ms = ms;
        self
    }

    pub fn with_target_depth(mut self, depth: u32) -> Self {
        self.target_depth = Some(depth);
        self
    }

    pub fn with_unique_nodes(mut self, count: usize) -> Self {
        self.unique_nodes = count;
        self
    }
}

/// Everything one resolution produces.
#[derive(Debug, Clone)]
pub struct ResolveReport {
    pub outcome: ResolveOutcome,
    pub metrics: ResolveMetrics,
}
