/*
 * Craftgraph Core - Crafting-path resolution over a precomputed dag
 *
 * Feature-First Hexagonal Architecture:
 * - shared/    : Common models (interned ids)
 * - features/  : Vertical slices (snapshot -> recipe_index -> crafting -> render)
 *
 * Pipeline:
 * - load the JSON snapshot -> build the recipe index -> resolve a target
 *   name -> render the combination tree (text or JSON)
 *
 * The snapshot is produced by an upstream generator and treated as
 * read-only input; this crate never validates or repairs the whole graph.
 */

// Shared identifier types
pub mod shared;

// Vertical feature slices
pub mod features;

// Unified error handling
pub mod errors;

// Re-exports: the whole query path in one import
pub use errors::{CraftGraphError, Result};
pub use features::crafting::{
    resolve_target, CraftNode, ResolveMetrics, ResolveOutcome, ResolveReport, ResolveUseCase,
    ResolveUseCaseImpl, TreeBuilder,
};
pub use features::recipe_index::{
    Element, IndexBuilder, IngredientPair, RecipeIndex, RecipeIndexStats,
};
pub use features::render::{render_json, render_text};
pub use features::snapshot::{load_dag, CraftingDag, DagNode, DagRelation, RelationKind};
pub use shared::models::{intern, ElementId, InternedString};

use std::path::Path;

/// Load a snapshot, build its index, and resolve one target name.
///
/// The only error is an unavailable snapshot; every resolution result,
/// positive or negative, comes back inside the report.
pub fn resolve_from_path(path: &Path, target_name: &str) -> Result<ResolveReport> {
    let dag = load_dag(path)?;
    let index = IndexBuilder::new().build(&dag);
    Ok(resolve_target(&index, target_name))
}
