// Tree Builder - Memoized depth-first resolution
//
// Expands one target entity into its full combination tree. Every entity is
// resolved at most once per builder; repeats come back as shared Arc clones,
// so a diamond-shaped recipe graph costs linear work.

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use tracing::debug;

use crate::features::crafting::domain::{BuildFailure, CraftNode};
use crate::features::recipe_index::RecipeIndex;
use crate::shared::models::ElementId;

/// Builds the combination tree for one target.
///
/// The memo cache and the in-progress marker set are scoped to this
/// builder: one builder serves exactly one top-level resolution.
pub struct TreeBuilder<'a> {
    index: &'a RecipeIndex,
    cache: AHashMap<ElementId, Arc<CraftNode>>,
    in_progress: AHashSet<ElementId>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(index: &'a RecipeIndex) -> Self {
        TreeBuilder {
            index,
            cache: AHashMap::new(),
            in_progress: AHashSet::new(),
        }
    }

    /// Resolve `target` down to basic entities, depth-first.
    ///
    /// Per entity, in order: memo cache, metadata lookup, basic short-cut,
    /// recipe lookup, recursion into both ingredients (first fully, then
    /// second). A basic entity never consults the recipe map, even when a
    /// recipe for it exists. The first unresolvable entity aborts the whole
    /// build; no partial trees escape.
    pub fn build(&mut self, target: &ElementId) -> Result<Arc<CraftNode>, BuildFailure> {
        if let Some(hit) = self.cache.get(target) {
            return Ok(Arc::clone(hit));
        }

        let element = self
            .index
            .element(target)
            .ok_or_else(|| BuildFailure::NoPath(target.clone()))?;

        if element.is_basic() {
            let node = Arc::new(CraftNode::basic(element.id.clone(), element.name.clone()));
            self.cache.insert(target.clone(), Arc::clone(&node));
            return Ok(node);
        }

        let id = element.id.clone();
        let name = element.name.clone();
        let Some(pair) = self.index.recipe(target) else {
            debug!("build: no recipe for non-basic entity {}", target);
            return Err(BuildFailure::NoPath(target.clone()));
        };
        let [first_id, second_id] = pair.clone();

        // A target already on the resolution stack means the recipe graph
        // loops; bail out instead of recursing until the stack blows.
        if !self.in_progress.insert(target.clone()) {
            debug!("build: recipe cycle closed at {}", target);
            return Err(BuildFailure::Cycle(target.clone()));
        }
        let ingredients = self.build_pair(&first_id, &second_id);
        self.in_progress.remove(target);

        let node = Arc::new(CraftNode::combined(id, name, ingredients?));
        self.cache.insert(target.clone(), Arc::clone(&node));
        Ok(node)
    }

    fn build_pair(
        &mut self,
        first: &ElementId,
        second: &ElementId,
    ) -> Result<[Arc<CraftNode>; 2], BuildFailure> {
        let first = self.build(first)?;
        let second = self.build(second)?;
        Ok([first, second])
    }

    /// Distinct entities resolved so far (memo cache size).
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }
}
