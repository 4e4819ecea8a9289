// Index Builder - Single-pass-per-concern index construction
//
// Turns the raw snapshot into the queryable RecipeIndex. Construction is
// total: malformed nodes and pairings are skipped, never fatal.

use ahash::AHashMap;
use tracing::debug;

use crate::features::recipe_index::domain::{Element, RecipeIndex};
use crate::features::snapshot::{CraftingDag, RelationKind};
use crate::shared::models::{intern, ElementId};

pub struct IndexBuilder;

impl IndexBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the recipe index in four scans.
    ///
    /// 1. Entity nodes -> metadata map (scan order recorded).
    /// 2. `RESULTS_IN` -> produces map; a pairing node with several
    ///    `RESULTS_IN` edges keeps only the last one scanned.
    /// 3. `PART_OF` -> ingredient lists in scan order, plus the order in
    ///    which pairing nodes were first seen.
    /// 4. Pairing nodes with exactly two ingredients and a produces entry
    ///    become recipes, walked in first-seen order so that duplicate
    ///    producers resolve deterministically (last write wins).
    pub fn build(&self, dag: &CraftingDag) -> RecipeIndex {
        let mut index = RecipeIndex::new();

        let mut skipped_nodes = 0usize;
        for node in &dag.nodes {
            if !node.is_element() {
                continue;
            }
            match (node.name(), node.depth()) {
                (Some(name), Some(depth)) => {
                    index.insert_element(Element {
                        id: node.id.clone(),
                        name: intern(name),
                        depth,
                    });
                }
                _ => {
                    skipped_nodes += 1;
                    debug!("build: entity node {} lacks usable name/depth, skipped", node.id);
                }
            }
        }

        let mut produces: AHashMap<ElementId, ElementId> = AHashMap::new();
        for rel in &dag.relationships {
            if rel.kind == RelationKind::ResultsIn {
                produces.insert(rel.start.clone(), rel.end.clone());
            }
        }

        let mut ingredients: AHashMap<ElementId, Vec<ElementId>> = AHashMap::new();
        let mut pairing_order: Vec<ElementId> = Vec::new();
        for rel in &dag.relationships {
            if rel.kind == RelationKind::PartOf {
                let parts = ingredients.entry(rel.end.clone()).or_insert_with(Vec::new);
                if parts.is_empty() {
                    pairing_order.push(rel.end.clone());
                }
                parts.push(rel.start.clone());
            }
        }

        let mut skipped_pairings = 0usize;
        for pairing_id in &pairing_order {
            let Some(parts) = ingredients.get(pairing_id) else {
                continue;
            };
            let Some(result) = produces.get(pairing_id) else {
                skipped_pairings += 1;
                continue;
            };
            match parts.as_slice() {
                [first, second] => {
                    index.insert_recipe(result.clone(), [first.clone(), second.clone()]);
                }
                _ => {
                    skipped_pairings += 1;
                }
            }
        }

        debug!(
            "build: {} elements, {} recipes ({} nodes skipped, {} pairings skipped)",
            index.element_count(),
            index.recipe_count(),
            skipped_nodes,
            skipped_pairings
        );
        index
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}
