//! Domain models for the recipe index.
//!
//! Pure queryable state, no snapshot parsing here.

use std::collections::hash_map::Entry;

use ahash::AHashMap;
use serde::Serialize;

use crate::shared::models::{intern, ElementId, InternedString};

/// Result id -> its exactly-two ingredient ids, in pairing order.
pub type IngredientPair = [ElementId; 2];

/// Metadata for one entity node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub name: InternedString,
    /// Minimum combination steps from basic entities, precomputed upstream
    /// and trusted as-is.
    pub depth: u32,
}

impl Element {
    pub fn new(id: impl AsRef<str>, name: impl AsRef<str>, depth: u32) -> Self {
        Element {
            id: intern(id),
            name: intern(name),
            depth,
        }
    }

    /// Basic entities are leaves by definition.
    pub fn is_basic(&self) -> bool {
        self.depth == 0
    }
}

/// Aggregate counts over one index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecipeIndexStats {
    pub total_elements: usize,
    pub basic_elements: usize,
    pub craftable_results: usize,
    pub max_depth: u32,
}

/// Queryable index over one snapshot.
///
/// # Invariants
///
/// - Every recipe has exactly two ingredients (enforced by `IngredientPair`).
/// - `element_order` lists each known id exactly once, in node-scan order;
///   re-inserting an id replaces the element but keeps its position.
/// - Lookups never mutate; the index is immutable once built.
#[derive(Debug, Clone, Default)]
pub struct RecipeIndex {
    elements: AHashMap<ElementId, Element>,
    element_order: Vec<ElementId>,
    recipes: AHashMap<ElementId, IngredientPair>,
}

impl RecipeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register entity metadata. Later writes for the same id win, without
    /// changing the id's scan position.
    pub fn insert_element(&mut self, element: Element) {
        match self.elements.entry(element.id.clone()) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(element);
            }
            Entry::Vacant(vacant) => {
                self.element_order.push(element.id.clone());
                vacant.insert(element);
            }
        }
    }

    /// Register the recipe producing `result`. Later writes win.
    pub fn insert_recipe(&mut self, result: ElementId, ingredients: IngredientPair) {
        self.recipes.insert(result, ingredients);
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn recipe(&self, id: &str) -> Option<&IngredientPair> {
        self.recipes.get(id)
    }

    /// First entity whose name matches case-insensitively, in scan order.
    ///
    /// Names are not unique across a snapshot; callers always get the
    /// earliest match and must not assume there is only one.
    pub fn find_by_name(&self, name: &str) -> Option<&Element> {
        let needle = name.to_lowercase();
        self.element_order.iter().find_map(|id| {
            let element = self.elements.get(id)?;
            if element.name.to_lowercase() == needle {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Elements in node-scan order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.element_order.iter().filter_map(|id| self.elements.get(id))
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn stats(&self) -> RecipeIndexStats {
        let basic_elements = self.elements.values().filter(|e| e.is_basic()).count();
        let max_depth = self.elements.values().map(|e| e.depth).max().unwrap_or(0);
        RecipeIndexStats {
            total_elements: self.elements.len(),
            basic_elements,
            craftable_results: self.recipes.len(),
            max_depth,
        }
    }
}
