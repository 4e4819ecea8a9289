//! Domain models for resolved crafting trees.

use std::sync::Arc;

use crate::shared::models::{ElementId, InternedString};

/// One node of a resolved crafting tree.
///
/// # Invariants
///
/// - `ingredients` is `None` exactly for basic (depth-0) entities.
/// - Within one resolution, repeated entities are clones of a single `Arc`
///   allocation; the tree is structurally a dag in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CraftNode {
    pub id: ElementId,
    pub name: InternedString,
    pub ingredients: Option<[Arc<CraftNode>; 2]>,
}

impl CraftNode {
    /// Leaf node for a basic entity.
    pub fn basic(id: ElementId, name: InternedString) -> Self {
        CraftNode {
            id,
            name,
            ingredients: None,
        }
    }

    /// Node combined from exactly two resolved ingredients.
    pub fn combined(
        id: ElementId,
        name: InternedString,
        ingredients: [Arc<CraftNode>; 2],
    ) -> Self {
        CraftNode {
            id,
            name,
            ingredients: Some(ingredients),
        }
    }

    pub fn is_basic(&self) -> bool {
        self.ingredients.is_none()
    }
}
