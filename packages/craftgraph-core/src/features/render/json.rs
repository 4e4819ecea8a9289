//! JSON rendering of resolved trees.

use serde_json::{json, Value};

use crate::features::crafting::domain::CraftNode;

/// Convert a resolved tree into a JSON value.
///
/// Shared subtrees are written out in full at every occurrence; the output
/// is a plain tree even when nodes share memory.
pub fn render_json(tree: &CraftNode) -> Value {
    let ingredients: Vec<Value> = tree
        .ingredients
        .as_ref()
        .map(|pair| pair.iter().map(|node| render_json(node)).collect())
        .unwrap_or_default();

    json!({
        "id": tree.id.as_ref(),
        "name": tree.name.as_ref(),
        "is_basic": tree.is_basic(),
        "ingredients": ingredients,
    })
}
