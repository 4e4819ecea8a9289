//! Recipe Index feature - Entity metadata and derived recipes
//!
//! One pass over the snapshot produces everything resolution needs:
//! - entity metadata (name, depth) in node-scan order
//! - result id -> exactly-two-ingredient recipes
//!
//! Name lookup lives here too, since it is a pure query over the metadata.

pub mod domain;
pub mod infrastructure;

pub use domain::{Element, IngredientPair, RecipeIndex, RecipeIndexStats};
pub use infrastructure::IndexBuilder;
