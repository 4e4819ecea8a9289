//! Snapshot feature - Wire format and loading
//!
//! Deserializes the JSON snapshot produced by the upstream dag generator.
//! Nothing here interprets graph semantics; that is the index builder's job.

pub mod loader;
pub mod types;

pub use loader::load_dag;
pub use types::{CraftingDag, DagNode, DagRelation, RelationKind, ELEMENT_LABEL};
