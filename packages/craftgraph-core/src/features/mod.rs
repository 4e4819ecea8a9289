//! Features - Vertical slices of the resolution pipeline
//!
//! Each feature owns its domain models and infrastructure:
//! - snapshot     : wire format + loading from disk
//! - recipe_index : entity metadata and derived two-ingredient recipes
//! - crafting     : memoized depth-first target resolution
//! - render       : text / JSON tree output

pub mod crafting;
pub mod recipe_index;
pub mod render;
pub mod snapshot;
