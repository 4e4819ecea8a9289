//! Infrastructure - Tree construction
//!
//! - Tree Builder: memoized depth-first expansion of one target

pub mod tree_builder;

pub use tree_builder::TreeBuilder;
