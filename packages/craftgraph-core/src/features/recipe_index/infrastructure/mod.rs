//! Infrastructure - Index construction from raw snapshots

pub mod index_builder;

pub use index_builder::IndexBuilder;
