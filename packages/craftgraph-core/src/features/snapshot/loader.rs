//! Snapshot loading from disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::{CraftGraphError, Result};

use super::types::CraftingDag;

/// Read and parse a crafting dag snapshot.
///
/// Every failure mode (missing file, unreadable file, malformed JSON) maps
/// to [`CraftGraphError::DataUnavailable`]: the snapshot comes from an
/// upstream generator and this crate never repairs or regenerates it.
pub fn load_dag(path: &Path) -> Result<CraftingDag> {
    let content = fs::read_to_string(path)
        .map_err(|e| CraftGraphError::unavailable(format!("{}: {}", path.display(), e)))?;
    let dag: CraftingDag = serde_json::from_str(&content)
        .map_err(|e| CraftGraphError::unavailable(format!("{}: {}", path.display(), e)))?;
    debug!(
        "load_dag: {} nodes, {} relationships from {}",
        dag.nodes.len(),
        dag.relationships.len(),
        path.display()
    );
    Ok(dag)
}
