// Shared Domain Models
//
// Identifier types used across snapshot parsing, indexing, and resolution.
// Optimized for the access pattern of this crate: ids repeat heavily across
// relationship records and resolved trees, so they are interned once and
// cloned as cheap Arc handles afterwards.

use std::sync::Arc;

use serde::Serializer;

// ============================================================
// String Interning for Memory Efficiency
// ============================================================

/// Interned string for memory-efficient storage
pub type InternedString = Arc<str>;

/// Identifier of a snapshot node (entity or pairing node).
///
/// Integer ids from the wire format are normalized to their decimal string
/// form, so `7` and `"7"` name the same node.
pub type ElementId = InternedString;

/// Helper to create interned strings
#[inline]
pub fn intern(s: impl AsRef<str>) -> InternedString {
    Arc::from(s.as_ref())
}

// ============================================================
// Custom Serde for Arc<str>
// ============================================================

/// Serialize Arc<str> as a regular string
pub fn serialize_arc_str<S>(arc_str: &Arc<str>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(arc_str.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_preserves_content() {
        let id = intern("element-42");
        assert_eq!(id.as_ref(), "element-42");
    }

    #[test]
    fn test_interned_clones_share_allocation() {
        let id = intern("shared");
        let clone = Arc::clone(&id);
        assert!(Arc::ptr_eq(&id, &clone));
    }
}
