//! Wire-format types for the crafting dag snapshot.
//!
//! The snapshot is a JSON export of a labeled property graph: a `nodes`
//! array and a `relationships` array. Entity nodes carry the `Element`
//! label with `name`/`depth` properties; pairing nodes have no reserved
//! label and are recognized purely through their relationships.

use std::fmt;

use ahash::AHashMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::shared::models::{intern, serialize_arc_str, ElementId};

/// Label that marks an entity node.
pub const ELEMENT_LABEL: &str = "Element";

/// Relationship types the index builder understands.
///
/// Snapshots may contain additional relationship types; they deserialize
/// into [`RelationKind::Other`] and are skipped during indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    /// Pairing node -> the entity it produces
    #[serde(rename = "RESULTS_IN")]
    ResultsIn,
    /// Ingredient entity -> pairing node it participates in
    #[serde(rename = "PART_OF")]
    PartOf,
    /// Unrecognized relationship type
    #[serde(other)]
    Other,
}

/// One node record from the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DagNode {
    #[serde(
        serialize_with = "serialize_arc_str",
        deserialize_with = "deserialize_graph_id"
    )]
    pub id: ElementId,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub properties: AHashMap<String, Value>,
}

impl DagNode {
    /// Build an entity node with `name` and `depth` properties.
    pub fn element(id: impl AsRef<str>, name: &str, depth: u32) -> Self {
        let mut properties = AHashMap::new();
        properties.insert("name".to_string(), Value::from(name));
        properties.insert("depth".to_string(), Value::from(depth));
        DagNode {
            id: intern(id),
            labels: vec![ELEMENT_LABEL.to_string()],
            properties,
        }
    }

    /// Build a pairing node (no entity label, no properties).
    pub fn pairing(id: impl AsRef<str>) -> Self {
        DagNode {
            id: intern(id),
            labels: vec!["Combination".to_string()],
            properties: AHashMap::new(),
        }
    }

    /// True when the node is labeled as an entity.
    pub fn is_element(&self) -> bool {
        self.labels.iter().any(|label| label == ELEMENT_LABEL)
    }

    /// The `name` property, if present and a string.
    pub fn name(&self) -> Option<&str> {
        self.properties.get("name")?.as_str()
    }

    /// The `depth` property, if present and a non-negative integer.
    pub fn depth(&self) -> Option<u32> {
        let raw = self.properties.get("depth")?.as_u64()?;
        u32::try_from(raw).ok()
    }
}

/// One relationship record from the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DagRelation {
    #[serde(rename = "type")]
    pub kind: RelationKind,
    #[serde(
        serialize_with = "serialize_arc_str",
        deserialize_with = "deserialize_graph_id"
    )]
    pub start: ElementId,
    #[serde(
        serialize_with = "serialize_arc_str",
        deserialize_with = "deserialize_graph_id"
    )]
    pub end: ElementId,
}

impl DagRelation {
    /// Pairing node `start` produces entity `end`.
    pub fn results_in(start: impl AsRef<str>, end: impl AsRef<str>) -> Self {
        DagRelation {
            kind: RelationKind::ResultsIn,
            start: intern(start),
            end: intern(end),
        }
    }

    /// Entity `start` is an ingredient of pairing node `end`.
    pub fn part_of(start: impl AsRef<str>, end: impl AsRef<str>) -> Self {
        DagRelation {
            kind: RelationKind::PartOf,
            start: intern(start),
            end: intern(end),
        }
    }
}

/// A full crafting dag snapshot as emitted by the upstream generator.
///
/// Both arrays are required; a document missing either is malformed and
/// fails at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CraftingDag {
    pub nodes: Vec<DagNode>,
    pub relationships: Vec<DagRelation>,
}

/// Node ids appear as strings or integers in the wild; both normalize to
/// the interned decimal-string form.
fn deserialize_graph_id<'de, D>(deserializer: D) -> Result<ElementId, D::Error>
where
    D: Deserializer<'de>,
{
    struct GraphIdVisitor;

    impl serde::de::Visitor<'_> for GraphIdVisitor {
        type Value = ElementId;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or integer node id")
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<ElementId, E> {
            Ok(intern(v))
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<ElementId, E> {
            Ok(intern(v.to_string()))
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<ElementId, E> {
            Ok(intern(v.to_string()))
        }
    }

    deserializer.deserialize_any(GraphIdVisitor)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_integer_and_string_ids_normalize_identically() {
        let from_int: DagNode = serde_json::from_str(r#"{"id": 7, "labels": []}"#).unwrap();
        let from_str: DagNode = serde_json::from_str(r#"{"id": "7", "labels": []}"#).unwrap();
        assert_eq!(from_int.id, from_str.id);
    }

    #[test]
    fn test_unknown_relationship_type_deserializes_as_other() {
        let rel: DagRelation =
            serde_json::from_str(r#"{"type": "TAGGED_WITH", "start": 1, "end": 2}"#).unwrap();
        assert_eq!(rel.kind, RelationKind::Other);
    }

    #[test]
    fn test_known_relationship_types_round_trip() {
        let rel = DagRelation::results_in("pair-1", "element-1");
        let json = serde_json::to_string(&rel).unwrap();
        assert!(json.contains("RESULTS_IN"), "unexpected encoding: {json}");
        let back: DagRelation = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind, RelationKind::ResultsIn);
        assert_eq!(back.start, rel.start);
        assert_eq!(back.end, rel.end);
    }

    #[test]
    fn test_node_without_labels_or_properties_parses() {
        let node: DagNode = serde_json::from_str(r#"{"id": "bare"}"#).unwrap();
        assert!(!node.is_element());
        assert_eq!(node.name(), None);
        assert_eq!(node.depth(), None);
    }

    #[test]
    fn test_element_accessors() {
        let node = DagNode::element("e1", "Water", 0);
        assert!(node.is_element());
        assert_eq!(node.name(), Some("Water"));
        assert_eq!(node.depth(), Some(0));
    }

    #[test]
    fn test_negative_depth_is_rejected_by_accessor() {
        let node: DagNode = serde_json::from_str(
            r#"{"id": "e1", "labels": ["Element"], "properties": {"name": "X", "depth": -3}}"#,
        )
        .unwrap();
        assert_eq!(node.depth(), None);
    }

    #[test]
    fn test_document_missing_relationships_is_malformed() {
        let result: Result<CraftingDag, _> = serde_json::from_str(r#"{"nodes": []}"#);
        assert!(result.is_err());
    }
}
