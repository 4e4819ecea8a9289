//! Property tests for resolution over randomly generated layered dags.
//!
//! Dags are generated bottom-up (every recipe draws ingredients from
//! strictly earlier elements), so every target is resolvable and acyclic by
//! construction. The properties pin down memoization, determinism, and
//! rendering structure.

use std::collections::HashSet;

use proptest::prelude::*;

use craftgraph_core::{
    render_text, resolve_target, CraftNode, CraftingDag, DagNode, DagRelation, ElementId,
    IndexBuilder, RecipeIndex,
};

/// Ingredient picks per crafted element: element `i` combines two elements
/// chosen among the `basics + i` that precede it (picks are reduced modulo
/// the number of available predecessors).
fn layered_dag() -> impl Strategy<Value = CraftingDag> {
    (
        2usize..6,
        proptest::collection::vec((any::<usize>(), any::<usize>()), 1..24),
    )
        .prop_map(|(basics, raw_picks)| {
            let pairs: Vec<(usize, usize)> = raw_picks
                .iter()
                .enumerate()
                .map(|(i, (first, second))| {
                    let upper = basics + i;
                    (first % upper, second % upper)
                })
                .collect();
            build_dag(basics, &pairs)
        })
}

/// Shared vocabulary between the generator and the assertions.
fn element_id(index: usize) -> String {
    format!("e{index}")
}

fn element_name(index: usize) -> String {
    format!("Item {index}")
}

fn build_dag(basics: usize, pairs: &[(usize, usize)]) -> CraftingDag {
    let mut nodes = Vec::new();
    let mut relationships = Vec::new();
    let mut depths = Vec::new();

    for i in 0..basics {
        nodes.push(DagNode::element(element_id(i), &element_name(i), 0));
        depths.push(0u32);
    }

    for (offset, (first, second)) in pairs.iter().enumerate() {
        let index = basics + offset;
        let depth = depths[*first].max(depths[*second]) + 1;
        depths.push(depth);

        let pairing = format!("p{index}");
        nodes.push(DagNode::element(element_id(index), &element_name(index), depth));
        nodes.push(DagNode::pairing(&pairing));
        relationships.push(DagRelation::part_of(element_id(*first), &pairing));
        relationships.push(DagRelation::part_of(element_id(*second), &pairing));
        relationships.push(DagRelation::results_in(&pairing, element_id(index)));
    }

    CraftingDag { nodes, relationships }
}

fn last_element_name(dag: &CraftingDag) -> String {
    let elements = dag.nodes.iter().filter(|n| n.is_element()).count();
    element_name(elements - 1)
}

fn collect_unique_ids(node: &CraftNode, seen: &mut HashSet<ElementId>) {
    if seen.insert(node.id.clone()) {
        if let Some([first, second]) = &node.ingredients {
            collect_unique_ids(first, seen);
            collect_unique_ids(second, seen);
        }
    }
}

fn expanded_node_count(node: &CraftNode) -> usize {
    match &node.ingredients {
        Some([first, second]) => 1 + expanded_node_count(first) + expanded_node_count(second),
        None => 1,
    }
}

fn assert_leaves_are_basics(node: &CraftNode, index: &RecipeIndex) {
    let depth = index.element(&node.id).expect("tree ids come from the index").depth;
    match &node.ingredients {
        None => assert_eq!(depth, 0, "leaf {} must be depth 0", node.id),
        Some([first, second]) => {
            assert!(depth > 0, "combined node {} must not be basic", node.id);
            assert_leaves_are_basics(first, index);
            assert_leaves_are_basics(second, index);
        }
    }
}

proptest! {
    #[test]
    fn prop_every_layered_target_resolves(dag in layered_dag()) {
        let index = IndexBuilder::new().build(&dag);
        let report = resolve_target(&index, &last_element_name(&dag));

        let tree = report.outcome.tree().expect("layered dags always resolve");
        let mut seen = HashSet::new();
        collect_unique_ids(tree, &mut seen);
        prop_assert_eq!(seen.len(), report.metrics.unique_nodes);
    }

    #[test]
    fn prop_resolution_is_idempotent(dag in layered_dag()) {
        let index = IndexBuilder::new().build(&dag);
        let target = last_element_name(&dag);

        let first = resolve_target(&index, &target);
        let second = resolve_target(&index, &target);

        prop_assert_eq!(first.outcome.tree(), second.outcome.tree());
        prop_assert_eq!(first.metrics.unique_nodes, second.metrics.unique_nodes);
    }

    #[test]
    fn prop_leaves_are_exactly_the_basics(dag in layered_dag()) {
        let index = IndexBuilder::new().build(&dag);
        let report = resolve_target(&index, &last_element_name(&dag));

        let tree = report.outcome.tree().expect("layered dags always resolve");
        assert_leaves_are_basics(tree, &index);
    }

    #[test]
    fn prop_text_rendering_is_one_line_per_expanded_node(dag in layered_dag()) {
        let index = IndexBuilder::new().build(&dag);
        let report = resolve_target(&index, &last_element_name(&dag));

        let tree = report.outcome.tree().expect("layered dags always resolve");
        let rendered = render_text(tree);

        prop_assert_eq!(rendered.lines().count(), expanded_node_count(tree));
        for line in rendered.lines() {
            let is_leaf_line = line.ends_with(" (BASIC)");
            let is_root_line = !line.contains("└─");
            if is_root_line && tree.ingredients.is_some() {
                prop_assert!(!is_leaf_line, "combined root must not be marked basic");
            }
        }
    }

    #[test]
    fn prop_index_construction_is_total(
        nodes in proptest::collection::vec(any::<u16>(), 0..40),
        rels in proptest::collection::vec((any::<u16>(), any::<u16>(), 0u8..3), 0..60),
    ) {
        // Arbitrary junk wiring must never panic the builder.
        let dag = CraftingDag {
            nodes: nodes
                .iter()
                .map(|n| DagNode::element(n.to_string(), &format!("N{n}"), u32::from(*n % 5)))
                .collect(),
            relationships: rels
                .iter()
                .map(|(start, end, kind)| match kind {
                    0 => DagRelation::results_in(start.to_string(), end.to_string()),
                    1 => DagRelation::part_of(start.to_string(), end.to_string()),
                    _ => DagRelation {
                        kind: craftgraph_core::RelationKind::Other,
                        start: craftgraph_core::intern(start.to_string()),
                        end: craftgraph_core::intern(end.to_string()),
                    },
                })
                .collect(),
        };

        let index = IndexBuilder::new().build(&dag);
        // Resolution over junk may fail but must always terminate cleanly.
        let _ = resolve_target(&index, "N0");
    }
}
