use proptest::prelude::*;
use proptest::sample::Index;

use phylo_diagram::convert::{assign_directionality, TreeFactory};
use phylo_diagram::diagnostics::DiagnosticKind;
use phylo_diagram::geometry::Point2;
use phylo_diagram::graph::{DiagramGraph, GraphEdge, GraphNode};

/// A random tree on `n` graph nodes: node `i > 0` hangs off an earlier node.
fn random_tree() -> impl Strategy<Value = (Vec<usize>, Index)> {
    (2usize..40).prop_flat_map(|n| {
        (
            proptest::collection::vec(any::<Index>(), n - 1),
            any::<Index>(),
        )
            .prop_map(|(picks, root)| {
                let parents: Vec<usize> = picks
                    .iter()
                    .enumerate()
                    .map(|(i, pick)| pick.index(i + 1))
                    .collect();
                (parents, root)
            })
    })
}

/// Builds the graph and picks a root among nodes that become tree nodes.
fn build(parents: &[usize], root: &Index) -> DiagramGraph {
    let mut graph = DiagramGraph::new();
    let nodes: Vec<_> = (0..=parents.len())
        .map(|i| {
            graph.add_node(GraphNode::new(
                format!("p{}", i),
                Point2::new(i as f64, (i % 7) as f64),
            ))
        })
        .collect();
    for (i, &parent) in parents.iter().enumerate() {
        graph.add_edge(
            nodes[parent],
            nodes[i + 1],
            GraphEdge::new(format!("polyline.{}", i + 1), 1.0 + i as f64),
        );
    }
    let candidates: Vec<_> = nodes
        .iter()
        .copied()
        .filter(|&n| graph.degree(n) != 2)
        .collect();
    graph.set_root(candidates[root.index(candidates.len())]);
    graph
}

/// Hangs an extra leaf off every degree-2 node, so none is left.
fn add_leaves_at_bends(mut parents: Vec<usize>) -> Vec<usize> {
    let mut degree = vec![0usize; parents.len() + 1];
    for (i, &parent) in parents.iter().enumerate() {
        degree[parent] += 1;
        degree[i + 1] += 1;
    }
    for (node, &d) in degree.iter().enumerate() {
        if d == 2 {
            parents.push(node);
        }
    }
    parents
}

fn degree_count(graph: &DiagramGraph, degree: usize) -> usize {
    graph
        .node_indices()
        .filter(|&n| graph.degree(n) == degree)
        .count()
}

proptest! {
    #[test]
    fn taxa_match_degree_one_nodes((parents, root) in random_tree()) {
        let graph = build(&parents, &root);
        let mut factory = TreeFactory::new();
        let report = factory.convert(&graph);
        let document = factory.document().unwrap();
        let tree = document.tree(report.tree_index()).unwrap();

        prop_assert_eq!(document.taxa().len(), degree_count(&graph, 1));
        prop_assert_eq!(tree.leaves().count(), degree_count(&graph, 1));
        prop_assert_eq!(
            tree.num_nodes(),
            graph.node_count() - degree_count(&graph, 2)
        );
        prop_assert_eq!(tree.num_edges(), graph.edge_count());
    }

    #[test]
    fn orientation_is_a_rooted_tree((parents, root) in random_tree()) {
        let graph = build(&parents, &root);
        let mut factory = TreeFactory::new();
        let report = factory.convert(&graph);
        prop_assert_eq!(report.count(DiagnosticKind::UnresolvedRoot), 0);
        prop_assert_eq!(report.count(DiagnosticKind::Cycle), 0);

        let tree = &factory.document().unwrap().trees()[0];
        let root_index = tree.root_index().unwrap();
        prop_assert_eq!(tree.nodes().iter().filter(|n| n.is_root()).count(), 1);
        prop_assert!(tree.node(root_index).unwrap().parent().is_none());

        for edge in tree.edges() {
            prop_assert_eq!(edge.source().is_some(), edge.target().is_some());
            if let (Some(source), Some(target)) = (edge.source(), edge.target()) {
                prop_assert_eq!(tree.node(target).unwrap().parent(), Some(source));
            }
        }

        let mut seen = vec![0usize; tree.num_nodes()];
        for node in tree.nodes() {
            for &child in node.children() {
                seen[child] += 1;
            }
        }
        prop_assert_eq!(seen[root_index], 0);
        for (index, node) in tree.nodes().iter().enumerate() {
            let expected = if node.parent().is_some() { 1 } else { 0 };
            prop_assert_eq!(seen[index], expected);
        }
    }

    #[test]
    fn without_pass_through_nodes_everything_is_reached((parents, root) in random_tree()) {
        let graph = build(&add_leaves_at_bends(parents), &root);
        prop_assert_eq!(degree_count(&graph, 2), 0);

        let mut factory = TreeFactory::new();
        let report = factory.convert(&graph);
        prop_assert!(report.is_clean());

        let tree = &factory.document().unwrap().trees()[0];
        prop_assert!(tree.edges().iter().all(|e| e.is_oriented()));
        prop_assert!(tree
            .nodes()
            .iter()
            .all(|n| n.is_root() || n.parent().is_some()));
    }

    #[test]
    fn reassigning_directionality_changes_nothing((parents, root) in random_tree()) {
        let graph = build(&parents, &root);
        let mut factory = TreeFactory::new();
        factory.convert(&graph);

        let tree = &factory.document().unwrap().trees()[0];
        let mut again = tree.clone();
        assign_directionality(&mut again);
        prop_assert_eq!(&again, tree);
    }
}
