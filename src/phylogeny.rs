// Copyright 2020 Franklin Delehelle
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! A phylogenetic tree is represented as a directed graph.
//! Each node is named by its taxon label or node label.
//! The edges are weighted by the phylogenetic distance, pointing from parent
//! to child.
//!
//! # Example
//!
//! ```rust
//! use phylo_diagram::convert::TreeFactory;
//! use phylo_diagram::geometry::Point2;
//! use phylo_diagram::graph::{DiagramGraph, GraphEdge, GraphNode};
//! use phylo_diagram::phylogeny::to_phylogeny;
//!
//! let mut graph = DiagramGraph::new();
//! let hub = graph.add_node(GraphNode::new("hub".to_owned(), Point2::new(0.0, 0.0)));
//! for i in 0..3 {
//!     let leaf = graph.add_node(GraphNode::new(format!("l{}", i), Point2::new(10.0, i as f64)));
//!     graph.add_edge(hub, leaf, GraphEdge::new(format!("e{}", i), 10.0));
//! }
//! graph.set_root(hub);
//!
//! let mut factory = TreeFactory::new();
//! let report = factory.convert(&graph);
//! let document = factory.get_or_create_document();
//! document.taxa_mut().set_label("otu1", "Luscinia");
//!
//! let tree = document.tree(report.tree_index()).unwrap();
//! let phylogeny = to_phylogeny(tree, document.taxa());
//! assert_eq!(phylogeny.node_count(), 4);
//! assert_eq!(phylogeny.edge_count(), 3);
//! assert!(phylogeny.node_indices().any(|i| phylogeny[i] == "Luscinia"));
//! ```

use petgraph::graph::Graph;

use crate::taxa::TaxaBlock;
use crate::tree::Tree;

pub type Name = String;
pub type Proximity = f32;

pub type Phylogeny = Graph<Name, Proximity>;

/// Builds the directed graph of an oriented tree.
///
/// Nodes keep the tree's node order. A leaf is named by the label of its
/// taxon, if it has one; all other nodes by their own label. Only oriented
/// edges are included.
pub fn to_phylogeny(tree: &Tree, taxa: &TaxaBlock) -> Phylogeny {
    let mut phylogeny = Phylogeny::with_capacity(tree.num_nodes(), tree.num_edges());
    let indices: Vec<_> = tree
        .nodes()
        .iter()
        .map(|node| {
            let name = node
                .otu()
                .and_then(|otu| taxa.get(otu))
                .and_then(|taxon| taxon.label())
                .unwrap_or_else(|| node.label());
            phylogeny.add_node(name.to_owned())
        })
        .collect();

    for edge in tree.edges() {
        if let (Some(source), Some(target)) = (edge.source(), edge.target()) {
            phylogeny.add_edge(indices[source], indices[target], edge.length() as Proximity);
        }
    }
    phylogeny
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::TreeFactory;
    use crate::geometry::Point2;
    use crate::graph::{DiagramGraph, GraphEdge, GraphNode};
    use petgraph::visit::EdgeRef;
    use petgraph::Direction;

    #[test]
    fn edges_point_from_parent_to_child() {
        // stem - hub - {a, b}, rooted at the stem
        let mut graph = DiagramGraph::new();
        let stem = graph.add_node(GraphNode::new("stem".to_owned(), Point2::new(0.0, 0.0)));
        let hub = graph.add_node(GraphNode::new("hub".to_owned(), Point2::new(5.0, 0.0)));
        let a = graph.add_node(GraphNode::new("a".to_owned(), Point2::new(10.0, 5.0)));
        let b = graph.add_node(GraphNode::new("b".to_owned(), Point2::new(10.0, -5.0)));
        graph.add_edge(hub, stem, GraphEdge::new("e0".to_owned(), 5.0));
        graph.add_edge(hub, a, GraphEdge::new("e1".to_owned(), 7.5));
        graph.add_edge(b, hub, GraphEdge::new("e2".to_owned(), 7.5));
        graph.set_root(stem);

        let mut factory = TreeFactory::new();
        let report = factory.convert(&graph);
        let document = factory.document().unwrap();
        let tree = document.tree(report.tree_index()).unwrap();
        let phylogeny = to_phylogeny(tree, document.taxa());

        let root = petgraph::graph::NodeIndex::new(0);
        assert_eq!(phylogeny[root], "NT1.1");
        assert_eq!(
            phylogeny.edges_directed(root, Direction::Incoming).count(),
            0
        );
        let hub = phylogeny
            .edges_directed(root, Direction::Outgoing)
            .map(|e| e.target())
            .next()
            .unwrap();
        assert_eq!(phylogeny[hub], "NT1.2");
        let mut lengths: Vec<_> = phylogeny
            .edges_directed(hub, Direction::Outgoing)
            .map(|e| *e.weight())
            .collect();
        lengths.sort_by(|x, y| x.partial_cmp(y).unwrap());
        assert_eq!(lengths, vec![7.5, 7.5]);
    }

    #[test]
    fn unoriented_edges_are_left_out() {
        let mut graph = DiagramGraph::new();
        let a = graph.add_node(GraphNode::new("a".to_owned(), Point2::new(0.0, 0.0)));
        let b = graph.add_node(GraphNode::new("b".to_owned(), Point2::new(1.0, 0.0)));
        graph.add_edge(a, b, GraphEdge::new("e0".to_owned(), 1.0));

        let mut factory = TreeFactory::new();
        factory.convert(&graph);
        let document = factory.document().unwrap();
        let phylogeny = to_phylogeny(&document.trees()[0], document.taxa());
        assert_eq!(phylogeny.node_count(), 2);
        assert_eq!(phylogeny.edge_count(), 0);
    }
}
