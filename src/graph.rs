// Copyright 2024 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! The undirected geometric graph traced from a tree diagram.
//!
//! Nodes are line ends and junctions found in a skeletonized image, edges are
//! the traced segments between them. The graph is produced elsewhere (image
//! processing is not part of this crate) and consumed as finished input by
//! [`TreeFactory`](crate::convert::TreeFactory).
//!
//! # Example
//!
//! ```rust
//! use phylo_diagram::geometry::Point2;
//! use phylo_diagram::graph::{DiagramGraph, GraphEdge, GraphNode};
//!
//! let mut graph = DiagramGraph::new();
//! let a = graph.add_node(GraphNode::new("a".to_owned(), Point2::new(0.0, 0.0)));
//! let b = graph.add_node(GraphNode::new("b".to_owned(), Point2::new(5.0, 0.0)));
//! graph.add_edge(a, b, GraphEdge::new("polyline.1".to_owned(), 5.0));
//! assert_eq!(graph.degree(a), 1);
//! ```

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Point2;

/// A line end or junction of the traced diagram.
#[derive(new, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GraphNode {
    id: String,
    xy: Point2,
}

impl GraphNode {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn xy(&self) -> Point2 {
        self.xy
    }
}

/// A traced segment between two [`GraphNode`]s.
#[derive(new, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GraphEdge {
    id: String,
    length: f64,
}

impl GraphEdge {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn length(&self) -> f64 {
        self.length
    }
}

/// Undirected geometric graph with an optional designated root node.
///
/// Node and edge order is insertion order; conversion visits them in that
/// order.
#[derive(Debug, Clone, Default)]
pub struct DiagramGraph {
    graph: UnGraph<GraphNode, GraphEdge>,
    root: Option<NodeIndex>,
}

impl DiagramGraph {
    pub fn new() -> Self {
        DiagramGraph {
            graph: UnGraph::new_undirected(),
            root: None,
        }
    }

    pub fn add_node(&mut self, node: GraphNode) -> NodeIndex {
        self.graph.add_node(node)
    }

    /// Adds an undirected segment between `a` and `b`.
    ///
    /// # Panics
    /// Panics if either index is not a node of this graph.
    pub fn add_edge(&mut self, a: NodeIndex, b: NodeIndex, edge: GraphEdge) -> EdgeIndex {
        self.graph.add_edge(a, b, edge)
    }

    /// Marks `node` as the root of the drawn tree, e.g. the end of the root stem.
    pub fn set_root(&mut self, node: NodeIndex) {
        self.root = Some(node);
    }

    pub fn root(&self) -> Option<NodeIndex> {
        self.root
    }

    pub fn root_node(&self) -> Option<&GraphNode> {
        self.root.and_then(|index| self.graph.node_weight(index))
    }

    pub fn node(&self, index: NodeIndex) -> Option<&GraphNode> {
        self.graph.node_weight(index)
    }

    pub fn edge(&self, index: EdgeIndex) -> Option<&GraphEdge> {
        self.graph.edge_weight(index)
    }

    /// Both ends of an edge, in the order given to [`add_edge`](Self::add_edge).
    pub fn endpoints(&self, index: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(index)
    }

    /// Node indices in insertion order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        self.graph.node_indices()
    }

    /// Edge indices in insertion order.
    pub fn edge_indices(&self) -> impl Iterator<Item = EdgeIndex> {
        self.graph.edge_indices()
    }

    /// Edges incident to `node`, in insertion order.
    pub fn incident_edges(&self, node: NodeIndex) -> Vec<EdgeIndex> {
        let mut edges: Vec<EdgeIndex> = self.graph.edges(node).map(|e| e.id()).collect();
        edges.sort();
        edges.dedup();
        edges
    }

    /// Number of edges incident to `node`.
    pub fn degree(&self, node: NodeIndex) -> usize {
        self.incident_edges(node).len()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The underlying petgraph graph.
    pub fn graph(&self) -> &UnGraph<GraphNode, GraphEdge> {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, x: f64, y: f64) -> GraphNode {
        GraphNode::new(id.to_owned(), Point2::new(x, y))
    }

    #[test]
    fn degrees_and_incidence_order() {
        let mut g = DiagramGraph::new();
        let hub = g.add_node(node("hub", 0.0, 0.0));
        let a = g.add_node(node("a", 1.0, 0.0));
        let b = g.add_node(node("b", 0.0, 1.0));
        let c = g.add_node(node("c", -1.0, 0.0));
        let e0 = g.add_edge(hub, a, GraphEdge::new("e0".to_owned(), 1.0));
        let e1 = g.add_edge(b, hub, GraphEdge::new("e1".to_owned(), 1.0));
        let e2 = g.add_edge(hub, c, GraphEdge::new("e2".to_owned(), 1.0));

        assert_eq!(g.degree(hub), 3);
        assert_eq!(g.degree(a), 1);
        assert_eq!(g.incident_edges(hub), vec![e0, e1, e2]);
        assert_eq!(g.endpoints(e1), Some((b, hub)));
        assert_eq!(g.edge(e2).unwrap().id(), "e2");
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn isolated_node_has_degree_zero() {
        let mut g = DiagramGraph::new();
        let lonely = g.add_node(node("lonely", 3.0, 3.0));
        assert_eq!(g.degree(lonely), 0);
    }

    #[test]
    fn root_node() {
        let mut g = DiagramGraph::new();
        let a = g.add_node(node("a", 1.0, 2.0));
        assert!(g.root_node().is_none());
        g.set_root(a);
        assert_eq!(g.root(), Some(a));
        assert_eq!(g.root_node().unwrap().xy(), Point2::new(1.0, 2.0));
    }
}
