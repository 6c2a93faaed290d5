// Copyright 2024 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! A rooted phylogenetic tree converted from a diagram graph.
//!
//! The [`Tree`] owns all of its nodes and edges in two vectors (arena
//! pattern). Every cross-reference, i.e. parent, children, edge ends,
//! edge source and target, and incidence lists, is an index into these
//! vectors, so the structure has no ownership cycles and can be cloned
//! freely.
//!
//! Edges are created undirected. After directionality has been assigned,
//! every edge reachable from the root has `source` set to the parent side
//! and `target` set to the child side; edges of unreachable parts stay
//! unoriented.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Point2;

/// Index of a node in [`Tree::nodes`].
pub type NodeIndex = usize;

/// Index of an edge in [`Tree::edges`].
pub type EdgeIndex = usize;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TreeNode {
    pub(crate) id: String,
    pub(crate) label: String,
    pub(crate) xy: Point2,
    pub(crate) otu: Option<String>,
    pub(crate) edges: Vec<EdgeIndex>,
    pub(crate) parent: Option<NodeIndex>,
    pub(crate) children: Vec<NodeIndex>,
    pub(crate) root: bool,
}

impl TreeNode {
    /// Creates a node whose label is its id.
    pub(crate) fn new(id: String, xy: Point2, otu: Option<String>) -> Self {
        TreeNode {
            label: id.clone(),
            id,
            xy,
            otu,
            edges: Vec::new(),
            parent: None,
            children: Vec::new(),
            root: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: &str) {
        self.label = label.to_owned();
    }

    pub fn xy(&self) -> Point2 {
        self.xy
    }

    /// Id of the taxon of this node; present exactly for leaves.
    pub fn otu(&self) -> Option<&str> {
        self.otu.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.otu.is_some()
    }

    pub fn is_root(&self) -> bool {
        self.root
    }

    /// Incident edges, in the order they were attached.
    pub fn edges(&self) -> &[EdgeIndex] {
        &self.edges
    }

    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TreeEdge {
    pub(crate) id: String,
    pub(crate) ends: [Option<NodeIndex>; 2],
    pub(crate) source: Option<NodeIndex>,
    pub(crate) target: Option<NodeIndex>,
    pub(crate) length: f64,
}

impl TreeEdge {
    pub(crate) fn new(id: String, ends: [Option<NodeIndex>; 2], length: f64) -> Self {
        TreeEdge {
            id,
            ends,
            source: None,
            target: None,
            length,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Edges are labelled with their id.
    pub fn label(&self) -> &str {
        &self.id
    }

    /// Both ends; `None` where the graph node produced no tree node.
    pub fn ends(&self) -> [Option<NodeIndex>; 2] {
        self.ends
    }

    pub fn source(&self) -> Option<NodeIndex> {
        self.source
    }

    pub fn target(&self) -> Option<NodeIndex> {
        self.target
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn is_oriented(&self) -> bool {
        self.source.is_some()
    }

    /// The end opposite to `node`, or `None` if `node` is not an end of
    /// this edge or the opposite end is missing.
    pub fn other_end(&self, node: NodeIndex) -> Option<NodeIndex> {
        match self.ends {
            [Some(a), b] if a == node => b,
            [a, Some(b)] if b == node => a,
            _ => None,
        }
    }
}

/// A tree of a [`Document`](crate::document::Document).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tree {
    id: String,
    pub(crate) nodes: Vec<TreeNode>,
    pub(crate) edges: Vec<TreeEdge>,
    pub(crate) root: Option<NodeIndex>,
}

impl Tree {
    pub fn new(id: &str) -> Self {
        Tree {
            id: id.to_owned(),
            nodes: Vec::new(),
            edges: Vec::new(),
            root: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Nodes in creation order.
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Edges in creation order.
    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }

    pub fn node(&self, index: NodeIndex) -> Option<&TreeNode> {
        self.nodes.get(index)
    }

    pub fn node_mut(&mut self, index: NodeIndex) -> Option<&mut TreeNode> {
        self.nodes.get_mut(index)
    }

    pub fn edge(&self, index: EdgeIndex) -> Option<&TreeEdge> {
        self.edges.get(index)
    }

    /// Index of the root, if one was resolved.
    pub fn root_index(&self) -> Option<NodeIndex> {
        self.root
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.and_then(|index| self.nodes.get(index))
    }

    /// Looks up a node by id.
    pub fn find_node(&self, id: &str) -> Option<NodeIndex> {
        self.nodes.iter().position(|node| node.id == id)
    }

    /// Looks up an edge by id.
    pub fn find_edge(&self, id: &str) -> Option<EdgeIndex> {
        self.edges.iter().position(|edge| edge.id == id)
    }

    pub fn leaves(&self) -> impl Iterator<Item = &TreeNode> + '_ {
        self.nodes.iter().filter(|node| node.is_leaf())
    }

    /// Id of the source node of an edge, once oriented.
    pub fn source_id(&self, edge: EdgeIndex) -> Option<&str> {
        self.edges
            .get(edge)
            .and_then(|e| e.source)
            .and_then(|n| self.nodes.get(n))
            .map(|n| n.id())
    }

    /// Id of the target node of an edge, once oriented.
    pub fn target_id(&self, edge: EdgeIndex) -> Option<&str> {
        self.edges
            .get(edge)
            .and_then(|e| e.target)
            .and_then(|n| self.nodes.get(n))
            .map(|n| n.id())
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn push_node(&mut self, node: TreeNode) -> NodeIndex {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub(crate) fn push_edge(&mut self, edge: TreeEdge) -> EdgeIndex {
        self.edges.push(edge);
        self.edges.len() - 1
    }

    /// Flags `index` as root. Returns false, changing nothing, if a root is
    /// already set or the index is invalid.
    pub(crate) fn set_root(&mut self, index: NodeIndex) -> bool {
        if self.root.is_some() {
            return false;
        }
        match self.nodes.get_mut(index) {
            Some(node) => {
                node.root = true;
                self.root = Some(index);
                true
            }
            None => false,
        }
    }
}
