// Copyright 2024 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Classification of graph nodes by their degree.

use strum_macros::{AsRefStr, Display};
use tracing::trace;

use crate::convert::registry::NodeRegistry;
use crate::convert::root::RootSelector;
use crate::diagnostics::Diagnostic;
use crate::graph::DiagramGraph;
use crate::taxa::TaxaBlock;
use crate::tree::{Tree, TreeNode};

/// What a graph node becomes in the tree.
///
/// | degree | role |
/// |---|---|
/// | 0 | `Isolated`, dropped |
/// | 1 | `Leaf`, tree node with a new taxon |
/// | 2 | `PassThrough`, dropped (a bend or crossing in the drawing) |
/// | 3+ | `Branch`, tree node without taxon |
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
pub enum NodeRole {
    Isolated,
    Leaf,
    PassThrough,
    Branch,
}

impl NodeRole {
    pub fn from_degree(degree: usize) -> Self {
        match degree {
            0 => NodeRole::Isolated,
            1 => NodeRole::Leaf,
            2 => NodeRole::PassThrough,
            _ => NodeRole::Branch,
        }
    }

    /// Whether a node of this role becomes a tree node.
    pub fn creates_node(&self) -> bool {
        match self {
            NodeRole::Leaf | NodeRole::Branch => true,
            NodeRole::Isolated | NodeRole::PassThrough => false,
        }
    }
}

/// Creates tree nodes for all leaf and branch nodes of `graph`, in graph
/// order, registers them, and offers each to `root`.
pub(crate) fn add_nodes(
    graph: &DiagramGraph,
    node_prefix: &str,
    tree: &mut Tree,
    taxa: &mut TaxaBlock,
    registry: &mut NodeRegistry,
    root: &RootSelector,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for graph_index in graph.node_indices() {
        let graph_node = match graph.node(graph_index) {
            Some(node) => node,
            None => continue,
        };
        let degree = graph.degree(graph_index);
        let role = NodeRole::from_degree(degree);
        if !role.creates_node() {
            trace!(node = graph_node.id(), degree, %role, "skipping graph node");
            continue;
        }

        let otu = if role == NodeRole::Leaf {
            Some(taxa.create())
        } else {
            None
        };
        let id = format!("{}{}.{}", node_prefix, tree.id(), tree.num_nodes() + 1);
        trace!(node = graph_node.id(), degree, %role, tree_node = %id, "creating tree node");
        let index = tree.push_node(TreeNode::new(id, graph_node.xy(), otu));
        registry.register(graph_index, index);
        root.offer(tree, index, diagnostics);
    }
}
