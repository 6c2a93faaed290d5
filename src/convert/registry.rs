// Copyright 2024 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Lookup from graph nodes to the tree nodes created for them.
//!
//! Lookup by node id outlives a conversion and therefore lives on the tree
//! itself, see [`Tree::find_node`](crate::tree::Tree::find_node).

use std::collections::HashMap;

use petgraph::graph::NodeIndex as GraphNodeIndex;

use crate::tree::NodeIndex;

/// The tree owns its nodes; the registry only maps graph nodes to indices.
#[derive(Debug, Default)]
pub(crate) struct NodeRegistry {
    by_graph_node: HashMap<GraphNodeIndex, NodeIndex>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        NodeRegistry::default()
    }

    pub fn register(&mut self, graph_node: GraphNodeIndex, index: NodeIndex) {
        self.by_graph_node.insert(graph_node, index);
    }

    /// The tree node created for `graph_node`, if any.
    pub fn get(&self, graph_node: GraphNodeIndex) -> Option<NodeIndex> {
        self.by_graph_node.get(&graph_node).copied()
    }
}
