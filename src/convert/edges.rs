// Copyright 2024 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Creation of undirected tree edges from graph edges.

use tracing::debug;

use crate::convert::registry::NodeRegistry;
use crate::diagnostics::Diagnostic;
use crate::graph::DiagramGraph;
use crate::tree::{EdgeIndex, Tree, TreeEdge};

/// Creates one tree edge per graph edge, in graph order.
///
/// Ends whose graph node produced no tree node (pass-through or isolated
/// nodes) are left empty and reported.
pub(crate) fn add_edges(
    graph: &DiagramGraph,
    registry: &NodeRegistry,
    tree: &mut Tree,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<EdgeIndex> {
    let mut created = Vec::with_capacity(graph.edge_count());
    for graph_index in graph.edge_indices() {
        let (graph_edge, (a, b)) = match (graph.edge(graph_index), graph.endpoints(graph_index)) {
            (Some(edge), Some(ends)) => (edge, ends),
            _ => continue,
        };

        let mut ends = [None; 2];
        for (end, graph_node) in ends.iter_mut().zip([a, b].iter()) {
            *end = registry.get(*graph_node);
            if end.is_none() {
                let diagnostic = Diagnostic::DanglingEndpoint {
                    edge: graph_edge.id().to_owned(),
                    graph_node: graph
                        .node(*graph_node)
                        .map_or_else(|| graph_node.index().to_string(), |n| n.id().to_owned()),
                };
                debug!("{}", diagnostic);
                diagnostics.push(diagnostic);
            }
        }

        created.push(tree.push_edge(TreeEdge::new(
            graph_edge.id().to_owned(),
            ends,
            graph_edge.length(),
        )));
    }
    created
}

/// Appends each edge to the incidence lists of its present ends.
pub(crate) fn attach_edges(tree: &mut Tree, edges: &[EdgeIndex]) {
    for &edge in edges {
        let ends = match tree.edge(edge) {
            Some(e) => e.ends(),
            None => continue,
        };
        let [a, b] = ends;
        for end in a.iter().chain(b.iter().filter(|&&b| Some(b) != a)) {
            if let Some(node) = tree.node_mut(*end) {
                node.edges.push(edge);
            }
        }
    }
}
