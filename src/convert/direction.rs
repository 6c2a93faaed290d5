// Copyright 2024 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Orientation of tree edges away from the root.
//!
//! A depth-first walk starts at the root. When a node is expanded, each of
//! its incident edges is handled in incidence order:
//!
//! * an edge that is already oriented was discovered from its other end; if
//!   it points at the current node, that other end is the parent. It is not
//!   walked again.
//! * an unoriented edge is oriented from the current node to its other end,
//!   which becomes a child and is expanded before the next edge is handled.
//!
//! The walk uses an explicit stack, so deep trees cannot overflow the call
//! stack, and a visited set, so an edge closing a cycle is detected and left
//! unoriented instead of being walked forever.

use tracing::debug;

use crate::diagnostics::Diagnostic;
use crate::tree::{NodeIndex, Tree};

/// Orients every edge reachable from the root of `tree` and fills in
/// parents and children.
///
/// Does nothing if the tree has no root. Running it again on an oriented
/// tree changes nothing.
pub fn assign_directionality(tree: &mut Tree) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let root = match tree.root {
        Some(root) => root,
        None => {
            debug!(tree = tree.id(), "no root, edges stay unoriented");
            return diagnostics;
        }
    };

    let mut visited = vec![false; tree.nodes.len()];
    let mut cycle_edges = vec![false; tree.edges.len()];
    // (node, position of the next edge in its incidence list)
    let mut stack: Vec<(NodeIndex, usize)> = vec![(root, 0)];
    visited[root] = true;

    while let Some(frame) = stack.last_mut() {
        let (node, position) = *frame;
        let edge = match tree.nodes[node].edges.get(position) {
            Some(&edge) => edge,
            None => {
                stack.pop();
                continue;
            }
        };
        frame.1 += 1;

        if let Some(source) = tree.edges[edge].source {
            if tree.edges[edge].target == Some(node) && tree.nodes[node].parent.is_none() {
                tree.nodes[node].parent = Some(source);
            }
            continue;
        }
        if cycle_edges[edge] {
            continue;
        }

        match tree.edges[edge].other_end(node) {
            None => {
                let diagnostic = Diagnostic::MissingChild {
                    edge: tree.edges[edge].id.clone(),
                    node: tree.nodes[node].id.clone(),
                };
                debug!("{}", diagnostic);
                diagnostics.push(diagnostic);
            }
            Some(child) if visited[child] => {
                cycle_edges[edge] = true;
                let diagnostic = Diagnostic::Cycle {
                    edge: tree.edges[edge].id.clone(),
                    node: tree.nodes[node].id.clone(),
                };
                debug!("{}", diagnostic);
                diagnostics.push(diagnostic);
            }
            Some(child) => {
                tree.edges[edge].source = Some(node);
                tree.edges[edge].target = Some(child);
                tree.nodes[node].children.push(child);
                visited[child] = true;
                stack.push((child, 0));
            }
        }
    }

    diagnostics
}
