// Copyright 2024 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Conditions reported while converting a diagram graph.
//!
//! Traced graphs are expected to be imperfect, so none of these abort a
//! conversion. They are collected alongside the (possibly partial) tree and
//! it is up to the caller whether such a tree is usable.

use strum_macros::{AsRefStr, Display};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Point2;

/// The class of a [`Diagnostic`].
///
/// ```rust
/// use phylo_diagram::diagnostics::DiagnosticKind;
///
/// assert_eq!(DiagnosticKind::UnresolvedRoot.to_string(), "unresolved-root");
/// assert_eq!(DiagnosticKind::Cycle.as_ref(), "cycle");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiagnosticKind {
    #[strum(serialize = "unresolved-root")]
    UnresolvedRoot,
    #[strum(serialize = "duplicate-root")]
    DuplicateRoot,
    #[strum(serialize = "dangling-edge-endpoint")]
    DanglingEndpoint,
    #[strum(serialize = "missing-child")]
    MissingChild,
    #[strum(serialize = "cycle")]
    Cycle,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Diagnostic {
    #[error("no node of tree {tree} matches root hint {}", display_hint(.hint))]
    UnresolvedRoot { tree: String, hint: Option<Point2> },
    #[error("node {node} also matches the root hint; keeping {root} as root")]
    DuplicateRoot { node: String, root: String },
    #[error("edge {edge} has no tree node for its end at graph node {graph_node}")]
    DanglingEndpoint { edge: String, graph_node: String },
    #[error("edge {edge} of node {node} has no node at its other end")]
    MissingChild { edge: String, node: String },
    #[error("edge {edge} from node {node} closes a cycle; left unoriented")]
    Cycle { edge: String, node: String },
}

fn display_hint(hint: &Option<Point2>) -> String {
    match hint {
        Some(xy) => xy.to_string(),
        None => "(none)".to_owned(),
    }
}

impl Diagnostic {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::UnresolvedRoot { .. } => DiagnosticKind::UnresolvedRoot,
            Diagnostic::DuplicateRoot { .. } => DiagnosticKind::DuplicateRoot,
            Diagnostic::DanglingEndpoint { .. } => DiagnosticKind::DanglingEndpoint,
            Diagnostic::MissingChild { .. } => DiagnosticKind::MissingChild,
            Diagnostic::Cycle { .. } => DiagnosticKind::Cycle,
        }
    }
}
