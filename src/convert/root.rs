// Copyright 2024 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Root resolution by coordinate match against a root hint.
//!
//! Node ids of the traced graph are not stable between processing steps, so
//! the root is recognized by position. The first created node whose
//! coordinate matches the hint becomes the root.

use tracing::{debug, warn};

use crate::diagnostics::Diagnostic;
use crate::geometry::Point2;
use crate::tree::{NodeIndex, Tree};

#[derive(Debug, Clone, Copy)]
pub(crate) struct RootSelector {
    hint: Option<Point2>,
    tolerance: f64,
}

impl RootSelector {
    pub fn new(hint: Option<Point2>, tolerance: f64) -> Self {
        RootSelector { hint, tolerance }
    }

    fn matches(&self, xy: &Point2) -> bool {
        self.hint
            .map_or(false, |hint| hint.within(xy, self.tolerance))
    }

    /// Makes `index` the root of `tree` if it matches the hint and no root
    /// has been chosen yet. A further match is reported as a duplicate.
    pub fn offer(&self, tree: &mut Tree, index: NodeIndex, diagnostics: &mut Vec<Diagnostic>) {
        let node = match tree.node(index) {
            Some(node) if self.matches(&node.xy()) => node,
            _ => return,
        };
        match tree.root() {
            None => {
                debug!(node = node.id(), xy = %node.xy(), "root resolved");
                tree.set_root(index);
            }
            Some(root) => {
                let diagnostic = Diagnostic::DuplicateRoot {
                    node: node.id().to_owned(),
                    root: root.id().to_owned(),
                };
                debug!("{}", diagnostic);
                diagnostics.push(diagnostic);
            }
        }
    }

    /// Reports an unresolved root once all nodes have been offered.
    pub fn finish(&self, tree: &Tree, diagnostics: &mut Vec<Diagnostic>) {
        if tree.root_index().is_none() {
            let diagnostic = Diagnostic::UnresolvedRoot {
                tree: tree.id().to_owned(),
                hint: self.hint,
            };
            warn!("{}", diagnostic);
            diagnostics.push(diagnostic);
        }
    }
}
