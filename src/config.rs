// Copyright 2024 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Settings of a [`TreeFactory`](crate::convert::TreeFactory).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Point2;

/// Id prefixes, the root matching tolerance and an optional initial root
/// hint.
///
/// With the defaults, trees are named `T1`, `T2`, ..., nodes of the first
/// tree `NT1.1`, `NT1.2`, ... and taxa `otu1`, `otu2`, ....
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FactoryConfig {
    pub tree_prefix: String,
    pub node_prefix: String,
    pub otu_prefix: String,
    /// Label of the document-wide taxa block.
    pub taxa_label: String,
    /// Largest per-axis difference at which a node still matches the root
    /// hint. `0.0` requires exact equality.
    pub root_tolerance: f64,
    pub root_hint: Option<Point2>,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        FactoryConfig {
            tree_prefix: "T".to_owned(),
            node_prefix: "N".to_owned(),
            otu_prefix: "otu".to_owned(),
            taxa_label: "RootTaxaBlock".to_owned(),
            root_tolerance: 0.0,
            root_hint: None,
        }
    }
}

impl FactoryConfig {
    pub fn with_root_hint(mut self, hint: Point2) -> Self {
        self.root_hint = Some(hint);
        self
    }

    pub fn with_root_tolerance(mut self, tolerance: f64) -> Self {
        self.root_tolerance = tolerance;
        self
    }
}
