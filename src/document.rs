// Copyright 2024 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! A set of trees over one shared taxa block.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::taxa::TaxaBlock;
use crate::tree::Tree;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Document {
    taxa: TaxaBlock,
    trees: Vec<Tree>,
}

impl Document {
    pub fn new(taxa: TaxaBlock) -> Self {
        Document {
            taxa,
            trees: Vec::new(),
        }
    }

    pub fn taxa(&self) -> &TaxaBlock {
        &self.taxa
    }

    pub fn taxa_mut(&mut self) -> &mut TaxaBlock {
        &mut self.taxa
    }

    /// Trees in conversion order.
    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    pub fn tree(&self, index: usize) -> Option<&Tree> {
        self.trees.get(index)
    }

    pub fn tree_mut(&mut self, index: usize) -> Option<&mut Tree> {
        self.trees.get_mut(index)
    }

    /// Appends a tree and returns its index.
    pub fn push_tree(&mut self, tree: Tree) -> usize {
        self.trees.push(tree);
        self.trees.len() - 1
    }
}
