// Copyright 2024 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Operational taxonomic units (OTUs) shared by all trees of a document.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A leaf identity. Created unlabelled; a label (e.g. a species name read
/// next to the leaf) can be attached later.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Taxon {
    id: String,
    label: Option<String>,
}

impl Taxon {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Document-wide, append-only list of taxa.
///
/// Ids are `<prefix><n>` where `n` is the number of taxa including the new
/// one, so they are strictly increasing and never reused.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaxaBlock {
    label: String,
    prefix: String,
    taxa: Vec<Taxon>,
}

impl TaxaBlock {
    pub fn new(label: &str, prefix: &str) -> Self {
        TaxaBlock {
            label: label.to_owned(),
            prefix: prefix.to_owned(),
            taxa: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Appends a new unlabelled taxon and returns its id.
    pub fn create(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.taxa.len() + 1);
        self.taxa.push(Taxon {
            id: id.clone(),
            label: None,
        });
        id
    }

    pub fn get(&self, id: &str) -> Option<&Taxon> {
        self.taxa.iter().find(|taxon| taxon.id == id)
    }

    /// Labels the taxon `id`. Returns false if there is no such taxon.
    pub fn set_label(&mut self, id: &str, label: &str) -> bool {
        match self.taxa.iter_mut().find(|taxon| taxon.id == id) {
            Some(taxon) => {
                taxon.label = Some(label.to_owned());
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Taxon> {
        self.taxa.iter()
    }

    pub fn len(&self) -> usize {
        self.taxa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taxa.is_empty()
    }
}
