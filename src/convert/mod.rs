// Copyright 2024 Johannes Köster.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversion of diagram graphs into rooted trees.
//!
//! A [`TreeFactory`] converts one [`DiagramGraph`] at a time into a [`Tree`]
//! of its [`Document`]:
//!
//! 1. graph nodes are classified by degree; leaves and branch points become
//!    tree nodes, leaves also get a new taxon ([`classify`]),
//! 2. the node matching the root hint is flagged as root,
//! 3. every graph edge becomes an undirected tree edge,
//! 4. edges are oriented away from the root ([`direction`]).
//!
//! Problems with the input never abort a conversion; they are returned as
//! [`Diagnostic`]s in the [`ConversionReport`].
//!
//! # Example
//!
//! ```rust
//! use phylo_diagram::convert::TreeFactory;
//! use phylo_diagram::geometry::Point2;
//! use phylo_diagram::graph::{DiagramGraph, GraphEdge, GraphNode};
//!
//! // a root junction with three leaves
//! let mut graph = DiagramGraph::new();
//! let hub = graph.add_node(GraphNode::new("hub".to_owned(), Point2::new(0.0, 0.0)));
//! for (i, y) in [-10.0, 0.0, 10.0].iter().enumerate() {
//!     let leaf = graph.add_node(GraphNode::new(format!("leaf{}", i), Point2::new(20.0, *y)));
//!     graph.add_edge(hub, leaf, GraphEdge::new(format!("polyline.{}", i), 20.0));
//! }
//! graph.set_root(hub);
//!
//! let mut factory = TreeFactory::new();
//! let report = factory.convert(&graph);
//! assert!(report.diagnostics().is_empty());
//!
//! let document = factory.document().unwrap();
//! let tree = document.tree(report.tree_index()).unwrap();
//! assert_eq!(tree.id(), "T1");
//! assert_eq!(tree.root().unwrap().id(), "NT1.1");
//! assert_eq!(tree.root().unwrap().children().len(), 3);
//! assert_eq!(document.taxa().len(), 3);
//! ```

pub mod classify;
pub mod direction;
mod edges;
mod registry;
mod root;

pub use self::classify::NodeRole;
pub use self::direction::assign_directionality;

use tracing::debug;

use crate::config::FactoryConfig;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::document::Document;
use crate::geometry::Point2;
use crate::graph::DiagramGraph;
use crate::taxa::TaxaBlock;
use crate::tree::Tree;

use self::registry::NodeRegistry;
use self::root::RootSelector;

/// Outcome of converting one graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    tree_index: usize,
    diagnostics: Vec<Diagnostic>,
}

impl ConversionReport {
    /// Index of the new tree in [`Document::trees`].
    pub fn tree_index(&self) -> usize {
        self.tree_index
    }

    /// Reported conditions, in the order they were found.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of reported conditions of the given kind.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind() == kind).count()
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Converts diagram graphs into the trees of a single document.
///
/// The factory holds the state shared by all conversions: the document with
/// its taxa block, and the root hint. Once set, the root hint is reused for
/// every following graph until it is replaced.
#[derive(Debug, Clone, Default)]
pub struct TreeFactory {
    config: FactoryConfig,
    root_hint: Option<Point2>,
    document: Option<Document>,
}

impl TreeFactory {
    pub fn new() -> Self {
        TreeFactory::with_config(FactoryConfig::default())
    }

    pub fn with_config(config: FactoryConfig) -> Self {
        TreeFactory {
            root_hint: config.root_hint,
            config,
            document: None,
        }
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Sets the coordinate the root node of the following graphs must have.
    pub fn set_root_hint(&mut self, hint: Point2) {
        debug!(%hint, "root hint set");
        self.root_hint = Some(hint);
    }

    pub fn root_hint(&self) -> Option<Point2> {
        self.root_hint
    }

    /// The document, created with an empty taxa block on first use.
    pub fn get_or_create_document(&mut self) -> &mut Document {
        let config = &self.config;
        self.document
            .get_or_insert_with(|| new_document(config))
    }

    /// The document, if any graph has been converted yet.
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn into_document(self) -> Option<Document> {
        self.document
    }

    /// Converts `graph` into a new tree appended to the document.
    ///
    /// If no root hint is set yet, the graph's own root node provides it.
    pub fn convert(&mut self, graph: &DiagramGraph) -> ConversionReport {
        if self.root_hint.is_none() {
            match graph.root_node() {
                Some(root) => self.set_root_hint(root.xy()),
                None => debug!("graph has no root node and no root hint is set"),
            }
        }

        let config = &self.config;
        let selector = RootSelector::new(self.root_hint, config.root_tolerance);
        let document = self
            .document
            .get_or_insert_with(|| new_document(config));

        let tree_id = format!("{}{}", config.tree_prefix, document.trees().len() + 1);
        let mut tree = Tree::new(&tree_id);
        let mut registry = NodeRegistry::new();
        let mut diagnostics = Vec::new();

        classify::add_nodes(
            graph,
            &config.node_prefix,
            &mut tree,
            document.taxa_mut(),
            &mut registry,
            &selector,
            &mut diagnostics,
        );
        selector.finish(&tree, &mut diagnostics);

        let created = edges::add_edges(graph, &registry, &mut tree, &mut diagnostics);
        edges::attach_edges(&mut tree, &created);

        diagnostics.extend(assign_directionality(&mut tree));

        debug!(
            tree = %tree_id,
            nodes = tree.num_nodes(),
            edges = tree.num_edges(),
            diagnostics = diagnostics.len(),
            "converted graph"
        );
        ConversionReport {
            tree_index: document.push_tree(tree),
            diagnostics,
        }
    }
}

fn new_document(config: &FactoryConfig) -> Document {
    Document::new(TaxaBlock::new(&config.taxa_label, &config.otu_prefix))
}
