//! Conversion of traced tree diagrams into rooted phylogenetic trees.
//!
//! The input is an undirected geometric graph, typically obtained by
//! skeletonizing an image of a tree diagram: line ends and junctions with
//! their coordinates, and the traced segments between them with their
//! lengths ([`graph`]). A [`TreeFactory`](convert::TreeFactory) turns each
//! such graph into a rooted, directed [`Tree`](tree::Tree) of a
//! [`Document`](document::Document), assigning a taxon to every leaf
//! ([`taxa`]). The result can be handed to a serializer, or exported as a
//! petgraph graph ([`phylogeny`]).
//!
//! Traced graphs are imperfect. Conversion is best effort and returns the
//! problems it met as [`diagnostics`] next to the tree.

#[macro_use]
extern crate derive_new;
#[macro_use]
extern crate lazy_static;

extern crate regex;

pub mod config;
pub mod convert;
pub mod diagnostics;
pub mod document;
pub mod geometry;
pub mod graph;
pub mod phylogeny;
pub mod taxa;
pub mod tree;
