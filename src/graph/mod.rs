//! Synonym relation graph.
//!
//! This module provides the core in-memory structure of the library: an
//! undirected adjacency map over word tokens that eagerly maintains the
//! transitive closure of synonymy at write time.

pub mod store;

pub use store::SynonymGraph;
