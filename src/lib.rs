//! # Thesaurus
//!
//! An in-memory word-synonym relation store served over HTTP.
//!
//! ## Features
//!
//! - Eager transitive closure: merging two synonym groups links every pair
//!   of members directly, so membership queries are single lookups
//! - Reverse-insertion-order listing (most recently added synonym first)
//! - Pairwise deletes that never cascade through a merged group
//! - Thread-safe shared store behind a reader-writer lock
//! - Thin axum HTTP boundary with all validation at the edge

pub mod analysis;
pub mod config;
pub mod error;
pub mod graph;
pub mod server;
pub mod service;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
