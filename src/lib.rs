//! Utilities for double-stranded assembly graphs.
//!
//! A de Bruijn-style seed graph built from single-strand k-mer observations
//! only records one direction of each adjacency. Because DNA is
//! double-stranded, every observed edge implies its reverse-complement edge
//! on the opposite strand. This crate expands such a seed graph into full
//! downstream and upstream adjacency maps covering both strands, extends
//! depth (coverage) maps the same way, and validates the (k-1)-overlap
//! structure of the result.

pub mod error;
pub mod graph;
pub mod kmer;

pub use error::{GraphError, Result};
