//! Double-stranded adjacency graph construction and validation.

pub mod adjacency;
pub mod depth;
