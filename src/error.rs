//! Error types for strandgraph operations.

use thiserror::Error;

/// Failures surfaced by sequence and graph operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A nucleotide outside the A/C/G/T alphabet.
    #[error("invalid nucleotide '{0}'")]
    InvalidBase(char),

    /// An upstream adjacency that is not a (k-1)-base overlap. Signals
    /// inconsistent k-mer lengths or a malformed seed graph.
    #[error("inconsistent overlap: '{upstream}' cannot precede '{downstream}'")]
    InconsistentOverlap {
        upstream: String,
        downstream: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
