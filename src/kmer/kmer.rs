use crate::error::{GraphError, Result};

pub type Kmer = String;

/// Returns the Watson-Crick complement of a single base.
///
/// Only the uppercase A/C/G/T alphabet is accepted; anything else is an
/// invalid-input error rather than a silent placeholder.
pub fn complement(base: char) -> Result<char> {
    match base {
        'A' => Ok('T'),
        'C' => Ok('G'),
        'G' => Ok('C'),
        'T' => Ok('A'),
        _ => Err(GraphError::InvalidBase(base)),
    }
}

/// Returns the k-mer as read on the opposite strand: complement every base,
/// then reverse the result.
pub fn reverse_complement(kmer: &str) -> Result<Kmer> {
    kmer.chars().rev().map(complement).collect()
}

/// Returns the canonical form of a k-mer (lexicographically smaller of
/// forward and reverse complement). Ties favor the forward k-mer.
pub fn canonical(kmer: &str) -> Result<Kmer> {
    let rc = reverse_complement(kmer)?;
    if kmer <= rc.as_str() {
        Ok(kmer.to_string())
    } else {
        Ok(rc)
    }
}
