//! K-mer sequence operations: complements and canonical forms.

pub mod kmer;
