use ahash::AHashMap;

use crate::error::Result;
use crate::kmer::kmer::{reverse_complement, Kmer};

/// K-mer abundance (coverage) counts.
pub type DepthMap = AHashMap<Kmer, u32>;

/// Depth recorded for a k-mer, 0 when unseen.
pub fn depth_of(depth: &DepthMap, kmer: &str) -> u32 {
    depth.get(kmer).copied().unwrap_or(0)
}

/// Returns a depth map in which every input k-mer's count is recorded under
/// both the k-mer and its reverse complement.
///
/// When a k-mer and its reverse complement are both present in the input
/// with different counts, the one processed last wins; callers should not
/// feed already-doubled maps and expect order independence.
pub fn add_reverse_complement_depth(depth: &DepthMap) -> Result<DepthMap> {
    let mut full = DepthMap::with_capacity(depth.len() * 2);
    for (kmer, &count) in depth {
        full.insert(kmer.clone(), count);
        full.insert(reverse_complement(kmer)?, count);
    }
    Ok(full)
}
