use ahash::AHashMap;
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::kmer::kmer::{reverse_complement, Kmer};

/// Seed graph: downstream edges observed on a single strand.
pub type SeedGraph = AHashMap<Kmer, Vec<Kmer>>;

/// Adjacency map with per-key neighbor lists. Insertion order is preserved
/// and duplicates are kept, since they record both strands of a palindromic
/// edge.
pub type AdjacencyMap = AHashMap<Kmer, Vec<Kmer>>;

/// Neighbor list for a k-mer; empty when the k-mer has no recorded
/// neighbors, which is a normal outcome rather than an error.
pub fn neighbors<'a>(graph: &'a AdjacencyMap, kmer: &str) -> &'a [Kmer] {
    graph.get(kmer).map(Vec::as_slice).unwrap_or(&[])
}

/// True iff `upstream` can immediately precede `downstream` in a de Bruijn
/// graph: dropping the first base of `upstream` leaves the same sequence as
/// dropping the last base of `downstream` (a (k-1)-base overlap).
///
/// Mismatched lengths or non-overlapping sequences yield `false`, never an
/// error.
pub fn is_ordered(upstream: &str, downstream: &str) -> bool {
    let u = upstream.as_bytes();
    let d = downstream.as_bytes();
    u.get(1..).unwrap_or(&[]) == &d[..d.len().saturating_sub(1)]
}

/// True iff every neighbor in every list is a valid upstream k-mer of its
/// key. Short-circuits on the first violation.
pub fn mapping_all_upstream(graph: &AdjacencyMap) -> bool {
    graph
        .iter()
        .all(|(kmer, ups)| ups.iter().all(|u| is_ordered(u, kmer)))
}

/// Expands a single-strand seed graph into the full double-stranded graph,
/// returning `(downstream, upstream)` adjacency maps.
///
/// Every seed edge `a -> b` records four effects: the edge itself in the
/// downstream map, its reverse index in the upstream map, and the same pair
/// for the reverse-complement edge `rc(b) -> rc(a)` (directionality flips
/// under reverse complementation). For palindromic k-mers some of these
/// coincide and neighbor lists legitimately contain duplicates; they must
/// not be deduplicated.
///
/// Fails with [`GraphError::InconsistentOverlap`] when the resulting
/// upstream map violates the (k-1)-overlap invariant. That is a contract
/// violation caused by malformed seed input, not a condition to recover
/// from.
pub fn build_full_from_seed_graph(seed: &SeedGraph) -> Result<(AdjacencyMap, AdjacencyMap)> {
    let mut downstream: AdjacencyMap = AHashMap::new();
    let mut upstream: AdjacencyMap = AHashMap::new();

    for (kmer, seed_downstream) in seed {
        let rc_kmer = reverse_complement(kmer)?;
        for kmer_downstream in seed_downstream {
            // The seed edge is restated here instead of bulk-copying the
            // seed map, so both strands go through one code path.
            downstream
                .entry(kmer.clone())
                .or_default()
                .push(kmer_downstream.clone());
            upstream
                .entry(kmer_downstream.clone())
                .or_default()
                .push(kmer.clone());

            let rc_kmer_downstream = reverse_complement(kmer_downstream)?;
            downstream
                .entry(rc_kmer_downstream.clone())
                .or_default()
                .push(rc_kmer.clone());
            upstream
                .entry(rc_kmer.clone())
                .or_default()
                .push(rc_kmer_downstream);
        }
    }

    check_all_upstream(&upstream)?;

    debug!(
        seed_edges = seed.values().map(Vec::len).sum::<usize>(),
        nodes = downstream.len(),
        "expanded seed graph to both strands"
    );
    Ok((downstream, upstream))
}

/// Post-condition of [`build_full_from_seed_graph`]: the fallible twin of
/// [`mapping_all_upstream`], reporting the first offending pair.
fn check_all_upstream(upstream: &AdjacencyMap) -> Result<()> {
    for (kmer, ups) in upstream {
        for u in ups {
            if !is_ordered(u, kmer) {
                return Err(GraphError::InconsistentOverlap {
                    upstream: u.clone(),
                    downstream: kmer.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_ordered_accepts_single_base_shifts() {
        assert!(is_ordered("ACGT", "CGTA"));
        assert!(is_ordered("AAA", "AAT"));
    }

    #[test]
    fn is_ordered_rejects_non_overlaps() {
        assert!(!is_ordered("ACGT", "CGAA"));
        assert!(!is_ordered("ACGT", "GTAC"));
    }

    #[test]
    fn is_ordered_rejects_mismatched_lengths() {
        assert!(!is_ordered("ACGT", "CGT"));
        assert!(!is_ordered("ACG", "CGTA"));
    }

    #[test]
    fn is_ordered_on_degenerate_lengths() {
        // Both slices collapse to the empty sequence
        assert!(is_ordered("", ""));
        assert!(is_ordered("A", "C"));
    }

    #[test]
    fn mapping_all_upstream_is_vacuously_true_when_empty() {
        assert!(mapping_all_upstream(&AdjacencyMap::new()));
    }

    #[test]
    fn mapping_all_upstream_finds_a_violation() {
        let mut graph = AdjacencyMap::new();
        graph.insert("CGT".to_string(), vec!["ACG".to_string()]);
        assert!(mapping_all_upstream(&graph));

        graph.insert("TTT".to_string(), vec!["ACG".to_string()]);
        assert!(!mapping_all_upstream(&graph));
    }

    #[test]
    fn neighbors_defaults_to_empty() {
        let graph = AdjacencyMap::new();
        assert!(neighbors(&graph, "ACG").is_empty());
    }
}
