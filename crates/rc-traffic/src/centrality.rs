//! Sampled edge betweenness centrality.
//!
//! Brandes' accumulation over length-weighted shortest paths, run from at most
//! `sample` randomly chosen source nodes instead of every node.  The cost is
//! therefore `O(sample · (E + N log N))` however large the network is.
//!
//! # Normalisation
//!
//! For `n` nodes and `k` sampled sources each edge score is multiplied by
//! `1 / (n·(n−1))`, then by `n / k` to extrapolate from the sample.  With
//! `k = n` this is the exact normalised directed edge betweenness.
//!
//! # Parallelism
//!
//! With the `parallel` feature the per-source passes run on Rayon.  The
//! partial scores are still summed in source order, so both paths produce
//! identical results.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap};

use rustc_hash::{FxHashMap, FxHashSet};

use rc_core::{EdgeKey, NodeId, SimRng};
use rc_network::RoadNetwork;

use crate::CentralityError;

/// Edge → betweenness score.
pub type EdgeCentrality = BTreeMap<EdgeKey, f64>;

/// Approximate edge betweenness from at most `sample` distinct sources drawn
/// with `rng`.
///
/// # Errors
///
/// [`CentralityError::TooFewNodes`] for networks with fewer than two nodes,
/// [`CentralityError::EmptySample`] if `sample` is zero.
pub fn edge_betweenness(
    network: &RoadNetwork,
    sample:  usize,
    rng:     &mut SimRng,
) -> Result<EdgeCentrality, CentralityError> {
    let n = network.node_count();
    if n < 2 {
        return Err(CentralityError::TooFewNodes(n));
    }
    if sample == 0 {
        return Err(CentralityError::EmptySample);
    }

    let all_nodes: Vec<NodeId> = network.nodes().map(|node| node.id).collect();
    let mut sources = if sample >= n { all_nodes } else { rng.sample(&all_nodes, sample) };
    // Source order only affects summation order; fix it so a given sample
    // always sums identically.
    sources.sort_unstable();
    let k = sources.len();

    let partials = source_passes(network, &sources);

    let mut scores: EdgeCentrality = network.edge_keys().map(|e| (e, 0.0)).collect();
    for partial in partials {
        for (edge, value) in partial {
            if let Some(score) = scores.get_mut(&edge) {
                *score += value;
            }
        }
    }

    let scale = 1.0 / (n as f64 * (n as f64 - 1.0)) * (n as f64 / k as f64);
    for score in scores.values_mut() {
        *score *= scale;
    }
    Ok(scores)
}

/// The fallback score: every edge of `network` gets `1.0`.
pub fn uniform_centrality(network: &RoadNetwork) -> EdgeCentrality {
    network.edge_keys().map(|e| (e, 1.0)).collect()
}

#[cfg(not(feature = "parallel"))]
fn source_passes(network: &RoadNetwork, sources: &[NodeId]) -> Vec<Vec<(EdgeKey, f64)>> {
    sources.iter().map(|&s| single_source(network, s)).collect()
}

#[cfg(feature = "parallel")]
fn source_passes(network: &RoadNetwork, sources: &[NodeId]) -> Vec<Vec<(EdgeKey, f64)>> {
    use rayon::prelude::*;
    sources.par_iter().map(|&s| single_source(network, s)).collect()
}

// ── Brandes internals ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq)]
struct Dist(f64);

impl Eq for Dist {}

impl PartialOrd for Dist {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Dist {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Dependency contributed by one source to every edge on its shortest-path
/// DAG.
fn single_source(network: &RoadNetwork, source: NodeId) -> Vec<(EdgeKey, f64)> {
    // Nodes in order of finalisation (non-decreasing distance).
    let mut order: Vec<NodeId> = Vec::new();
    let mut done:  FxHashSet<NodeId> = FxHashSet::default();
    let mut dist:  FxHashMap<NodeId, f64> = FxHashMap::default();
    // sigma[v] = number of shortest source→v paths.
    let mut sigma: FxHashMap<NodeId, f64> = FxHashMap::default();
    // Last edges of shortest paths into each node.
    let mut preds: FxHashMap<NodeId, Vec<EdgeKey>> = FxHashMap::default();

    dist.insert(source, 0.0);
    sigma.insert(source, 1.0);

    let mut heap: BinaryHeap<Reverse<(Dist, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((Dist(0.0), source)));

    while let Some(Reverse((Dist(d), v))) = heap.pop() {
        if done.contains(&v) || dist.get(&v).is_some_and(|&best| d > best) {
            continue;
        }
        done.insert(v);
        order.push(v);
        let sigma_v = sigma.get(&v).copied().unwrap_or(0.0);

        for edge in network.out_edges(v) {
            let w = edge.key.to;
            if done.contains(&w) {
                continue;
            }
            let candidate = d + edge.length;
            match dist.get(&w).copied() {
                Some(best) if candidate > best => {}
                Some(best) if candidate == best => {
                    *sigma.entry(w).or_insert(0.0) += sigma_v;
                    preds.entry(w).or_default().push(edge.key);
                }
                _ => {
                    dist.insert(w, candidate);
                    sigma.insert(w, sigma_v);
                    preds.insert(w, vec![edge.key]);
                    heap.push(Reverse((Dist(candidate), w)));
                }
            }
        }
    }

    // Back-propagate dependencies from the farthest node inwards.
    let mut delta: FxHashMap<NodeId, f64> = FxHashMap::default();
    let mut contributions = Vec::new();
    while let Some(w) = order.pop() {
        let sigma_w = sigma.get(&w).copied().unwrap_or(0.0);
        if sigma_w == 0.0 {
            continue;
        }
        let coeff = (1.0 + delta.get(&w).copied().unwrap_or(0.0)) / sigma_w;
        for &edge in preds.get(&w).into_iter().flatten() {
            let c = sigma.get(&edge.from).copied().unwrap_or(0.0) * coeff;
            contributions.push((edge, c));
            *delta.entry(edge.from).or_insert(0.0) += c;
        }
    }
    contributions
}
