//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The closure engine finds substitute paths through the [`Router`] trait, so
//! applications can swap in other strategies without touching the engine.
//! The default [`DijkstraRouter`] weights every edge by its planar length.
//!
//! # Tie-breaking
//!
//! Among paths of equal length the result is deterministic:
//!
//! 1. the frontier pops the lowest `(distance, NodeId)` pair first;
//! 2. a node's outgoing edges are relaxed in ascending `(to, key)` order;
//! 3. a node's predecessor edge is replaced only by a *strictly* shorter
//!    distance.
//!
//! So the first equal-length path discovered under that order wins, and the
//! lowest key wins among parallel edges of equal length.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use rc_core::{EdgeKey, NodeId};

use crate::network::RoadNetwork;
use crate::{NetworkError, NetworkResult};

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a routing query: an ordered list of edges and the total
/// length.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Edges to traverse in order, from source to destination.
    pub edges: Vec<EdgeKey>,
    /// Sum of edge lengths in metres.
    pub length: f64,
}

impl Path {
    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }

    /// The node sequence visited, including both endpoints.  Empty for a
    /// trivial path.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.edges.iter().map(|e| e.from).collect();
        if let Some(last) = self.edges.last() {
            nodes.push(last.to);
        }
        nodes
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implementations must be `Send + Sync` so a session registry can share
/// them across request threads.
pub trait Router: Send + Sync {
    /// Compute a path from `from` to `to` over the edges currently present in
    /// `network`.
    ///
    /// `from == to` is an empty path, not an error.
    ///
    /// # Errors
    ///
    /// [`NetworkError::NodeNotFound`] for unknown endpoints,
    /// [`NetworkError::NoRoute`] if `to` is unreachable.
    fn shortest_path(&self, network: &RoadNetwork, from: NodeId, to: NodeId) -> NetworkResult<Path>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Dijkstra's algorithm over edge length.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn shortest_path(&self, network: &RoadNetwork, from: NodeId, to: NodeId) -> NetworkResult<Path> {
        dijkstra(network, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Non-negative, finite distance with a total order, usable as a heap key.
#[derive(Debug, Clone, Copy, PartialEq)]
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

fn dijkstra(network: &RoadNetwork, from: NodeId, to: NodeId) -> NetworkResult<Path> {
    for n in [from, to] {
        if !network.contains_node(n) {
            return Err(NetworkError::NodeNotFound(n));
        }
    }
    if from == to {
        return Ok(Path { edges: vec![], length: 0.0 });
    }

    // dist[v] = best known length to reach v.
    let mut dist: FxHashMap<NodeId, f64> = FxHashMap::default();
    // prev_edge[v] = edge that reached v.
    let mut prev_edge: FxHashMap<NodeId, EdgeKey> = FxHashMap::default();

    dist.insert(from, 0.0);

    // Min-heap: (length, node).  Secondary key NodeId ensures deterministic
    // tie-breaking.
    let mut heap: BinaryHeap<Reverse<(Dist, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((Dist(0.0), from)));

    while let Some(Reverse((Dist(d), node))) = heap.pop() {
        if node == to {
            return Ok(reconstruct(&prev_edge, from, to, d));
        }

        // Skip stale heap entries.
        if dist.get(&node).is_some_and(|&best| d > best) {
            continue;
        }

        for edge in network.out_edges(node) {
            let neighbor = edge.key.to;
            let candidate = d + edge.length;

            if dist.get(&neighbor).is_none_or(|&best| candidate < best) {
                dist.insert(neighbor, candidate);
                prev_edge.insert(neighbor, edge.key);
                heap.push(Reverse((Dist(candidate), neighbor)));
            }
        }
    }

    Err(NetworkError::NoRoute { from, to })
}

fn reconstruct(prev_edge: &FxHashMap<NodeId, EdgeKey>, from: NodeId, to: NodeId, length: f64) -> Path {
    let mut edges = Vec::new();
    let mut cur = to;
    while cur != from {
        let Some(&e) = prev_edge.get(&cur) else {
            break;
        };
        edges.push(e);
        cur = e.from;
    }
    edges.reverse();
    Path { edges, length }
}
