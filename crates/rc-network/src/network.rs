//! Road network representation and builder.
//!
//! # Data layout
//!
//! Nodes never change after a network is built, while edges are removed by
//! road closures.  The two halves are therefore stored differently:
//!
//! ```text
//! nodes:     Arc<NodeTable>                          shared by every clone
//! edges:     BTreeMap<EdgeKey, Edge>                 owned, deep-copied
//! out_edges: BTreeMap<NodeId, BTreeSet<EdgeKey>>     owned, deep-copied
//! ```
//!
//! Cloning a `RoadNetwork` bumps one reference count for the node table and
//! copies the edge maps, so removing an edge from a clone can never affect
//! the network it was cloned from.  Ordered maps keep iteration (and
//! therefore routing tie-breaks and exports) deterministic.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps geographic `[lon, lat]` to the nearest
//! `NodeId`.  Used to resolve a clicked map position to a road node.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use tracing::debug;

use rc_core::{EdgeKey, GeoPoint, NodeId, PlanarPoint};

use crate::raw::{RawEdge, RawGraph, RawNode};
use crate::{NetworkError, NetworkResult};

// ── Node & Edge ───────────────────────────────────────────────────────────────

/// A road-network node.  Immutable once the network is built.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    /// Projected position in metres.  Used for lengths.
    pub planar: PlanarPoint,
    /// Source longitude/latitude, preserved verbatim.  Used for display.
    pub geo: GeoPoint,
}

/// A directed road segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub key: EdgeKey,
    /// Planar length in metres.  Non-negative and finite.
    pub length: f64,
    /// Road classification label (OSM `highway` value), if known.
    pub highway: Option<String>,
    /// Display name, if known.
    pub name: Option<String>,
}

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lon, lat]` point with
/// the associated `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2],
    id:    NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lon/lat space.  Sufficient for
    /// nearest-node queries within a city.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlon = self.point[0] - point[0];
        let dlat = self.point[1] - point[1];
        dlon * dlon + dlat * dlat
    }
}

struct NodeTable {
    nodes:       BTreeMap<NodeId, Node>,
    spatial_idx: RTree<NodeEntry>,
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Directed road multigraph with per-node planar and geographic coordinates.
///
/// Build with [`RoadNetwork::build`] (from a [`RawGraph`]) or
/// [`RoadNetworkBuilder`].  The only mutation is
/// [`remove_edge`](Self::remove_edge); nodes are never added or removed.
#[derive(Clone)]
pub struct RoadNetwork {
    nodes:     Arc<NodeTable>,
    edges:     BTreeMap<EdgeKey, Edge>,
    out_edges: BTreeMap<NodeId, BTreeSet<EdgeKey>>,
}

impl RoadNetwork {
    /// Validate a raw graph and wrap it into the canonical model.
    ///
    /// # Errors
    ///
    /// Any malformed input is rejected as a whole:
    ///
    /// - a node listed twice, or lacking planar or geographic coordinates
    /// - an edge whose endpoint is not a node, listed twice, or whose given
    ///   length is negative or not finite
    pub fn build(raw: RawGraph) -> NetworkResult<Self> {
        let mut nodes = BTreeMap::new();
        for RawNode { id, planar, geo } in raw.nodes {
            let planar = planar.ok_or(NetworkError::MissingCoordinates { node: id, system: "planar" })?;
            let geo = geo.ok_or(NetworkError::MissingCoordinates { node: id, system: "geographic" })?;
            if !planar.is_finite() {
                return Err(NetworkError::NonFiniteCoordinates { node: id, system: "planar" });
            }
            if !geo.is_finite() {
                return Err(NetworkError::NonFiniteCoordinates { node: id, system: "geographic" });
            }
            if nodes.insert(id, Node { id, planar, geo }).is_some() {
                return Err(NetworkError::DuplicateNode(id));
            }
        }

        let mut edges = BTreeMap::new();
        let mut out_edges: BTreeMap<NodeId, BTreeSet<EdgeKey>> = BTreeMap::new();
        for RawEdge { from, to, key, length, highway, name } in raw.edges {
            let edge_key = EdgeKey::new(from, to, key);
            let (Some(a), Some(b)) = (nodes.get(&from), nodes.get(&to)) else {
                let missing = if nodes.contains_key(&from) { to } else { from };
                return Err(NetworkError::DanglingEdge { edge: edge_key, missing });
            };

            let length = match length {
                Some(len) if len.is_finite() && len >= 0.0 => len,
                Some(len) => return Err(NetworkError::InvalidLength { edge: edge_key, length: len }),
                None => a.planar.distance(b.planar),
            };

            let edge = Edge { key: edge_key, length, highway, name };
            if edges.insert(edge_key, edge).is_some() {
                return Err(NetworkError::DuplicateEdge(edge_key));
            }
            out_edges.entry(from).or_default().insert(edge_key);
        }

        // Bulk-load R-tree for O(N log N) construction (faster than N inserts).
        let entries: Vec<NodeEntry> = nodes
            .values()
            .map(|n| NodeEntry { point: n.geo.lon_lat(), id: n.id })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        debug!(nodes = nodes.len(), edges = edges.len(), "road network built");

        Ok(RoadNetwork {
            nodes: Arc::new(NodeTable { nodes, spatial_idx }),
            edges,
            out_edges,
        })
    }

    /// Construct an empty network with no nodes or edges.
    pub fn empty() -> Self {
        RoadNetwork {
            nodes:     Arc::new(NodeTable { nodes: BTreeMap::new(), spatial_idx: RTree::new() }),
            edges:     BTreeMap::new(),
            out_edges: BTreeMap::new(),
        }
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.nodes.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.nodes.get(&id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.nodes.contains_key(&id)
    }

    /// All nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.nodes.values()
    }

    pub fn edge(&self, key: EdgeKey) -> Option<&Edge> {
        self.edges.get(&key)
    }

    pub fn contains_edge(&self, key: EdgeKey) -> bool {
        self.edges.contains_key(&key)
    }

    /// All edges in ascending `(from, to, key)` order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values()
    }

    /// Edge identities in ascending order.
    pub fn edge_keys(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.edges.keys().copied()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Outgoing edges of `node` in ascending `(to, key)` order.
    ///
    /// Empty for unknown nodes and for nodes whose edges were all removed.
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.out_edges
            .get(&node)
            .into_iter()
            .flatten()
            .filter_map(|k| self.edges.get(k))
    }

    /// `true` if at least one edge (any key) runs from `u` to `v`.
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.edges_between(u, v).next().is_some()
    }

    /// All parallel edges from `u` to `v`, by ascending key.
    pub fn edges_between(&self, u: NodeId, v: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.edges
            .range(EdgeKey::new(u, v, 0)..=EdgeKey::new(u, v, u32::MAX))
            .map(|(_, e)| e)
    }

    /// Distinct nodes reachable from `u` over one outgoing edge.
    pub fn neighbors(&self, u: NodeId) -> BTreeSet<NodeId> {
        self.out_edges(u).map(|e| e.key.to).collect()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Remove one edge.  Returns whether it existed.  Nodes are untouched.
    pub fn remove_edge(&mut self, key: EdgeKey) -> bool {
        if self.edges.remove(&key).is_none() {
            return false;
        }
        if let Some(out) = self.out_edges.get_mut(&key.from) {
            out.remove(&key);
            if out.is_empty() {
                self.out_edges.remove(&key.from);
            }
        }
        true
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Return the `NodeId` of the nearest node to `pos`.
    ///
    /// Returns `None` only if the network has no nodes.
    pub fn nearest_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.nodes
            .spatial_idx
            .nearest_neighbor(&pos.lon_lat())
            .map(|e| e.id)
    }

    /// `true` if both networks share the same immutable node table, i.e. one
    /// was cloned from the other.
    pub fn shares_nodes_with(&self, other: &RoadNetwork) -> bool {
        Arc::ptr_eq(&self.nodes, &other.nodes)
    }
}

impl std::fmt::Debug for RoadNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoadNetwork")
            .field("nodes", &self.node_count())
            .field("edges", &self.edge_count())
            .finish()
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Assemble a [`RawGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use rc_core::{GeoPoint, NodeId, PlanarPoint};
/// use rc_network::RoadNetworkBuilder;
///
/// let mut b = RoadNetworkBuilder::new();
/// let a = b.add_node(NodeId(1), PlanarPoint::new(0.0, 0.0), GeoPoint::new(106.84, -6.20));
/// let c = b.add_node(NodeId(2), PlanarPoint::new(120.0, 0.0), GeoPoint::new(106.85, -6.20));
/// b.add_road(a, c, None, None);
/// let net = b.build().unwrap();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.edge_count(), 2); // bidirectional
/// ```
#[derive(Default)]
pub struct RoadNetworkBuilder {
    raw: RawGraph,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            raw: RawGraph {
                nodes: Vec::with_capacity(nodes),
                edges: Vec::with_capacity(edges),
            },
        }
    }

    /// Add a node and return its id.
    pub fn add_node(&mut self, id: NodeId, planar: PlanarPoint, geo: GeoPoint) -> NodeId {
        self.raw.nodes.push(RawNode::new(id, planar, geo));
        id
    }

    /// Add a **directed** edge.
    pub fn add_edge(&mut self, edge: RawEdge) -> EdgeKey {
        let key = EdgeKey::new(edge.from, edge.to, edge.key);
        self.raw.edges.push(edge);
        key
    }

    /// Convenience: add key-0 edges in **both directions** for a two-way road
    /// segment, with geometry-derived length.
    pub fn add_road(&mut self, a: NodeId, b: NodeId, highway: Option<&str>, name: Option<&str>) {
        for (from, to) in [(a, b), (b, a)] {
            self.raw.edges.push(RawEdge {
                from,
                to,
                key:     0,
                length:  None,
                highway: highway.map(str::to_owned),
                name:    name.map(str::to_owned),
            });
        }
    }

    pub fn node_count(&self) -> usize { self.raw.nodes.len() }
    pub fn edge_count(&self) -> usize { self.raw.edges.len() }

    /// The accumulated raw graph, without validation.
    pub fn into_raw(self) -> RawGraph {
        self.raw
    }

    /// Validate and produce a [`RoadNetwork`].
    pub fn build(self) -> NetworkResult<RoadNetwork> {
        RoadNetwork::build(self.raw)
    }
}
