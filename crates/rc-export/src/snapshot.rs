//! Network + traffic → flat display records.

use serde::Serialize;

use rc_network::RoadNetwork;
use rc_traffic::TrafficAssignment;

use crate::{EdgeRecord, ExportOptions, NodeRecord};

/// Everything a renderer needs to draw one network state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub edges: Vec<EdgeRecord>,
    pub nodes: Vec<NodeRecord>,
}

impl Snapshot {
    /// Sum of exported edge traffic.
    pub fn total_traffic(&self) -> u64 {
        self.edges.iter().fold(0u64, |acc, e| acc.saturating_add(e.traffic))
    }
}

/// Display width for a traffic volume: `base_width + traffic / width_divisor`.
///
/// A divisor that is zero, negative, or not finite leaves every edge at
/// `base_width`.
#[inline]
pub fn display_width(traffic: u64, options: &ExportOptions) -> f64 {
    let divisor = options.width_divisor;
    if divisor.is_finite() && divisor > 0.0 {
        options.base_width + traffic as f64 / divisor
    } else {
        options.base_width
    }
}

/// Project `network` and `traffic` into a [`Snapshot`].
///
/// Edges come out in `(u, v, key)` order and nodes in id order.  Edges missing
/// from `traffic` export a volume of zero.
pub fn export(network: &RoadNetwork, traffic: &TrafficAssignment, options: &ExportOptions) -> Snapshot {
    let mut edges = Vec::with_capacity(network.edge_count());
    for edge in network.edges() {
        // A built network only holds edges between its own nodes.
        let (Some(a), Some(b)) = (network.node(edge.key.from), network.node(edge.key.to)) else {
            continue;
        };
        let volume = traffic.volume(edge.key);
        edges.push(EdgeRecord {
            u:           edge.key.from.0,
            v:           edge.key.to.0,
            key:         edge.key.key,
            coordinates: [a.geo.lon_lat(), b.geo.lon_lat()],
            traffic:     volume,
            width:       display_width(volume, options),
            highway:     edge.highway.clone(),
            name:        edge.name.clone().unwrap_or_else(|| options.unnamed_placeholder.clone()),
        });
    }

    let nodes = if options.include_nodes {
        network
            .nodes()
            .map(|n| NodeRecord { id: n.id.0, coordinates: n.geo.lon_lat() })
            .collect()
    } else {
        Vec::new()
    };

    Snapshot { edges, nodes }
}
