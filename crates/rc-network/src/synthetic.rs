//! Synthetic lattice networks for demos and tests.
//!
//! A `rows × cols` grid of two-way streets centred on a geographic point.
//! Node `(i, j)` (column `i`, row `j`) gets id `i * rows + j` and sits at
//!
//! ```text
//! lon = center.lon + (i - cols / 2) * spacing_deg
//! lat = center.lat + (j - rows / 2) * spacing_deg
//! ```
//!
//! Planar coordinates are metres from the centre under an equirectangular
//! approximation, computed here once so the network itself never projects.

use rc_core::{GeoPoint, NodeId, PlanarPoint};

use crate::network::{RoadNetwork, RoadNetworkBuilder};
use crate::raw::RawEdge;
use crate::NetworkResult;

/// Mean Earth radius, metres.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Shape of a synthetic grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridSpec {
    pub rows:        u32,
    pub cols:        u32,
    pub center:      GeoPoint,
    pub spacing_deg: f64,
}

impl GridSpec {
    /// Central Jakarta, the default map centre.
    pub const DEFAULT_CENTER: GeoPoint = GeoPoint { lon: 106.8456, lat: -6.2088 };

    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols, ..Self::default() }
    }

    pub fn centered_on(mut self, center: GeoPoint) -> Self {
        self.center = center;
        self
    }

    /// Node and directed-edge counts, saturating instead of overflowing.
    pub(crate) fn capacity(&self) -> (usize, usize) {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let nodes = rows.saturating_mul(cols);
        let edges = rows
            .saturating_sub(1)
            .saturating_mul(cols)
            .saturating_add(cols.saturating_sub(1).saturating_mul(rows))
            .saturating_mul(2);
        (nodes, edges)
    }

    fn node_id(&self, i: u32, j: u32) -> NodeId {
        NodeId(u64::from(i) * u64::from(self.rows) + u64::from(j))
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self { rows: 10, cols: 10, center: Self::DEFAULT_CENTER, spacing_deg: 0.001 }
    }
}

/// Build the grid described by `spec`.
///
/// Every street is a key-0 edge in both directions, classified `"road"` and
/// named `"Road {u}-{v}"`, with length taken from the planar coordinates.
pub fn synthetic_grid(spec: &GridSpec) -> NetworkResult<RoadNetwork> {
    let GridSpec { rows, cols, center, spacing_deg } = *spec;
    let lat0 = center.lat.to_radians();

    let (node_cap, edge_cap) = spec.capacity();
    let mut b = RoadNetworkBuilder::with_capacity(node_cap, edge_cap);

    for i in 0..cols {
        for j in 0..rows {
            let d_lon = (f64::from(i) - f64::from(cols / 2)) * spacing_deg;
            let d_lat = (f64::from(j) - f64::from(rows / 2)) * spacing_deg;
            let geo = GeoPoint::new(center.lon + d_lon, center.lat + d_lat);
            let planar = PlanarPoint::new(
                EARTH_RADIUS_M * d_lon.to_radians() * lat0.cos(),
                EARTH_RADIUS_M * d_lat.to_radians(),
            );
            b.add_node(spec.node_id(i, j), planar, geo);
        }
    }

    for i in 0..cols {
        for j in 0..rows {
            let u = spec.node_id(i, j);
            let mut adjacent = Vec::with_capacity(2);
            if i + 1 < cols {
                adjacent.push(spec.node_id(i + 1, j));
            }
            if j + 1 < rows {
                adjacent.push(spec.node_id(i, j + 1));
            }
            for v in adjacent {
                for (from, to) in [(u, v), (v, u)] {
                    b.add_edge(
                        RawEdge::new(from, to, 0)
                            .with_highway("road")
                            .with_name(format!("Road {}-{}", from.0, to.0)),
                    );
                }
            }
        }
    }

    b.build()
}
