//! Plain data records handed to renderers.

use serde::Serialize;

/// One edge as a two-point line in geographic coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeRecord {
    pub u:   u64,
    pub v:   u64,
    pub key: u32,
    /// `[[lon, lat], [lon, lat]]` of `u` then `v`.
    pub coordinates: [[f64; 2]; 2],
    /// Zero if the edge has no traffic entry.
    pub traffic: u64,
    pub width:   f64,
    pub highway: Option<String>,
    pub name:    String,
}

/// One node as a point in geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeRecord {
    pub id: u64,
    /// `[lon, lat]`.
    pub coordinates: [f64; 2],
}
