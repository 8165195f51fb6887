//! Raw graph as delivered by the map-data collaborator.
//!
//! Every field the source may omit is an `Option`; [`RoadNetwork::build`]
//! decides which omissions are fatal:
//!
//! | Field              | When absent                                       |
//! |--------------------|---------------------------------------------------|
//! | `RawNode::planar`  | `NetworkError::MissingCoordinates`                |
//! | `RawNode::geo`     | `NetworkError::MissingCoordinates`                |
//! | `RawEdge::length`  | planar distance between the endpoints             |
//! | `RawEdge::highway` | unclassified (factor 1.0 in traffic synthesis)    |
//! | `RawEdge::name`    | exported with a placeholder name                  |
//!
//! [`RoadNetwork::build`]: crate::RoadNetwork::build

use rc_core::{GeoPoint, NodeId, PlanarPoint};

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawGraph {
    pub nodes: Vec<RawNode>,
    pub edges: Vec<RawEdge>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawNode {
    pub id: NodeId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub planar: Option<PlanarPoint>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub geo: Option<GeoPoint>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawEdge {
    pub from: NodeId,
    pub to:   NodeId,
    /// Parallel-edge disambiguator.  Defaults to 0.
    #[cfg_attr(feature = "serde", serde(default))]
    pub key:  u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub length: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub highway: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
}

impl RawNode {
    pub fn new(id: NodeId, planar: PlanarPoint, geo: GeoPoint) -> Self {
        Self { id, planar: Some(planar), geo: Some(geo) }
    }
}

impl RawEdge {
    /// An unclassified, unnamed edge whose length is derived from geometry.
    pub fn new(from: NodeId, to: NodeId, key: u32) -> Self {
        Self { from, to, key, length: None, highway: None, name: None }
    }

    pub fn with_length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_highway(mut self, highway: impl Into<String>) -> Self {
        self.highway = Some(highway.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
