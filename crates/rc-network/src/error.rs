//! Network-subsystem error type.

use thiserror::Error;

use rc_core::{EdgeKey, NodeId};

/// Errors produced by `rc-network`.
///
/// Everything except [`NoRoute`](Self::NoRoute) and
/// [`NodeNotFound`](Self::NodeNotFound) means the input graph was malformed;
/// see [`is_malformed`](Self::is_malformed).  A malformed input never yields a
/// partial network.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NetworkError {
    #[error("edge {edge} references missing node {missing}")]
    DanglingEdge { edge: EdgeKey, missing: NodeId },

    #[error("node {node} has no {system} coordinates")]
    MissingCoordinates { node: NodeId, system: &'static str },

    #[error("node {node} has non-finite {system} coordinates")]
    NonFiniteCoordinates { node: NodeId, system: &'static str },

    #[error("node {0} defined more than once")]
    DuplicateNode(NodeId),

    #[error("edge {0} defined more than once")]
    DuplicateEdge(EdgeKey),

    #[error("edge {edge} has invalid length {length}")]
    InvalidLength { edge: EdgeKey, length: f64 },

    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("node {0} not found in network")]
    NodeNotFound(NodeId),
}

impl NetworkError {
    /// `true` if the error describes structurally invalid input.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, NetworkError::NoRoute { .. } | NetworkError::NodeNotFound(_))
    }
}

pub type NetworkResult<T> = Result<T, NetworkError>;
