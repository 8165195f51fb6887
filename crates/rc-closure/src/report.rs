//! What a closure did.

use rc_core::EdgeKey;
use rc_network::Path;

/// Outcome of one [`close_edge`](crate::ClosureEngine::close_edge) call.
///
/// Always returned inside `Ok`: every status here is an expected operational
/// result, and the caller is expected to inspect it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosureReport {
    /// The edge the caller asked to close.
    pub edge: EdgeKey,
    /// Traffic that was on `edge` when it was closed (0 if none).
    pub displaced: u64,
    pub status: ClosureStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClosureStatus {
    /// The edge was removed and its traffic moved onto `path`.  Every edge of
    /// the path gained the full displaced volume.
    Rerouted { path: Path },

    /// The edge was removed but its endpoints are now disconnected, so the
    /// displaced volume was dropped.
    NoSubstitutePath { discarded: u64 },

    /// The edge was removed; it carried no traffic, so nothing moved.
    NoTraffic,

    /// The edge is not in the current network.  Nothing changed.
    /// `previously_closed` is `true` if the edge exists in the original
    /// network (closed earlier) and `false` if it never existed.
    EdgeNotFound { previously_closed: bool },
}

impl ClosureReport {
    /// `true` if the edge was actually removed by this call.
    pub fn removed(&self) -> bool {
        !matches!(self.status, ClosureStatus::EdgeNotFound { .. })
    }

    /// Volume lost because no substitute path existed.
    pub fn discarded(&self) -> u64 {
        match self.status {
            ClosureStatus::NoSubstitutePath { discarded } => discarded,
            _ => 0,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.status {
            ClosureStatus::Rerouted { path } => Some(path),
            _ => None,
        }
    }
}

impl std::fmt::Display for ClosureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClosureStatus::Rerouted { path } => {
                write!(f, "rerouted over {} edge(s), {:.1} m", path.edges.len(), path.length)
            }
            ClosureStatus::NoSubstitutePath { discarded } => {
                write!(f, "no substitute path, {discarded} vehicle(s) discarded")
            }
            ClosureStatus::NoTraffic => f.write_str("closed, no traffic to move"),
            ClosureStatus::EdgeNotFound { previously_closed: true } => f.write_str("already closed"),
            ClosureStatus::EdgeNotFound { previously_closed: false } => f.write_str("no such edge"),
        }
    }
}
