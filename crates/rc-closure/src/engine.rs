//! Closure and redistribution.
//!
//! # Contract
//!
//! ```text
//! close_edge(original, modified, traffic, edge)
//!   1. next = modified.clone(); remove edge from next
//!        absent → EdgeNotFound, nothing changes
//!   2. displaced = traffic[edge] (absent = 0); drop the entry
//!   3. displaced > 0: shortest path edge.from → edge.to in next
//!        found   → every path edge gains the full displaced volume
//!        missing → displaced volume is discarded
//!        empty   → (self-loop) likewise discarded
//! ```
//!
//! Inputs are never mutated; the caller swaps the returned state in.  The
//! rerouted volume is not split across alternatives, so heavily used
//! substitutes can exceed any single edge's synthetic clamp.

use tracing::{debug, warn};

use rc_core::{EdgeKey, SimRng};
use rc_network::{DijkstraRouter, NetworkError, RoadNetwork, Router};
use rc_traffic::{Synthesis, TrafficAssignment, TrafficResult, TrafficSynthesizer};

use crate::{ClosureReport, ClosureStatus, SessionResult};

/// New state produced by a closure.
#[derive(Debug, Clone)]
pub struct ClosureOutcome {
    pub network: RoadNetwork,
    pub traffic: TrafficAssignment,
    pub report:  ClosureReport,
}

/// Stateless closure engine, generic over the substitute-path strategy.
#[derive(Debug, Clone, Default)]
pub struct ClosureEngine<R: Router = DijkstraRouter> {
    router: R,
}

impl<R: Router> ClosureEngine<R> {
    pub fn new(router: R) -> Self {
        Self { router }
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    /// Close `edge` in a copy of `modified` and move its traffic.
    ///
    /// `original` is only consulted to tell an already-closed edge from one
    /// that never existed.
    ///
    /// # Errors
    ///
    /// Only a router failure other than "no route" is an error (e.g. a
    /// custom router reporting an unknown node).  Missing edges and
    /// disconnected endpoints are reported through [`ClosureStatus`].
    pub fn close_edge(
        &self,
        original: &RoadNetwork,
        modified: &RoadNetwork,
        traffic:  &TrafficAssignment,
        edge:     EdgeKey,
    ) -> SessionResult<ClosureOutcome> {
        let mut network = modified.clone();
        let mut traffic = traffic.clone();

        if !network.remove_edge(edge) {
            let previously_closed = original.contains_edge(edge);
            warn!(%edge, previously_closed, "closure requested for an edge not in the network");
            return Ok(ClosureOutcome {
                network,
                traffic,
                report: ClosureReport {
                    edge,
                    displaced: 0,
                    status: ClosureStatus::EdgeNotFound { previously_closed },
                },
            });
        }

        let displaced = traffic.remove(edge).unwrap_or(0);

        let status = if displaced == 0 {
            ClosureStatus::NoTraffic
        } else {
            match self.router.shortest_path(&network, edge.from, edge.to) {
                // A self-loop routes to itself over no edges: nothing can
                // carry the volume.
                Ok(path) if path.is_trivial() => {
                    warn!(%edge, discarded = displaced, "closed a self-loop; displaced traffic dropped");
                    ClosureStatus::NoSubstitutePath { discarded: displaced }
                }
                Ok(path) => {
                    for &step in &path.edges {
                        traffic.add(step, displaced);
                    }
                    debug!(
                        %edge,
                        displaced,
                        hops = path.edges.len(),
                        length = path.length,
                        "traffic rerouted"
                    );
                    ClosureStatus::Rerouted { path }
                }
                Err(NetworkError::NoRoute { .. }) => {
                    warn!(%edge, discarded = displaced, "no substitute path; displaced traffic dropped");
                    ClosureStatus::NoSubstitutePath { discarded: displaced }
                }
                Err(e) => return Err(e.into()),
            }
        };

        Ok(ClosureOutcome {
            network,
            traffic,
            report: ClosureReport { edge, displaced, status },
        })
    }

    /// Fresh copy of `original` with newly drawn traffic.
    ///
    /// Draws continue from `rng`; the result is a new sample, not a replay of
    /// the first assignment.
    pub fn reset(
        &self,
        original:    &RoadNetwork,
        synthesizer: &TrafficSynthesizer,
        rng:         &mut SimRng,
    ) -> TrafficResult<(RoadNetwork, Synthesis)> {
        let synthesis = synthesizer.synthesize(original, rng)?;
        Ok((original.clone(), synthesis))
    }
}
