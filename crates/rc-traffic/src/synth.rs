//! Synthetic initial traffic.

use tracing::{debug, warn};

use rc_core::{SimRng, TrafficConfig};
use rc_network::RoadNetwork;

use crate::centrality::{EdgeCentrality, edge_betweenness, uniform_centrality};
use crate::{RoadClass, TrafficAssignment, TrafficError, TrafficResult};

/// Output of one synthesis run.
#[derive(Clone, Debug)]
pub struct Synthesis {
    /// One volume per edge of the input network.
    pub traffic: TrafficAssignment,
    /// Sampled edge betweenness, or a uniform `1.0` per edge if it could not
    /// be computed.  Not folded into `traffic`.
    pub centrality: EdgeCentrality,
    /// `true` if `centrality` is the uniform fallback.
    pub centrality_fallback: bool,
}

/// Assigns a starting volume to every edge of a network.
///
/// Holds only configuration; randomness comes from the [`SimRng`] passed to
/// [`synthesize`](Self::synthesize), so the same seed on the same network
/// reproduces the same assignment.
#[derive(Clone, Debug)]
pub struct TrafficSynthesizer {
    config: TrafficConfig,
}

impl TrafficSynthesizer {
    /// # Errors
    ///
    /// [`TrafficError::InvalidConfig`] if `config` fails validation.
    pub fn new(config: TrafficConfig) -> TrafficResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TrafficConfig {
        &self.config
    }

    /// Draw a complete traffic assignment for `network`.
    ///
    /// Centrality is computed first (consuming draws for source sampling),
    /// then every edge in ascending key order draws its base volume and its
    /// jitter.
    ///
    /// # Errors
    ///
    /// [`TrafficError::NonFiniteVolume`] if a volume cannot be represented.
    /// A centrality failure is not an error; it selects the uniform fallback.
    pub fn synthesize(&self, network: &RoadNetwork, rng: &mut SimRng) -> TrafficResult<Synthesis> {
        let cfg = &self.config;

        let (centrality, centrality_fallback) =
            match edge_betweenness(network, cfg.centrality_sample, rng) {
                Ok(scores) => (scores, false),
                Err(e) => {
                    warn!(reason = %e, "edge betweenness unavailable; using uniform centrality");
                    (uniform_centrality(network), true)
                }
            };

        let clamp_min = cfg.volume_clamp.min as f64;
        let clamp_max = cfg.volume_clamp.max as f64;

        let mut traffic = TrafficAssignment::new();
        for edge in network.edges() {
            let base = rng.gen_range(cfg.base_volume.min..=cfg.base_volume.max);
            let factor = RoadClass::from_label(edge.highway.as_deref()).factor();
            let jitter = rng.gen_range(cfg.jitter.min..=cfg.jitter.max);

            let raw = base as f64 * factor * jitter;
            if !raw.is_finite() {
                return Err(TrafficError::NonFiniteVolume { edge: edge.key, value: raw });
            }
            traffic.insert(edge.key, raw.clamp(clamp_min, clamp_max) as u64);
        }

        debug!(
            edges = traffic.len(),
            total = traffic.total(),
            centrality_fallback,
            "traffic synthesized"
        );

        Ok(Synthesis { traffic, centrality, centrality_fallback })
    }
}
