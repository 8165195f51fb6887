//! One simulation: an original network, its working copy, and the traffic on
//! it.

use tracing::info;

use rc_core::{EdgeKey, SessionId, SimRng, TrafficConfig};
use rc_export::{ExportOptions, Snapshot, export};
use rc_network::{DijkstraRouter, RawGraph, RoadNetwork, Router};
use rc_traffic::{EdgeCentrality, TrafficAssignment, TrafficSynthesizer};

use crate::{ClosureEngine, ClosureReport, SessionResult};

// ── Session ───────────────────────────────────────────────────────────────────

/// Original network, modified network, and current traffic, bundled.
///
/// Every mutating call computes the complete next state first and only then
/// replaces the current one, so a failed call leaves the session untouched.
///
/// Create via [`SessionBuilder`].
#[derive(Debug)]
pub struct Session<R: Router = DijkstraRouter> {
    id:          SessionId,
    original:    RoadNetwork,
    modified:    RoadNetwork,
    traffic:     TrafficAssignment,
    centrality:  EdgeCentrality,
    /// `true` if `centrality` is the uniform fallback.
    centrality_fallback: bool,
    synthesizer: TrafficSynthesizer,
    engine:      ClosureEngine<R>,
    rng:         SimRng,
    /// Edges removed so far, in closure order.
    closed:      Vec<EdgeKey>,
}

impl<R: Router> Session<R> {
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The network as loaded.  Never mutated.
    pub fn original(&self) -> &RoadNetwork {
        &self.original
    }

    /// The network with all closures so far applied.
    pub fn network(&self) -> &RoadNetwork {
        &self.modified
    }

    pub fn traffic(&self) -> &TrafficAssignment {
        &self.traffic
    }

    /// Edge betweenness from the latest synthesis.  Informational only: it
    /// plays no part in the volumes.
    pub fn centrality(&self) -> &EdgeCentrality {
        &self.centrality
    }

    pub fn centrality_fallback(&self) -> bool {
        self.centrality_fallback
    }

    pub fn config(&self) -> &TrafficConfig {
        self.synthesizer.config()
    }

    pub fn closed_edges(&self) -> &[EdgeKey] {
        &self.closed
    }

    /// Close `edge` and redistribute its traffic.
    ///
    /// # Errors
    ///
    /// See [`ClosureEngine::close_edge`].  Closing an absent edge is not an
    /// error; the report says so.
    pub fn close_edge(&mut self, edge: EdgeKey) -> SessionResult<ClosureReport> {
        let outcome = self.engine.close_edge(&self.original, &self.modified, &self.traffic, edge)?;

        debug_assert!(
            outcome.traffic.covers(&outcome.network),
            "session {} traffic out of sync with network after closing {edge}",
            self.id
        );

        self.modified = outcome.network;
        self.traffic = outcome.traffic;
        if outcome.report.removed() {
            self.closed.push(edge);
        }
        Ok(outcome.report)
    }

    /// Undo every closure and draw new traffic for the original network.
    ///
    /// # Errors
    ///
    /// [`SessionError::Traffic`](crate::SessionError::Traffic) if synthesis
    /// fails; the session, including its RNG position, is then unchanged.
    pub fn reset(&mut self) -> SessionResult<()> {
        let mut rng = self.rng.clone();
        let (network, synthesis) = self.engine.reset(&self.original, &self.synthesizer, &mut rng)?;

        let reopened = self.closed.len();
        self.modified = network;
        self.traffic = synthesis.traffic;
        self.centrality = synthesis.centrality;
        self.centrality_fallback = synthesis.centrality_fallback;
        self.rng = rng;
        self.closed.clear();

        info!(session = %self.id, reopened, total = self.traffic.total(), "session reset");
        Ok(())
    }

    /// Render-ready view of the current state.
    pub fn snapshot(&self, options: &ExportOptions) -> Snapshot {
        export(&self.modified, &self.traffic, options)
    }
}

// ── SessionBuilder ────────────────────────────────────────────────────────────

enum Source {
    Raw(RawGraph),
    Network(RoadNetwork),
}

/// Fluent builder for [`Session<R>`].
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                           |
/// |----------------|-----------------------------------|
/// | `.config(c)`   | `TrafficConfig::default()`        |
/// | `.router(r)`   | `DijkstraRouter`                  |
/// | `.rng(r)`      | `SimRng::new(config.seed)`        |
/// | `.id(i)`       | `SessionId(0)`                    |
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::new(raw_graph)
///     .config(TrafficConfig { seed: 7, ..Default::default() })
///     .build()?;
/// let report = session.close_edge(EdgeKey::new(a, b, 0))?;
/// ```
pub struct SessionBuilder<R: Router = DijkstraRouter> {
    source: Source,
    config: TrafficConfig,
    router: R,
    rng:    Option<SimRng>,
    id:     SessionId,
}

impl SessionBuilder {
    /// Start from unvalidated map data.
    pub fn new(raw: RawGraph) -> Self {
        Self::with_source(Source::Raw(raw))
    }

    /// Start from an already built network.
    pub fn from_network(network: RoadNetwork) -> Self {
        Self::with_source(Source::Network(network))
    }

    fn with_source(source: Source) -> Self {
        Self {
            source,
            config: TrafficConfig::default(),
            router: DijkstraRouter,
            rng:    None,
            id:     SessionId(0),
        }
    }
}

impl<R: Router> SessionBuilder<R> {
    pub fn config(mut self, config: TrafficConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the substitute-path strategy.
    pub fn router<R2: Router>(self, router: R2) -> SessionBuilder<R2> {
        SessionBuilder {
            source: self.source,
            config: self.config,
            router,
            rng:    self.rng,
            id:     self.id,
        }
    }

    /// Supply the random source instead of seeding one from the config.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn id(mut self, id: SessionId) -> Self {
        self.id = id;
        self
    }

    /// Validate config and network, then synthesize the first traffic
    /// assignment.
    ///
    /// # Errors
    ///
    /// [`SessionError::Network`](crate::SessionError::Network) for malformed
    /// map data, [`SessionError::Traffic`](crate::SessionError::Traffic) for
    /// an invalid config or a failed synthesis.
    pub fn build(self) -> SessionResult<Session<R>> {
        let synthesizer = TrafficSynthesizer::new(self.config)?;
        let original = match self.source {
            Source::Raw(raw) => RoadNetwork::build(raw)?,
            Source::Network(network) => network,
        };
        let mut rng = self.rng.unwrap_or_else(|| SimRng::new(synthesizer.config().seed));
        let synthesis = synthesizer.synthesize(&original, &mut rng)?;

        info!(
            session = %self.id,
            nodes = original.node_count(),
            edges = original.edge_count(),
            total = synthesis.traffic.total(),
            centrality_fallback = synthesis.centrality_fallback,
            "session created"
        );

        Ok(Session {
            id:          self.id,
            modified:    original.clone(),
            original,
            traffic:     synthesis.traffic,
            centrality:  synthesis.centrality,
            centrality_fallback: synthesis.centrality_fallback,
            synthesizer,
            engine:      ClosureEngine::new(self.router),
            rng,
            closed:      Vec::new(),
        })
    }
}
