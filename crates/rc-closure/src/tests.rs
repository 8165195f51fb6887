//! Unit tests for rc-closure.

#[cfg(test)]
mod helpers {
    use rc_core::{EdgeKey, GeoPoint, NodeId, PlanarPoint};
    use rc_network::{GridSpec, RawEdge, RoadNetwork, RoadNetworkBuilder, synthetic_grid};
    use rc_traffic::TrafficAssignment;

    pub const A: NodeId = NodeId(1);
    pub const B: NodeId = NodeId(2);
    pub const C: NodeId = NodeId(3);

    pub fn ab() -> EdgeKey { EdgeKey::new(A, B, 0) }
    pub fn ac() -> EdgeKey { EdgeKey::new(A, C, 0) }
    pub fn cb() -> EdgeKey { EdgeKey::new(C, B, 0) }

    fn builder() -> RoadNetworkBuilder {
        let mut b = RoadNetworkBuilder::new();
        b.add_node(A, PlanarPoint::new(0.0, 0.0), GeoPoint::new(106.000, -6.000));
        b.add_node(B, PlanarPoint::new(10.0, 0.0), GeoPoint::new(106.001, -6.000));
        b.add_node(C, PlanarPoint::new(5.0, 6.0), GeoPoint::new(106.0005, -5.9995));
        b
    }

    /// A→B (10 m) with the detour A→C→B (8 m + 9 m).
    pub fn triangle() -> RoadNetwork {
        let mut b = builder();
        b.add_edge(RawEdge::new(A, B, 0).with_length(10.0));
        b.add_edge(RawEdge::new(A, C, 0).with_length(8.0));
        b.add_edge(RawEdge::new(C, B, 0).with_length(9.0));
        b.build().unwrap()
    }

    pub fn triangle_traffic() -> TrafficAssignment {
        [(ab(), 300), (ac(), 50), (cb(), 60)].into_iter().collect()
    }

    /// The single road A→B and nothing else between A and B.
    pub fn single_road() -> RoadNetwork {
        let mut b = builder();
        b.add_edge(RawEdge::new(A, B, 0).with_length(10.0));
        b.build().unwrap()
    }

    pub fn grid() -> RoadNetwork {
        synthetic_grid(&GridSpec::new(4, 4)).unwrap()
    }
}

// ── ClosureEngine ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use rc_core::{EdgeKey, NodeId};
    use rc_network::{DijkstraRouter, NetworkError, NetworkResult, Path, RawEdge, RoadNetwork, Router};
    use rc_traffic::TrafficAssignment;

    use super::helpers::*;
    use crate::{ClosureEngine, ClosureStatus, SessionError};

    fn engine() -> ClosureEngine {
        ClosureEngine::new(DijkstraRouter)
    }

    #[test]
    fn detour_gains_full_volume() {
        let net = triangle();
        let out = engine().close_edge(&net, &net, &triangle_traffic(), ab()).unwrap();

        assert_eq!(out.traffic.get(ac()), Some(350));
        assert_eq!(out.traffic.get(cb()), Some(360));
        assert_eq!(out.traffic.get(ab()), None);
        assert!(!out.network.contains_edge(ab()));

        assert_eq!(out.report.displaced, 300);
        let path = out.report.path().unwrap();
        assert_eq!(path.edges, vec![ac(), cb()]);
        assert_eq!(path.length, 17.0);
    }

    #[test]
    fn single_road_loses_its_traffic() {
        let net = single_road();
        let traffic: TrafficAssignment = [(ab(), 300)].into_iter().collect();
        let out = engine().close_edge(&net, &net, &traffic, ab()).unwrap();

        assert!(out.traffic.is_empty());
        assert_eq!(out.network.edge_count(), 0);
        assert_eq!(out.report.status, ClosureStatus::NoSubstitutePath { discarded: 300 });
        assert_eq!(out.report.discarded(), 300);
    }

    #[test]
    fn disconnected_total_drops_by_exactly_displaced() {
        let mut b = rc_network::RoadNetworkBuilder::new();
        for (id, x) in [(A, 0.0), (B, 10.0), (C, 20.0)] {
            b.add_node(id, rc_core::PlanarPoint::new(x, 0.0), rc_core::GeoPoint::new(x, 0.0));
        }
        b.add_edge(RawEdge::new(A, B, 0));
        b.add_edge(RawEdge::new(C, A, 0));
        let net = b.build().unwrap();
        let ca = EdgeKey::new(C, A, 0);
        let traffic: TrafficAssignment = [(ab(), 120), (ca, 40)].into_iter().collect();

        let out = engine().close_edge(&net, &net, &traffic, ab()).unwrap();
        assert_eq!(out.traffic.total(), traffic.total() - 120);
        assert_eq!(out.traffic.get(ca), Some(40));
    }

    #[test]
    fn inputs_are_not_mutated() {
        let original = triangle();
        let modified = original.clone();
        let traffic = triangle_traffic();
        engine().close_edge(&original, &modified, &traffic, ab()).unwrap();

        assert!(original.contains_edge(ab()));
        assert!(modified.contains_edge(ab()));
        assert_eq!(traffic, triangle_traffic());
    }

    #[test]
    fn closing_twice_is_a_no_op() {
        let original = triangle();
        let first = engine().close_edge(&original, &original, &triangle_traffic(), ab()).unwrap();
        let second = engine()
            .close_edge(&original, &first.network, &first.traffic, ab())
            .unwrap();

        assert_eq!(second.report.status, ClosureStatus::EdgeNotFound { previously_closed: true });
        assert!(!second.report.removed());
        assert_eq!(second.traffic, first.traffic);
        assert_eq!(
            second.network.edge_keys().collect::<Vec<_>>(),
            first.network.edge_keys().collect::<Vec<_>>()
        );
    }

    #[test]
    fn unknown_edge_never_existed() {
        let net = triangle();
        let bogus = EdgeKey::new(B, A, 0);
        let out = engine().close_edge(&net, &net, &triangle_traffic(), bogus).unwrap();
        assert_eq!(out.report.status, ClosureStatus::EdgeNotFound { previously_closed: false });
        assert_eq!(out.traffic, triangle_traffic());
        assert_eq!(out.network.edge_count(), 3);
    }

    #[test]
    fn zero_volume_moves_nothing() {
        let net = triangle();
        let traffic: TrafficAssignment = [(ab(), 0), (ac(), 50), (cb(), 60)].into_iter().collect();
        let out = engine().close_edge(&net, &net, &traffic, ab()).unwrap();

        assert_eq!(out.report.status, ClosureStatus::NoTraffic);
        assert_eq!(out.traffic.get(ac()), Some(50));
        assert_eq!(out.traffic.get(cb()), Some(60));
        assert_eq!(out.traffic.get(ab()), None);
    }

    #[test]
    fn parallel_edge_takes_the_load() {
        let mut b = rc_network::RoadNetworkBuilder::new();
        b.add_node(A, rc_core::PlanarPoint::new(0.0, 0.0), rc_core::GeoPoint::new(0.0, 0.0));
        b.add_node(B, rc_core::PlanarPoint::new(10.0, 0.0), rc_core::GeoPoint::new(0.001, 0.0));
        b.add_edge(RawEdge::new(A, B, 0).with_length(10.0));
        b.add_edge(RawEdge::new(A, B, 1).with_length(12.0));
        let net = b.build().unwrap();
        let ab1 = EdgeKey::new(A, B, 1);
        let traffic: TrafficAssignment = [(ab(), 100), (ab1, 5)].into_iter().collect();

        let out = engine().close_edge(&net, &net, &traffic, ab()).unwrap();
        assert_eq!(out.traffic.get(ab1), Some(105));
        assert!(out.traffic.covers(&out.network));
    }

    #[test]
    fn sparse_traffic_map_is_accepted() {
        let mut b = rc_network::RoadNetworkBuilder::new();
        for (id, x) in [(1, 0.0), (2, 10.0), (3, 20.0), (4, 30.0)] {
            b.add_node(NodeId(id), rc_core::PlanarPoint::new(x, 0.0), rc_core::GeoPoint::new(x, 0.0));
        }
        b.add_edge(RawEdge::new(NodeId(1), NodeId(2), 0));
        b.add_edge(RawEdge::new(NodeId(3), NodeId(4), 0));
        let net = b.build().unwrap();
        let closed = EdgeKey::new(NodeId(1), NodeId(2), 0);
        let untouched = EdgeKey::new(NodeId(3), NodeId(4), 0);
        let traffic: TrafficAssignment = [(closed, 100)].into_iter().collect();

        let out = engine().close_edge(&net, &net, &traffic, closed).unwrap();
        assert_eq!(out.report.status, ClosureStatus::NoSubstitutePath { discarded: 100 });
        assert!(out.traffic.is_empty());
        assert_eq!(out.traffic.get(untouched), None, "absent entries stay absent");
        assert!(out.network.contains_edge(untouched));
    }

    #[test]
    fn self_loop_reports_discarded_volume() {
        let mut b = rc_network::RoadNetworkBuilder::new();
        b.add_node(A, rc_core::PlanarPoint::new(0.0, 0.0), rc_core::GeoPoint::new(0.0, 0.0));
        b.add_edge(RawEdge::new(A, A, 0).with_length(25.0));
        let net = b.build().unwrap();
        let aa = EdgeKey::new(A, A, 0);
        let traffic: TrafficAssignment = [(aa, 100)].into_iter().collect();

        let out = engine().close_edge(&net, &net, &traffic, aa).unwrap();
        assert_eq!(out.report.status, ClosureStatus::NoSubstitutePath { discarded: 100 });
        assert_eq!(out.report.discarded(), 100);
        assert!(out.report.path().is_none());
        assert_eq!(out.traffic.total(), 0);
    }

    struct BrokenRouter;

    impl Router for BrokenRouter {
        fn shortest_path(&self, _: &RoadNetwork, from: NodeId, _: NodeId) -> NetworkResult<Path> {
            Err(NetworkError::NodeNotFound(from))
        }
    }

    #[test]
    fn router_failure_is_an_error() {
        let net = triangle();
        let err = ClosureEngine::new(BrokenRouter)
            .close_edge(&net, &net, &triangle_traffic(), ab())
            .unwrap_err();
        assert_eq!(err, SessionError::Network(NetworkError::NodeNotFound(A)));
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod session {
    use rc_core::{EdgeKey, GeoPoint, NodeId, PlanarPoint, TrafficConfig, VolumeRange};
    use rc_export::ExportOptions;
    use rc_network::{RawEdge, RawGraph, RawNode};
    use rc_traffic::TrafficError;

    use super::helpers::*;
    use crate::{ClosureStatus, SessionBuilder, SessionError};

    #[test]
    fn initial_traffic_covers_network_within_clamp() {
        let s = SessionBuilder::from_network(grid()).build().unwrap();
        assert!(s.traffic().covers(s.network()));
        assert!(s.traffic().iter().all(|(_, v)| (10..=1000).contains(&v)));
        assert_eq!(s.centrality().len(), s.network().edge_count());
    }

    #[test]
    fn malformed_map_data_is_rejected() {
        let raw = RawGraph {
            nodes: vec![RawNode::new(A, PlanarPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.0))],
            edges: vec![RawEdge::new(A, B, 0)],
        };
        let err = SessionBuilder::new(raw).build().unwrap_err();
        match err {
            SessionError::Network(e) => assert!(e.is_malformed()),
            other => panic!("expected network error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = TrafficConfig {
            volume_clamp: VolumeRange { min: 500, max: 100 },
            ..TrafficConfig::default()
        };
        let err = SessionBuilder::from_network(grid()).config(config).build().unwrap_err();
        assert!(matches!(err, SessionError::Traffic(TrafficError::InvalidConfig(_))));
    }

    #[test]
    fn same_seed_same_traffic() {
        let a = SessionBuilder::from_network(grid()).build().unwrap();
        let b = SessionBuilder::from_network(grid()).build().unwrap();
        assert_eq!(a.traffic(), b.traffic());
    }

    #[test]
    fn rerouted_edges_gain_exactly_the_displaced_volume() {
        let mut s = SessionBuilder::from_network(grid()).build().unwrap();
        let edge = EdgeKey::new(NodeId(0), NodeId(1), 0);
        let before = s.traffic().clone();

        let report = s.close_edge(edge).unwrap();
        let v = before.volume(edge);
        assert_eq!(report.displaced, v);
        assert!(s.traffic().get(edge).is_none());

        let path = report.path().expect("grid has a detour");
        for &e in &path.edges {
            assert_eq!(s.traffic().volume(e), before.volume(e) + v);
        }
        for (e, vol) in s.traffic().iter() {
            if !path.edges.contains(&e) {
                assert_eq!(vol, before.volume(e));
            }
        }
    }

    #[test]
    fn history_only_records_real_closures() {
        let mut s = SessionBuilder::from_network(grid()).build().unwrap();
        let edge = EdgeKey::new(NodeId(0), NodeId(1), 0);
        s.close_edge(edge).unwrap();
        let again = s.close_edge(edge).unwrap();
        assert_eq!(again.status, ClosureStatus::EdgeNotFound { previously_closed: true });
        assert_eq!(s.closed_edges(), &[edge]);
    }

    #[test]
    fn reset_restores_topology_and_redraws() {
        let mut s = SessionBuilder::from_network(grid()).build().unwrap();
        let initial = s.traffic().clone();
        for (u, v) in [(0, 1), (1, 2), (5, 6), (4, 8)] {
            s.close_edge(EdgeKey::new(NodeId(u), NodeId(v), 0)).unwrap();
        }
        assert_eq!(s.network().edge_count(), s.original().edge_count() - 4);

        s.reset().unwrap();
        assert_eq!(
            s.network().edge_keys().collect::<Vec<_>>(),
            s.original().edge_keys().collect::<Vec<_>>()
        );
        assert!(s.closed_edges().is_empty());
        assert!(s.traffic().covers(s.network()));
        assert_ne!(s.traffic(), &initial, "reset draws new traffic");
    }

    #[test]
    fn original_is_never_mutated() {
        let mut s = SessionBuilder::from_network(triangle()).build().unwrap();
        s.close_edge(ab()).unwrap();
        assert!(s.original().contains_edge(ab()));
        assert!(s.network().shares_nodes_with(s.original()));
    }

    #[test]
    fn snapshot_tracks_current_state() {
        let mut s = SessionBuilder::from_network(triangle()).build().unwrap();
        s.close_edge(ab()).unwrap();
        let snap = s.snapshot(&ExportOptions::default());
        assert_eq!(snap.edges.len(), 2);
        assert_eq!(snap.total_traffic(), s.traffic().total());
    }
}

// ── SessionRegistry ───────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use rc_core::{EdgeKey, NodeId, SessionId};
    use rc_export::ExportOptions;

    use super::helpers::*;
    use crate::{SessionBuilder, SessionError, SessionRegistry};

    #[test]
    fn create_assigns_distinct_ids() {
        let reg: SessionRegistry = SessionRegistry::new();
        let a = reg.create(SessionBuilder::from_network(triangle())).unwrap();
        let b = reg.create(SessionBuilder::from_network(triangle())).unwrap();
        assert_ne!(a, b);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.ids(), vec![a, b]);
        assert_eq!(reg.with_session(a, |s| Ok(s.id())).unwrap(), a);
    }

    #[test]
    fn unknown_session() {
        let reg: SessionRegistry = SessionRegistry::new();
        let missing = SessionId(99);
        assert_eq!(reg.close_edge(missing, ab()).unwrap_err(), SessionError::SessionNotFound(missing));
        assert_eq!(reg.reset(missing).unwrap_err(), SessionError::SessionNotFound(missing));
        assert!(reg.snapshot(missing, &ExportOptions::default()).is_err());
    }

    #[test]
    fn sessions_are_isolated() {
        let reg: SessionRegistry = SessionRegistry::new();
        let a = reg.create(SessionBuilder::from_network(triangle())).unwrap();
        let b = reg.create(SessionBuilder::from_network(triangle())).unwrap();
        reg.close_edge(a, ab()).unwrap();

        let a_edges = reg.with_session(a, |s| Ok(s.network().edge_count())).unwrap();
        let b_edges = reg.with_session(b, |s| Ok(s.network().edge_count())).unwrap();
        assert_eq!((a_edges, b_edges), (2, 3));
    }

    #[test]
    fn remove_drops_session() {
        let reg: SessionRegistry = SessionRegistry::new();
        let id = reg.create(SessionBuilder::from_network(triangle())).unwrap();
        assert!(reg.remove(id));
        assert!(!reg.remove(id));
        assert!(reg.is_empty());
        assert!(matches!(reg.reset(id), Err(SessionError::SessionNotFound(_))));
    }

    #[test]
    fn concurrent_closures_on_one_session() {
        let reg: SessionRegistry = SessionRegistry::new();
        let id = reg.create(SessionBuilder::from_network(grid())).unwrap();
        let edges: Vec<EdgeKey> = [(0, 1), (1, 2), (2, 3), (4, 5), (8, 9), (12, 13)]
            .into_iter()
            .map(|(u, v)| EdgeKey::new(NodeId(u), NodeId(v), 0))
            .collect();

        std::thread::scope(|scope| {
            for &edge in &edges {
                let reg = &reg;
                scope.spawn(move || reg.close_edge(id, edge).unwrap());
            }
        });

        reg.with_session(id, |s| {
            assert_eq!(s.closed_edges().len(), edges.len());
            assert_eq!(s.network().edge_count(), s.original().edge_count() - edges.len());
            assert!(s.traffic().covers(s.network()));
            Ok(())
        })
        .unwrap();
    }
}
