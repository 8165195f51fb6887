//! Unit tests for rc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeKey, NodeId, SessionId};

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(SessionId(100) > SessionId(99));
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
        assert_eq!(EdgeKey::new(NodeId(1), NodeId(2), 0).to_string(), "1->2#0");
    }

    #[test]
    fn edge_key_orders_by_from_to_key() {
        let a = EdgeKey::new(NodeId(1), NodeId(2), 1);
        let b = EdgeKey::new(NodeId(1), NodeId(3), 0);
        let c = EdgeKey::new(NodeId(1), NodeId(2), 0);
        let mut v = vec![a, b, c];
        v.sort();
        assert_eq!(v, vec![c, a, b]);
    }

    #[test]
    fn reversed_keeps_key() {
        let e = EdgeKey::new(NodeId(4), NodeId(9), 2);
        assert_eq!(e.reversed(), EdgeKey::new(NodeId(9), NodeId(4), 2));
        assert_eq!(e.reversed().reversed(), e);
    }
}

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, PlanarPoint};

    #[test]
    fn planar_distance() {
        let a = PlanarPoint::new(0.0, 0.0);
        let b = PlanarPoint::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn lon_lat_order() {
        let p = GeoPoint::new(106.8456, -6.2088);
        assert_eq!(p.lon_lat(), [106.8456, -6.2088]);
    }

    #[test]
    fn finiteness() {
        assert!(GeoPoint::new(1.0, 2.0).is_finite());
        assert!(!GeoPoint::new(f64::NAN, 2.0).is_finite());
        assert!(!PlanarPoint::new(0.0, f64::INFINITY).is_finite());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.gen_range(0..1_000_000);
            let b: u64 = r2.gen_range(0..1_000_000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.8f64..=1.2);
            assert!((0.8..=1.2).contains(&v));
        }
    }

    #[test]
    fn sample_is_distinct_and_capped() {
        let mut rng = SimRng::new(7);
        let items: Vec<u32> = (0..10).collect();

        let mut picked = rng.sample(&items, 4);
        assert_eq!(picked.len(), 4);
        picked.sort();
        picked.dedup();
        assert_eq!(picked.len(), 4, "sampled without replacement");

        assert_eq!(rng.sample(&items, 50).len(), 10);
    }

    #[test]
    fn clone_forks_the_stream() {
        let mut rng = SimRng::new(3);
        let _: u64 = rng.gen_range(0..10);
        let mut fork = rng.clone();
        for _ in 0..20 {
            let a: u64 = rng.gen_range(0..1_000_000);
            let b: u64 = fork.gen_range(0..1_000_000);
            assert_eq!(a, b);
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, FactorRange, TrafficConfig, VolumeRange};

    #[test]
    fn defaults_match_reference_model() {
        let cfg = TrafficConfig::default();
        assert_eq!(cfg.base_volume, VolumeRange::new(50, 200));
        assert_eq!(cfg.jitter, FactorRange::new(0.8, 1.2));
        assert_eq!(cfg.volume_clamp, VolumeRange::new(10, 1000));
        assert_eq!(cfg.centrality_sample, 100);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn inverted_ranges_rejected() {
        let cfg = TrafficConfig { base_volume: VolumeRange::new(200, 50), ..Default::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));

        let cfg = TrafficConfig { volume_clamp: VolumeRange::new(10, 5), ..Default::default() };
        assert!(cfg.validate().is_err());

        let cfg = TrafficConfig { jitter: FactorRange::new(1.2, 0.8), ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn bad_jitter_and_sample_rejected() {
        let cfg = TrafficConfig { jitter: FactorRange::new(f64::NAN, 1.0), ..Default::default() };
        assert!(cfg.validate().is_err());

        let cfg = TrafficConfig { centrality_sample: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn volume_range_contains_is_inclusive() {
        let r = VolumeRange::new(10, 1000);
        assert!(r.contains(10));
        assert!(r.contains(1000));
        assert!(!r.contains(9));
        assert!(!r.contains(1001));
    }
}
