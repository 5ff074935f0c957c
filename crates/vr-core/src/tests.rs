//! Unit tests for vr-core primitives.

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn slot_roundtrip() {
        assert_eq!(NodeId(1).slot(), Some(0));
        assert_eq!(NodeId::from_slot(4), NodeId(5));
        assert_eq!(NodeId::INVALID.slot(), None);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(1) < NodeId(2));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("12".parse::<NodeId>().unwrap(), NodeId(12));
        assert!("x".parse::<NodeId>().is_err());
        assert!("-3".parse::<NodeId>().is_err());
        assert_eq!(NodeId(7).to_string(), "7");
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(NodeId::default(), NodeId::INVALID);
        assert!(!NodeId::default().is_valid());
    }
}

#[cfg(test)]
mod geo {
    use crate::Point;

    #[test]
    fn zero_distance() {
        let p = Point::new(3.5, -2.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn three_four_five() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
        assert_eq!(a.distance_sq(b), 25.0);
    }

    #[test]
    fn display_two_decimals() {
        assert_eq!(Point::new(1.0, 2.345).to_string(), "(1.00, 2.35)");
    }
}

#[cfg(test)]
mod config {
    use crate::{NodeId, Point, SimConfig, VrError};

    #[test]
    fn default_is_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.node_count, 15);
        assert_eq!(cfg.start, Point::ORIGIN);
        assert!(cfg.is_priority(NodeId(5)));
        assert!(cfg.is_priority(NodeId(7)));
        assert!(!cfg.is_priority(NodeId(6)));
    }

    #[test]
    fn rejects_non_positive_speed() {
        let cfg = SimConfig { speed: 0.0, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(VrError::Config(_))));
        let cfg = SimConfig { speed: f64::NAN, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(VrError::Config(_))));
    }

    #[test]
    fn rejects_empty_scenario() {
        let cfg = SimConfig { node_count: 0, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(VrError::Config(_))));
    }

    #[test]
    fn rejects_out_of_range_priority() {
        let cfg = SimConfig { priority_ids: vec![NodeId(16)], ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(VrError::NodeNotFound(NodeId(16)))));
        let cfg = SimConfig { priority_ids: vec![NodeId(0)], ..SimConfig::default() };
        assert!(cfg.validate().is_err());
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
            assert_eq!(r1.point_in_square(50.0), r2.point_in_square(50.0));
        }
    }

    #[test]
    fn points_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let p = rng.point_in_square(50.0);
            assert!((0.0..50.0).contains(&p.x));
            assert!((0.0..50.0).contains(&p.y));
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let x: u64 = a.gen_range(0..u64::MAX);
        let y: u64 = b.gen_range(0..u64::MAX);
        assert_ne!(x, y, "distinct seeds should diverge");
    }
}
