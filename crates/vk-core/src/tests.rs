//! Unit tests for vk-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::geo::wrap_coord;
    use crate::{Domain, Point, VkError};

    fn square(side: f64) -> Domain {
        Domain::new(side, side).unwrap()
    }

    #[test]
    fn rejects_non_positive_extents() {
        assert!(matches!(Domain::new(0.0, 10.0), Err(VkError::InvalidDomain { .. })));
        assert!(Domain::new(10.0, -1.0).is_err());
        assert!(Domain::new(f64::NAN, 10.0).is_err());
        assert!(Domain::new(f64::INFINITY, 10.0).is_err());
    }

    #[test]
    fn resized_accepts_zero_but_not_negative() {
        let d = Domain::resized(0.0, 10.0).unwrap();
        assert!(d.is_degenerate());
        assert!(Domain::resized(-1.0, 10.0).is_err());
        assert!(!square(5.0).is_degenerate());
    }

    #[test]
    fn wrap_is_half_open() {
        assert_eq!(wrap_coord(100.0, 100.0), 0.0);
        assert_eq!(wrap_coord(-1.0, 100.0), 99.0);
        assert_eq!(wrap_coord(250.5, 100.0), 50.5);
        // rem_euclid rounds this up to exactly 100.0
        let v = wrap_coord(-1e-17, 100.0);
        assert!((0.0..100.0).contains(&v), "got {v}");
        assert_eq!(wrap_coord(7.0, 0.0), 0.0);
    }

    #[test]
    fn wrap_point_stays_inside() {
        let d = square(100.0);
        for p in [Point::new(-0.5, 100.0), Point::new(199.9, -300.25), Point::new(0.0, 0.0)] {
            assert!(d.contains(d.wrap(p)), "{p} wrapped to {}", d.wrap(p));
        }
    }

    #[test]
    fn wrapped_distance_across_edge() {
        let d = square(100.0);
        let a = Point::new(1.0, 50.0);
        let b = Point::new(99.0, 50.0);
        assert!((d.distance(a, b) - 2.0).abs() < 1e-12);
        assert!((a.distance(b) - 98.0).abs() < 1e-12);
    }

    #[test]
    fn wrapped_distance_symmetric_and_bounded() {
        let d = Domain::new(100.0, 60.0).unwrap();
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(99.5, 59.0),
            Point::new(50.0, 30.0),
            Point::new(12.25, 47.0),
            Point::new(88.0, 1.0),
        ];
        for &p in &pts {
            for &q in &pts {
                assert_eq!(d.distance(p, q), d.distance(q, p));
                assert!(d.distance(p, q) <= p.distance(q) + 1e-12);
                assert!(d.distance(p, q) <= (50.0_f64.hypot(30.0)) + 1e-12);
            }
        }
    }

    #[test]
    fn displacement_uses_minimum_image() {
        let d = square(100.0);
        let (dx, dy) = d.displacement(Point::new(99.0, 10.0), Point::new(1.0, 5.0));
        assert!((dx - 2.0).abs() < 1e-12);
        assert!((dy + 5.0).abs() < 1e-12);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(3).to_string(), "T3");
    }

    #[test]
    fn interval_matching() {
        assert!(Tick(0).is_on_interval(5));
        assert!(Tick(10).is_on_interval(5));
        assert!(!Tick(11).is_on_interval(5));
        assert!(!Tick(0).is_on_interval(0));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..16 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn unit_samples_in_half_open_range() {
        let mut rng = SimRng::new(1);
        for _ in 0..1_000 {
            let u: f64 = rng.random();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(3);
        let mut c1 = root.child(1);
        let mut c2 = root.child(2);
        assert_ne!(c1.random::<u64>(), c2.random::<u64>());
    }
}

#[cfg(test)]
mod config {
    use crate::{FlockConfig, VkError};

    #[test]
    fn defaults_validate() {
        let cfg = FlockConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.domain().unwrap().width, 512.0);
        assert_eq!(cfg.agent_count, 250);
    }

    #[test]
    fn negative_radius_rejected() {
        let cfg = FlockConfig { radius: -1.0, ..FlockConfig::default() };
        assert_eq!(
            cfg.validate(),
            Err(VkError::InvalidParameter { name: "radius", value: -1.0 })
        );
    }

    #[test]
    fn noise_must_be_finite_but_may_be_negative() {
        let cfg = FlockConfig { noise: -0.5, ..FlockConfig::default() };
        cfg.validate().unwrap();
        let cfg = FlockConfig { noise: f64::INFINITY, ..FlockConfig::default() };
        assert_eq!(
            cfg.validate(),
            Err(VkError::InvalidParameter { name: "noise", value: f64::INFINITY })
        );
        let cfg = FlockConfig { noise: f64::NAN, ..FlockConfig::default() };
        assert!(matches!(cfg.validate(), Err(VkError::InvalidParameter { name: "noise", .. })));
    }

    #[test]
    fn bad_domain_rejected() {
        let cfg = FlockConfig { width: 0.0, ..FlockConfig::default() };
        assert!(matches!(cfg.validate(), Err(VkError::InvalidDomain { .. })));
    }

    #[test]
    fn zero_threads_rejected() {
        let cfg = FlockConfig { num_threads: Some(0), ..FlockConfig::default() };
        assert!(matches!(cfg.validate(), Err(VkError::Config(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_defaults() {
        let cfg: FlockConfig = serde_json::from_str(r#"{ "agent_count": 10, "noise": 1.5 }"#).unwrap();
        assert_eq!(cfg.agent_count, 10);
        assert_eq!(cfg.noise, 1.5);
        assert_eq!(cfg.radius, 10.0);
    }
}
