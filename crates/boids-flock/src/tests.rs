//! Unit tests for boids-flock.

#[cfg(test)]
mod store {
    use boids_core::Vec2;

    use crate::FlockStore;

    #[test]
    fn push_appends_and_counts() {
        let mut store = FlockStore::new();
        assert!(store.is_empty());
        assert_eq!(store.push(Vec2::new(1.0, 2.0), Vec2::new(0.0, 1.0)), 0);
        assert_eq!(store.push(Vec2::new(3.0, 4.0), Vec2::new(1.0, 0.0)), 1);
        assert_eq!(store.count(), 2);
        assert_eq!(store.positions().len(), 2);
        assert_eq!(store.velocities().len(), 2);
        assert_eq!(store.positions()[1], Vec2::new(3.0, 4.0));
    }

    #[test]
    fn push_does_not_disturb_existing_slots() {
        let mut store = FlockStore::new();
        store.push(Vec2::new(1.0, 1.0), Vec2::new(0.5, 0.5));
        store.push(Vec2::new(2.0, 2.0), Vec2::new(-0.5, 0.5));
        let before = store.clone();
        store.push(Vec2::new(9.0, 9.0), Vec2::new(1.0, 0.0));
        assert_eq!(&store.positions()[..2], before.positions());
        assert_eq!(&store.velocities()[..2], before.velocities());
    }

    #[test]
    fn flat_positions_interleaves_xy() {
        let mut store = FlockStore::new();
        store.push(Vec2::new(1.0, 2.0), Vec2::ZERO);
        store.push(Vec2::new(3.0, 4.0), Vec2::ZERO);
        assert_eq!(store.flat_positions(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn heads_lead_along_heading() {
        let mut store = FlockStore::new();
        store.push(Vec2::new(100.0, 100.0), Vec2::new(2.0, 0.0));
        store.push(Vec2::new(50.0, 50.0), Vec2::new(0.0, -1.0));
        let heads = store.heads(10.0, 2.0);
        assert_eq!(heads[0], Vec2::new(110.0, 100.0));
        assert_eq!(heads[1], Vec2::new(50.0, 45.0));
    }

    #[test]
    fn split_mut_writes_both_arrays() {
        let mut store = FlockStore::new();
        store.push(Vec2::new(1.0, 1.0), Vec2::new(1.0, 0.0));
        let (pos, vel) = store.split_mut();
        pos[0] += vel[0];
        vel[0] = Vec2::ZERO;
        assert_eq!(store.positions()[0], Vec2::new(2.0, 1.0));
        assert_eq!(store.velocities()[0], Vec2::ZERO);
    }
}

#[cfg(test)]
mod builder {
    use boids_core::{BoidsError, SwarmRng, Vec2};

    use crate::FlockStoreBuilder;

    #[test]
    fn correct_count() {
        let mut rng = SwarmRng::new(1);
        let store = FlockStoreBuilder::new(500).build(&mut rng).unwrap();
        assert_eq!(store.count(), 500);
        assert_eq!(store.positions().len(), 500);
        assert_eq!(store.velocities().len(), 500);
    }

    #[test]
    fn zero_agents() {
        let mut rng = SwarmRng::new(0);
        let store = FlockStoreBuilder::new(0).build(&mut rng).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn random_spawn_within_spread_at_unit_speed() {
        let mut rng = SwarmRng::new(7);
        let store = FlockStoreBuilder::new(200)
            .spawn_around(Vec2::new(320.0, 240.0), 10.0)
            .build(&mut rng)
            .unwrap();
        for p in store.positions() {
            assert!((320.0..330.0).contains(&p.x), "x out of range: {p}");
            assert!((240.0..250.0).contains(&p.y), "y out of range: {p}");
        }
        for v in store.velocities() {
            assert!((v.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn same_seed_same_flock() {
        let a = FlockStoreBuilder::new(50)
            .spawn_around(Vec2::new(10.0, 10.0), 5.0)
            .build(&mut SwarmRng::new(99))
            .unwrap();
        let b = FlockStoreBuilder::new(50)
            .spawn_around(Vec2::new(10.0, 10.0), 5.0)
            .build(&mut SwarmRng::new(99))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn explicit_arrays_used_verbatim() {
        let mut rng = SwarmRng::new(0);
        let store = FlockStoreBuilder::new(2)
            .positions(vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)])
            .velocities(vec![Vec2::new(0.1, 0.0), Vec2::new(0.0, 0.1)])
            .build(&mut rng)
            .unwrap();
        assert_eq!(store.positions(), &[Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);
        assert_eq!(store.velocities(), &[Vec2::new(0.1, 0.0), Vec2::new(0.0, 0.1)]);
    }

    #[test]
    fn position_count_mismatch_errors() {
        let mut rng = SwarmRng::new(0);
        let result = FlockStoreBuilder::new(3)
            .positions(vec![Vec2::ZERO; 2])
            .build(&mut rng);
        assert_eq!(
            result.unwrap_err(),
            BoidsError::AgentCountMismatch { expected: 3, got: 2, what: "initial positions" }
        );
    }

    #[test]
    fn velocity_count_mismatch_errors() {
        let mut rng = SwarmRng::new(0);
        let result = FlockStoreBuilder::new(1)
            .velocities(vec![Vec2::ZERO; 4])
            .build(&mut rng);
        assert!(matches!(result, Err(BoidsError::AgentCountMismatch { got: 4, .. })));
    }

    #[test]
    fn non_finite_position_errors() {
        let mut rng = SwarmRng::new(0);
        let result = FlockStoreBuilder::new(1)
            .positions(vec![Vec2::new(f64::NAN, 0.0)])
            .build(&mut rng);
        assert!(matches!(result, Err(BoidsError::NonFinitePoint { .. })));
    }
}

#[cfg(test)]
mod stats {
    use boids_core::Vec2;

    use crate::{FlockStats, FlockStore};

    #[test]
    fn empty_flock() {
        let stats = FlockStats::of(&FlockStore::new());
        assert_eq!(stats.count, 0);
        assert_eq!(stats.centroid, None);
        assert_eq!(stats.to_string(), "0 agents");
    }

    #[test]
    fn speeds_and_centroid() {
        let mut store = FlockStore::new();
        store.push(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0));
        store.push(Vec2::new(10.0, 20.0), Vec2::new(1.0, 0.0));
        let stats = FlockStats::of(&store);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.max_speed, 5.0);
        assert_eq!(stats.mean_speed, 3.0);
        assert_eq!(stats.centroid, Some(Vec2::new(5.0, 10.0)));
    }
}
