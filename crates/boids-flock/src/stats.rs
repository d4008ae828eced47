//! Cheap one-pass summary of flock motion, for logging and host HUDs.

use boids_core::Vec2;

use crate::FlockStore;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlockStats {
    pub count:      usize,
    pub mean_speed: f64,
    pub max_speed:  f64,
    /// `None` for an empty flock.
    pub centroid:   Option<Vec2>,
}

impl FlockStats {
    pub fn of(store: &FlockStore) -> Self {
        let count = store.count();
        if count == 0 {
            return Self { count, mean_speed: 0.0, max_speed: 0.0, centroid: None };
        }

        let (speed_sum, max_speed) = store
            .velocities()
            .iter()
            .map(|v| v.length())
            .fold((0.0, 0.0_f64), |(sum, max), s| (sum + s, max.max(s)));
        let position_sum: Vec2 = store.positions().iter().copied().sum();
        let n = count as f64;

        Self {
            count,
            mean_speed: speed_sum / n,
            max_speed,
            centroid: Some(position_sum * (1.0 / n)),
        }
    }
}

impl std::fmt::Display for FlockStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.centroid {
            Some(c) => write!(
                f,
                "{} agents, mean speed {:.3}, max speed {:.3}, centroid {}",
                self.count, self.mean_speed, self.max_speed, c
            ),
            None => f.write_str("0 agents"),
        }
    }
}
