//! Fluent builder for constructing a `FlockStore`.
//!
//! # Usage
//!
//! ```rust
//! use boids_core::{SwarmRng, Vec2};
//! use boids_flock::FlockStoreBuilder;
//!
//! let mut rng = SwarmRng::new(42);
//! let store = FlockStoreBuilder::new(100)
//!     .spawn_around(Vec2::new(320.0, 240.0), 10.0)
//!     .build(&mut rng)
//!     .unwrap();
//!
//! assert_eq!(store.count(), 100);
//! ```

use boids_core::{BoidsError, BoidsResult, SwarmRng, Vec2};

use crate::FlockStore;

/// Fluent builder for [`FlockStore`].
///
/// Without explicit arrays every agent is spawned at a uniformly random point
/// in `[origin, origin + spread)²` with unit speed and a uniformly random
/// heading.  Explicit arrays override the random draw for that array only.
pub struct FlockStoreBuilder {
    count:      usize,
    origin:     Vec2,
    spread:     f64,
    positions:  Option<Vec<Vec2>>,
    velocities: Option<Vec<Vec2>>,
}

impl FlockStoreBuilder {
    /// Create a builder for `count` agents spawned at the origin.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            origin:     Vec2::ZERO,
            spread:     0.0,
            positions:  None,
            velocities: None,
        }
    }

    /// Spawn randomly inside the square `[origin, origin + spread)²`.
    pub fn spawn_around(mut self, origin: Vec2, spread: f64) -> Self {
        self.origin = origin;
        self.spread = spread;
        self
    }

    /// Supply explicit initial positions (must be length `count`).
    pub fn positions(mut self, positions: Vec<Vec2>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Supply explicit initial velocities (must be length `count`).
    pub fn velocities(mut self, velocities: Vec<Vec2>) -> Self {
        self.velocities = Some(velocities);
        self
    }

    /// Validate explicit arrays, draw the rest from `rng`, and build.
    ///
    /// Positions are drawn for all agents before any heading, so supplying
    /// explicit velocities does not shift the random positions.
    pub fn build(self, rng: &mut SwarmRng) -> BoidsResult<FlockStore> {
        let count = self.count;

        let positions = match self.positions {
            Some(p) => {
                check_len(count, &p, "initial positions")?;
                p
            }
            None => (0..count)
                .map(|_| rng.point_near(self.origin, self.spread))
                .collect(),
        };

        let velocities = match self.velocities {
            Some(v) => {
                check_len(count, &v, "initial velocities")?;
                v
            }
            None => (0..count).map(|_| rng.unit_heading()).collect(),
        };

        Ok(FlockStore::from_parts(positions, velocities))
    }
}

fn check_len(expected: usize, values: &[Vec2], what: &'static str) -> BoidsResult<()> {
    if values.len() != expected {
        return Err(BoidsError::AgentCountMismatch {
            expected,
            got: values.len(),
            what,
        });
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(BoidsError::NonFinitePoint { x: bad.x, y: bad.y });
    }
    Ok(())
}
