//! Fluent builder for constructing a [`Swarm`].

use boids_core::{BoidsResult, SwarmConfig, SwarmRng, Vec2};
use boids_flock::FlockStoreBuilder;
use tracing::debug;

use crate::Swarm;

/// Fluent builder for [`Swarm`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                               |
/// |---------------------|-------------------------------------------------------|
/// | `.positions(v)`     | Uniform in `[center, center + spawn_spread)²`         |
/// | `.velocities(v)`    | Unit speed, uniformly random heading                  |
///
/// Explicit arrays must have length `config.initial_count`.
///
/// # Example
///
/// ```rust
/// use boids_core::SwarmConfig;
/// use boids_sim::SwarmBuilder;
///
/// let mut swarm = SwarmBuilder::new(SwarmConfig::default()).build().unwrap();
/// swarm.tick();
/// assert_eq!(swarm.count(), 100);
/// ```
pub struct SwarmBuilder {
    config:     SwarmConfig,
    positions:  Option<Vec<Vec2>>,
    velocities: Option<Vec<Vec2>>,
}

impl SwarmBuilder {
    pub fn new(config: SwarmConfig) -> Self {
        Self {
            config,
            positions:  None,
            velocities: None,
        }
    }

    /// Supply explicit initial positions.
    pub fn positions(mut self, positions: Vec<Vec2>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Supply explicit initial velocities.
    pub fn velocities(mut self, velocities: Vec<Vec2>) -> Self {
        self.velocities = Some(velocities);
        self
    }

    /// Validate the configuration and explicit arrays, spawn the flock, and
    /// return a ready-to-tick [`Swarm`].
    pub fn build(self) -> BoidsResult<Swarm> {
        self.config.validate()?;

        let mut rng = SwarmRng::new(self.config.seed);
        let mut flock = FlockStoreBuilder::new(self.config.initial_count)
            .spawn_around(self.config.center(), self.config.spawn_spread);
        if let Some(p) = self.positions {
            flock = flock.positions(p);
        }
        if let Some(v) = self.velocities {
            flock = flock.velocities(v);
        }
        let flock = flock.build(&mut rng)?;

        debug!(
            agents = flock.count(),
            width = self.config.width,
            height = self.config.height,
            seed = self.config.seed,
            "swarm built"
        );

        Ok(Swarm::from_parts(self.config, flock, rng))
    }
}
