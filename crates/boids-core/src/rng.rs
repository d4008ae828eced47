//! Seeded RNG for spawning agents.
//!
//! The swarm owns a single `SwarmRng` seeded from `SwarmConfig::seed`.  Every
//! random draw (initial scatter of positions, initial headings, headings of
//! inserted agents) goes through it, so a run is reproducible given the seed
//! and the same sequence of host calls.

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Vec2;

/// Swarm-level RNG.
///
/// Used only from the single simulation thread.
pub struct SwarmRng(SmallRng);

impl SwarmRng {
    pub fn new(seed: u64) -> Self {
        SwarmRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Unit vector with a heading drawn uniformly from `[0, 2π)`.
    #[inline]
    pub fn unit_heading(&mut self) -> Vec2 {
        Vec2::from_angle(TAU * self.0.r#gen::<f64>())
    }

    /// Point drawn uniformly from the square `[origin, origin + spread)²`.
    #[inline]
    pub fn point_near(&mut self, origin: Vec2, spread: f64) -> Vec2 {
        let dx: f64 = self.0.r#gen();
        let dy: f64 = self.0.r#gen();
        origin + Vec2::new(dx, dy) * spread
    }
}

impl std::fmt::Debug for SwarmRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SwarmRng(..)")
    }
}
