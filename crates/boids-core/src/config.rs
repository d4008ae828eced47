//! Swarm configuration.
//!
//! All values are fixed once a `Swarm` is built.  `Default` carries the
//! reference tuning: a 640×480 world, 100 agents, separation under 25 units,
//! alignment/cohesion under 50 units.

use crate::{BoidsError, BoidsResult, Vec2};

/// Top-level configuration for one swarm.
///
/// Typically filled in by the host (from command-line flags, a settings file,
/// …) and handed to `SwarmBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwarmConfig {
    /// World width in world units.
    pub width: f64,

    /// World height in world units.
    pub height: f64,

    /// Number of agents spawned at construction.
    pub initial_count: usize,

    /// Agents closer than this (strictly) push each other apart.
    pub min_separation_dist: f64,

    /// Agents closer than this (strictly) align with and attract each other.
    pub align_cohesion_radius: f64,

    /// Per-rule cap on the velocity change a single rule may contribute.
    pub max_rule_velocity: f64,

    /// Cap on an agent's final speed after each tick.
    pub max_velocity: f64,

    /// How far past an edge an agent may drift before it wraps.
    pub boundary_margin: f64,

    /// Multiplier applied to `position - focal` by a scatter impulse.
    pub scatter_strength: f64,

    /// Side of the square, anchored at the world centre, in which the
    /// initial population is spawned.
    pub spawn_spread: f64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            width:                 640.0,
            height:                480.0,
            initial_count:         100,
            min_separation_dist:   25.0,
            align_cohesion_radius: 50.0,
            max_rule_velocity:     0.03,
            max_velocity:          2.0,
            boundary_margin:       2.0,
            scatter_strength:      0.1,
            spawn_spread:          10.0,
            seed:                  42,
        }
    }
}

impl SwarmConfig {
    /// Config with the given world bounds and population; everything else
    /// at the reference values.
    pub fn new(width: f64, height: f64, initial_count: usize) -> Self {
        Self {
            width,
            height,
            initial_count,
            ..Self::default()
        }
    }

    /// Centre of the world rectangle.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Check every field against its constraint.
    ///
    /// Out-of-range values are rejected, never clamped.
    pub fn validate(&self) -> BoidsResult<()> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("min_separation_dist", self.min_separation_dist)?;
        positive("align_cohesion_radius", self.align_cohesion_radius)?;
        positive("max_velocity", self.max_velocity)?;
        non_negative("max_rule_velocity", self.max_rule_velocity)?;
        non_negative("boundary_margin", self.boundary_margin)?;
        non_negative("spawn_spread", self.spawn_spread)?;
        if !self.scatter_strength.is_finite() {
            return Err(BoidsError::Config(format!(
                "scatter_strength must be finite, got {}",
                self.scatter_strength
            )));
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> BoidsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BoidsError::Config(format!(
            "{name} must be finite and > 0, got {value}"
        )))
    }
}

fn non_negative(name: &str, value: f64) -> BoidsResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BoidsError::Config(format!(
            "{name} must be finite and >= 0, got {value}"
        )))
    }
}
