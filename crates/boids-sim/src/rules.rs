//! The three flocking rules.
//!
//! Every rule reads the same start-of-tick snapshot (positions, velocities,
//! distances) and returns one delta per agent, clamped per agent to
//! `max_rule_velocity`.  No rule sees another rule's output.  The combined
//! delta is the plain sum of the three clamped deltas; the caller clamps the
//! resulting velocity, not this module.
//!
//! Both neighbor masks include the agent itself (its self-distance of 0 is
//! below any positive radius).  For alignment that means an agent's own
//! velocity is part of the sum; for cohesion the agent's own position is part
//! of the neighbor sum before its position is subtracted once.

use boids_core::{SwarmConfig, Vec2, clamp_magnitude};

use crate::neighbor::{AdjacencyMask, DistanceMatrix};

/// Radii and cap the rules need from the swarm configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RuleParams {
    pub min_separation_dist:   f64,
    pub align_cohesion_radius: f64,
    pub max_rule_velocity:     f64,
}

impl From<&SwarmConfig> for RuleParams {
    fn from(cfg: &SwarmConfig) -> Self {
        Self {
            min_separation_dist:   cfg.min_separation_dist,
            align_cohesion_radius: cfg.align_cohesion_radius,
            max_rule_velocity:     cfg.max_rule_velocity,
        }
    }
}

/// Per-rule deltas for one tick, index-aligned with the flock.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleDeltas {
    pub separation: Vec<Vec2>,
    pub alignment:  Vec<Vec2>,
    pub cohesion:   Vec<Vec2>,
}

impl RuleDeltas {
    /// `separation + alignment + cohesion` per agent.  Not re-clamped.
    pub fn combined(&self) -> Vec<Vec2> {
        self.separation
            .iter()
            .zip(&self.alignment)
            .zip(&self.cohesion)
            .map(|((&s, &a), &c)| s + a + c)
            .collect()
    }
}

#[derive(Clone, Debug)]
pub struct RuleEngine {
    params: RuleParams,
}

impl RuleEngine {
    pub fn new(params: RuleParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &RuleParams {
        &self.params
    }

    /// Rule 1: push away from every agent closer than `min_separation_dist`.
    ///
    /// `delta_i = position_i * |row_i| - Σ_j mask[i][j] * position_j`
    pub fn separation(&self, positions: &[Vec2], mask: &AdjacencyMask) -> Vec<Vec2> {
        let cap = self.params.max_rule_velocity;
        per_agent(positions.len(), |i| {
            let crowd = mask.row_count(i) as f64;
            clamp_magnitude(positions[i] * crowd - mask.masked_sum(i, positions), cap)
        })
    }

    /// Rule 2: steer along the (unnormalised) sum of neighbor velocities.
    pub fn alignment(&self, velocities: &[Vec2], mask: &AdjacencyMask) -> Vec<Vec2> {
        let cap = self.params.max_rule_velocity;
        per_agent(velocities.len(), |i| {
            clamp_magnitude(mask.masked_sum(i, velocities), cap)
        })
    }

    /// Rule 3: pull toward the neighbor position sum, less the agent's own
    /// position.
    pub fn cohesion(&self, positions: &[Vec2], mask: &AdjacencyMask) -> Vec<Vec2> {
        let cap = self.params.max_rule_velocity;
        per_agent(positions.len(), |i| {
            clamp_magnitude(mask.masked_sum(i, positions) - positions[i], cap)
        })
    }

    /// Evaluate all three rules against one snapshot.
    pub fn evaluate(
        &self,
        positions:  &[Vec2],
        velocities: &[Vec2],
        distances:  &DistanceMatrix,
    ) -> RuleDeltas {
        assert_eq!(positions.len(), velocities.len(), "flock arrays out of sync");
        assert_eq!(positions.len(), distances.len(), "distance matrix is stale");

        let near = distances.within_radius(self.params.min_separation_dist);
        let wide = distances.within_radius(self.params.align_cohesion_radius);

        RuleDeltas {
            separation: self.separation(positions, &near),
            alignment:  self.alignment(velocities, &wide),
            cohesion:   self.cohesion(positions, &wide),
        }
    }

    /// Combined per-agent velocity delta for one tick.
    pub fn combined(
        &self,
        positions:  &[Vec2],
        velocities: &[Vec2],
        distances:  &DistanceMatrix,
    ) -> Vec<Vec2> {
        self.evaluate(positions, velocities, distances).combined()
    }
}

/// Build one value per agent from an index-only closure.
fn per_agent<F>(n: usize, f: F) -> Vec<Vec2>
where
    F: Fn(usize) -> Vec2 + Sync + Send,
{
    #[cfg(not(feature = "parallel"))]
    {
        (0..n).map(f).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        (0..n).into_par_iter().map(f).collect()
    }
}
