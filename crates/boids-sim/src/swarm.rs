//! The `Swarm` struct and its tick.

use boids_core::{BoidsResult, SwarmConfig, SwarmRng, Tick, Vec2, clamp_magnitude};
use boids_flock::FlockStore;
use tracing::{debug, trace};

use crate::neighbor::DistanceMatrix;
use crate::rules::RuleEngine;
use crate::{Interaction, InteractionQueue, SwarmObserver};

// ── Swarm ─────────────────────────────────────────────────────────────────────

/// The flocking simulation.
///
/// `Swarm` owns all simulation state and advances it one frame per
/// [`tick`](Self::tick):
///
/// 1. **Neighbors**: all-pairs distance matrix over current positions.
/// 2. **Rules**: separation + alignment + cohesion delta per agent, each
///    rule clamped to `max_rule_velocity`.
/// 3. **Integrate**: `velocity += delta`, clamp to `max_velocity`,
///    `position += velocity`.
/// 4. **Wrap**: teleport agents that drifted past `boundary_margin` to the
///    opposite edge.
///
/// [`insert_agent`](Self::insert_agent) and [`scatter`](Self::scatter)
/// mutate state directly and take effect on the next tick.  No method takes
/// a lock; callers serialise access.
///
/// Create via [`SwarmBuilder`][crate::SwarmBuilder] or [`Swarm::new`].
#[derive(Debug)]
pub struct Swarm {
    config: SwarmConfig,
    frame:  Tick,
    flock:  FlockStore,
    rules:  RuleEngine,
    rng:    SwarmRng,
}

impl Swarm {
    /// Build a randomly spawned swarm from `config`.
    pub fn new(config: SwarmConfig) -> BoidsResult<Self> {
        crate::SwarmBuilder::new(config).build()
    }

    pub(crate) fn from_parts(config: SwarmConfig, flock: FlockStore, rng: SwarmRng) -> Self {
        let rules = RuleEngine::new((&config).into());
        Self {
            config,
            frame: Tick::ZERO,
            flock,
            rules,
            rng,
        }
    }

    // ── Read accessors ────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    /// Number of completed ticks.
    #[inline]
    pub fn frame(&self) -> Tick {
        self.frame
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.flock.count()
    }

    /// The full SoA state, e.g. for observers or `FlockStats`.
    #[inline]
    pub fn flock(&self) -> &FlockStore {
        &self.flock
    }

    #[inline]
    pub fn positions(&self) -> &[Vec2] {
        self.flock.positions()
    }

    #[inline]
    pub fn velocities(&self) -> &[Vec2] {
        self.flock.velocities()
    }

    /// Positions as `x0, y0, x1, y1, …`.
    pub fn flat_positions(&self) -> Vec<f64> {
        self.flock.flat_positions()
    }

    /// Head marker per agent, `k` units ahead at full speed.
    pub fn heads(&self, k: f64) -> Vec<Vec2> {
        self.flock.heads(k, self.config.max_velocity)
    }

    // ── Frame stepping ────────────────────────────────────────────────────

    /// Advance every agent by one frame.
    pub fn tick(&mut self) {
        let distances = DistanceMatrix::pairwise(self.flock.positions());
        let deltas = self
            .rules
            .combined(self.flock.positions(), self.flock.velocities(), &distances);

        let max_velocity = self.config.max_velocity;
        let margin = self.config.boundary_margin;
        let (width, height) = (self.config.width, self.config.height);

        let (positions, velocities) = self.flock.split_mut();
        for ((p, v), delta) in positions.iter_mut().zip(velocities.iter_mut()).zip(deltas) {
            *v = clamp_magnitude(*v + delta, max_velocity);
            *p += *v;
            p.x = wrap_coordinate(p.x, width, margin);
            p.y = wrap_coordinate(p.y, height, margin);
        }

        self.frame = self.frame.next();
        trace!(frame = self.frame.0, agents = self.flock.count(), "tick complete");
    }

    /// Drain `queue`, then run one tick, reporting to `observer`.
    pub fn step<O: SwarmObserver>(&mut self, queue: &mut InteractionQueue, observer: &mut O) {
        let now = self.frame;
        for interaction in queue.drain() {
            // Queue entries were validated on push.
            self.apply_unchecked(interaction);
            observer.on_interaction(now, &interaction);
        }
        observer.on_tick_start(now);
        self.tick();
        observer.on_tick_end(now, &self.flock);
    }

    /// Run exactly `n` ticks with observer callbacks and no interactions.
    pub fn run_ticks<O: SwarmObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.frame;
            observer.on_tick_start(now);
            self.tick();
            observer.on_tick_end(now, &self.flock);
        }
    }

    // ── Interaction ───────────────────────────────────────────────────────

    /// Append one agent at `point` with unit speed and a uniformly random
    /// heading.  Returns the new agent's index (always the old count).
    pub fn insert_agent(&mut self, point: Vec2) -> BoidsResult<usize> {
        Interaction::Insert(point).validate()?;
        Ok(self.push_agent(point))
    }

    /// Outward impulse from `focal` at the configured `scatter_strength`.
    pub fn scatter(&mut self, focal: Vec2) -> BoidsResult<()> {
        self.scatter_with_strength(focal, self.config.scatter_strength)
    }

    /// `velocity += strength * (position - focal)` for every agent.
    ///
    /// Applied once, unclamped; the next tick enforces `max_velocity`.
    pub fn scatter_with_strength(&mut self, focal: Vec2, strength: f64) -> BoidsResult<()> {
        Interaction::Scatter(focal).validate()?;
        self.push_impulse(focal, strength);
        Ok(())
    }

    /// Apply one host interaction immediately.
    pub fn apply(&mut self, interaction: Interaction) -> BoidsResult<()> {
        interaction.validate()?;
        self.apply_unchecked(interaction);
        Ok(())
    }

    /// Apply every queued interaction in arrival order.  Returns how many
    /// were applied.
    pub fn drain(&mut self, queue: &mut InteractionQueue) -> usize {
        let mut applied = 0;
        for interaction in queue.drain() {
            self.apply_unchecked(interaction);
            applied += 1;
        }
        applied
    }

    fn apply_unchecked(&mut self, interaction: Interaction) {
        match interaction {
            Interaction::Insert(p) => {
                self.push_agent(p);
            }
            Interaction::Scatter(p) => self.push_impulse(p, self.config.scatter_strength),
        }
    }

    fn push_agent(&mut self, point: Vec2) -> usize {
        let heading = self.rng.unit_heading();
        let index = self.flock.push(point, heading);
        debug!(index, at = %point, "agent inserted");
        index
    }

    fn push_impulse(&mut self, focal: Vec2, strength: f64) {
        let (positions, velocities) = self.flock.split_mut();
        for (p, v) in positions.iter().zip(velocities.iter_mut()) {
            *v += strength * (*p - focal);
        }
        debug!(at = %focal, strength, agents = positions.len(), "scatter impulse");
    }
}

// ── Boundary wrap ─────────────────────────────────────────────────────────────

/// One-step wrap of a single coordinate on an axis of length `dimension`.
///
/// Past `dimension + margin` jumps to `-margin`; below `-margin` jumps to
/// `dimension + margin`.  Anything in between is returned unchanged.
#[inline]
pub fn wrap_coordinate(coord: f64, dimension: f64, margin: f64) -> f64 {
    if coord > dimension + margin {
        -margin
    } else if coord < -margin {
        dimension + margin
    } else {
        coord
    }
}
