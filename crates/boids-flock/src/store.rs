//! Core flock storage.
//!
//! Agents are not objects.  Agent `i` is "slot `i`" in two parallel arrays:
//!
//! ```ignore
//! let p = store.positions()[i];
//! let v = store.velocities()[i];
//! ```
//!
//! Keeping positions contiguous makes the all-pairs distance pass a linear
//! scan over one `Vec<Vec2>`.  Slots are only ever appended; there is no
//! removal, so an index stays valid for the lifetime of the store.

use boids_core::Vec2;

/// Structure-of-Arrays storage for all agent state.
///
/// `positions.len() == velocities.len() == count` at all times.  The slices
/// handed out by [`split_mut`](Self::split_mut) cannot change length, so the
/// only way to grow the flock is [`push`](Self::push).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlockStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    count: usize,

    /// World-space position of each agent.
    positions: Vec<Vec2>,

    /// Per-frame displacement of each agent.
    velocities: Vec<Vec2>,
}

impl FlockStore {
    /// Empty flock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of agents.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    #[inline]
    pub fn velocities(&self) -> &[Vec2] {
        &self.velocities
    }

    /// Both arrays at once, for passes that read velocity while writing
    /// position (integration) or the reverse (scatter).
    #[inline]
    pub fn split_mut(&mut self) -> (&mut [Vec2], &mut [Vec2]) {
        (&mut self.positions, &mut self.velocities)
    }

    /// Append one agent at the end.  Existing slots are untouched.
    ///
    /// Returns the index of the new slot.
    pub fn push(&mut self, position: Vec2, velocity: Vec2) -> usize {
        let index = self.count;
        self.positions.push(position);
        self.velocities.push(velocity);
        self.count += 1;
        debug_assert_eq!(self.positions.len(), self.count);
        debug_assert_eq!(self.velocities.len(), self.count);
        index
    }

    /// Positions flattened as `x0, y0, x1, y1, …` for plotting back-ends
    /// that take a single coordinate buffer.
    pub fn flat_positions(&self) -> Vec<f64> {
        self.positions.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    /// Head marker for each agent: `position + k * velocity / max_velocity`.
    ///
    /// At full speed the head sits `k` units ahead of the body along the
    /// heading, so renderers can draw a direction tick without normalising.
    pub fn heads(&self, k: f64, max_velocity: f64) -> Vec<Vec2> {
        let scale = k / max_velocity;
        self.positions
            .iter()
            .zip(&self.velocities)
            .map(|(&p, &v)| p + v * scale)
            .collect()
    }

    // ── Package-private constructor used by FlockStoreBuilder ─────────────

    pub(crate) fn from_parts(positions: Vec<Vec2>, velocities: Vec<Vec2>) -> Self {
        debug_assert_eq!(positions.len(), velocities.len());
        Self {
            count: positions.len(),
            positions,
            velocities,
        }
    }
}
