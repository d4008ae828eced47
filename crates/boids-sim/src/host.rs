//! Host boundary: the calls a rendering / input driver makes into the core.
//!
//! The core never registers callbacks with a GUI toolkit.  The host maps its
//! raw pointer events to a [`PointerButton`] and a world-space point, turns
//! them into an [`Interaction`], and either applies it directly with
//! [`Swarm::apply`][crate::Swarm::apply] or queues it in an
//! [`InteractionQueue`] drained at the start of the next frame.

use std::collections::VecDeque;

use boids_core::{BoidsError, BoidsResult, Vec2};

/// Pointer button as reported by the host, already decoded from the
/// toolkit's numbering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left button.
    Primary,
    /// Usually the right button.
    Secondary,
    Other(u16),
}

/// A host-originated mutation of the swarm, in world coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Interaction {
    /// Append one agent at the point with a random unit-speed heading.
    Insert(Vec2),
    /// One-off outward impulse away from the point.
    Scatter(Vec2),
}

impl Interaction {
    /// Default click mapping: primary inserts, secondary scatters, anything
    /// else is ignored.
    pub fn from_click(button: PointerButton, point: Vec2) -> Option<Self> {
        match button {
            PointerButton::Primary => Some(Interaction::Insert(point)),
            PointerButton::Secondary => Some(Interaction::Scatter(point)),
            PointerButton::Other(_) => None,
        }
    }

    #[inline]
    pub fn point(&self) -> Vec2 {
        match *self {
            Interaction::Insert(p) | Interaction::Scatter(p) => p,
        }
    }

    /// Reject NaN / infinite coordinates.
    pub(crate) fn validate(&self) -> BoidsResult<()> {
        let p = self.point();
        if p.is_finite() {
            Ok(())
        } else {
            Err(BoidsError::NonFinitePoint { x: p.x, y: p.y })
        }
    }
}

/// FIFO buffer of pending interactions.
///
/// Single-writer: the queue does no locking.  A host that receives input on
/// a different thread from its simulation loop must guard the queue (or
/// forward events over a channel) itself.
#[derive(Clone, Debug, Default)]
pub struct InteractionQueue {
    pending: VecDeque<Interaction>,
}

impl InteractionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `interaction`.  Non-finite points are rejected here so that
    /// draining can never fail.
    pub fn push(&mut self, interaction: Interaction) -> BoidsResult<()> {
        interaction.validate()?;
        self.pending.push_back(interaction);
        Ok(())
    }

    /// Translate and enqueue a click.  Returns `Ok(false)` if the button has
    /// no mapping.
    pub fn push_click(&mut self, button: PointerButton, point: Vec2) -> BoidsResult<bool> {
        match Interaction::from_click(button, point) {
            Some(interaction) => self.push(interaction).map(|()| true),
            None => Ok(false),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and yield all pending interactions in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = Interaction> + '_ {
        self.pending.drain(..)
    }
}
