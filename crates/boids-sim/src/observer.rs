//! Swarm observer trait for frame read-back and progress reporting.

use boids_core::Tick;
use boids_flock::FlockStore;

use crate::Interaction;

/// Callbacks invoked by [`Swarm::step`][crate::Swarm::step] and
/// [`Swarm::run_ticks`][crate::Swarm::run_ticks].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  A renderer typically implements
/// `on_tick_end` and redraws from `flock.positions()`.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SwarmObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, flock: &FlockStore) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} agents", flock.count());
///         }
///     }
/// }
/// ```
pub trait SwarmObserver {
    /// Called once per queued interaction, right after it is applied and
    /// before the tick it precedes.
    fn on_interaction(&mut self, _tick: Tick, _interaction: &Interaction) {}

    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick has fully completed.  `flock` is the state a
    /// renderer should draw for this frame.
    fn on_tick_end(&mut self, _tick: Tick, _flock: &FlockStore) {}
}

/// A [`SwarmObserver`] that does nothing.
pub struct NoopObserver;

impl SwarmObserver for NoopObserver {}
