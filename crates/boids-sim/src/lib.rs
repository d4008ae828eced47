//! `boids-sim` — the frame-stepped flocking engine.
//!
//! # One tick
//!
//! ```text
//! ① Neighbors  — N×N distance matrix over current positions; masks at
//!                min_separation_dist and align_cohesion_radius (strict <).
//! ② Rules      — separation, alignment, cohesion per agent, each clamped
//!                to max_rule_velocity, then summed.
//! ③ Integrate  — velocity += delta; clamp to max_velocity;
//!                position += velocity.
//! ④ Wrap       — per axis, past dimension + margin → -margin and
//!                below -margin → dimension + margin.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | Distance rows and rule deltas run on Rayon's thread pool.  |
//! | `serde`    | Propagates serde derives to `boids-core` / `boids-flock`.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use boids_core::{SwarmConfig, Vec2};
//! use boids_sim::{InteractionQueue, NoopObserver, PointerButton, Swarm};
//!
//! let mut swarm = Swarm::new(SwarmConfig::default())?;
//! let mut queue = InteractionQueue::new();
//! queue.push_click(PointerButton::Primary, Vec2::new(100.0, 100.0))?;
//! swarm.step(&mut queue, &mut NoopObserver);
//! draw(swarm.positions());
//! ```

pub mod builder;
pub mod host;
pub mod neighbor;
pub mod observer;
pub mod rules;
pub mod swarm;


pub use boids_core::{BoidsError, BoidsResult};
pub use builder::SwarmBuilder;
pub use host::{Interaction, InteractionQueue, PointerButton};
pub use neighbor::{AdjacencyMask, DistanceMatrix, pairwise_distances, within_radius};
pub use observer::{NoopObserver, SwarmObserver};
pub use rules::{RuleDeltas, RuleEngine, RuleParams};
pub use swarm::{Swarm, wrap_coordinate};
