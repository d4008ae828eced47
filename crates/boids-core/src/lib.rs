//! `boids-core` — foundational types for the boids flocking engine.
//!
//! This crate is a dependency of every other `boids-*` crate.  It has no
//! `boids-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`vector`]      | `Vec2`, `clamp_magnitude`                             |
//! | [`time`]        | `Tick` frame counter                                  |
//! | [`config`]      | `SwarmConfig` and its validation                      |
//! | [`rng`]         | `SwarmRng` (seeded spawn / heading sampling)          |
//! | [`error`]       | `BoidsError`, `BoidsResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod rng;
pub mod time;
pub mod vector;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SwarmConfig;
pub use error::{BoidsError, BoidsResult};
pub use rng::SwarmRng;
pub use time::Tick;
pub use vector::{Vec2, clamp_magnitude};
