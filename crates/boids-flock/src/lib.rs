//! `boids-flock` — Structure-of-Arrays flock storage for the boids engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`store`]       | `FlockStore` (parallel position / velocity arrays)        |
//! | [`builder`]     | `FlockStoreBuilder` (randomised or explicit construction) |
//! | [`stats`]       | `FlockStats` (speed and centroid summary)                 |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod builder;
pub mod stats;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::FlockStoreBuilder;
pub use stats::FlockStats;
pub use store::FlockStore;
