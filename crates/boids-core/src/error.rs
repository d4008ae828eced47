//! Engine error type.
//!
//! Only construction and host-facing entry points return errors.  A length
//! mismatch between the parallel arrays inside a running swarm is a bug, not
//! a recoverable condition, and panics instead.

use thiserror::Error;

/// The error type shared by all `boids-*` crates.
#[derive(Debug, Error, PartialEq)]
pub enum BoidsError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("point ({x}, {y}) is not finite")]
    NonFinitePoint { x: f64, y: f64 },
}

/// Shorthand result type for all `boids-*` crates.
pub type BoidsResult<T> = Result<T, BoidsError>;
