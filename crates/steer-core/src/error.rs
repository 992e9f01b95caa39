//! Workspace error type.
//!
//! Sub-crates define their own error enums and wrap `SteerError` as one
//! variant via `From`, so `?` works across crate boundaries.

use thiserror::Error;

use crate::Bounds;

/// The top-level error type for `steer-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SteerError {
    #[error("time step must be finite and positive, got {0}")]
    InvalidStep(f64),

    #[error("bounds must have positive finite extent, got {min} .. {max}", min = .0.min, max = .0.max)]
    InvalidBounds(Bounds),
}

/// Shorthand result type for all `steer-*` crates.
pub type SteerResult<T> = Result<T, SteerError>;
