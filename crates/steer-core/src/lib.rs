//! `steer-core` — foundational types for the steering simulation workspace.
//!
//! This crate is a dependency of every other `steer-*` crate.  It has no
//! `steer-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`ids`]   | `VehicleId`                                                |
//! | [`geo`]   | `Point`, `Bounds`, `normalize_degrees`                     |
//! | [`time`]  | `Tick`, `SimClock`, `SimConfig`                            |
//! | [`rng`]   | `VehicleRng` (per-vehicle), `SimRng` (global), `RandomVar` |
//! | [`error`] | `SteerError`, `SteerResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to value and config types.    |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SteerError, SteerResult};
pub use geo::{Bounds, Point, normalize_degrees};
pub use ids::VehicleId;
pub use rng::{RandomVar, SimRng, VehicleRng};
pub use time::{SimClock, SimConfig, Tick};
