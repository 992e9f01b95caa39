//! `steer-behavior` — steerable vehicles and the behaviors that drive them.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                          |
//! |--------------|-------------------------------------------------------------------|
//! | [`vehicle`]  | `Vehicle`, `VehicleOptions`, `Pose`, `UpdateReport`               |
//! | [`context`]  | `SteerContext<'a>` — per-update view of the world                 |
//! | [`model`]    | `SteeringBehavior` trait, `BehaviorOutcome`                       |
//! | [`behavior`] | `Behavior` — the tagged union stored in a vehicle's behavior list |
//! | [`wrap`], [`bounce`], [`wander`], [`seek`], [`avoid`] | the built-in behaviors   |
//! | [`obstacle`] | `Obstacle`, `ObstacleRef`, obstacle-chain generators              |
//!
//! # Update order
//!
//! Every call to [`Vehicle::update`] runs the same fixed sequence:
//!
//! 1. **Behaviors**, in list order.  The first behavior whose outcome is
//!    `consumed` stops the chain; lower-priority behaviors skip this tick.
//! 2. **Heading** += `turn_rate * dt`, then normalized to `(-180, 180]`.
//! 3. **Speed** += `acceleration * dt`, then clamped.
//! 4. **Position** += `speed * (cos, sin)(heading) * dt`.
//!
//! Behaviors never store the vehicle; it is passed to them on each call
//! together with a [`SteerContext`].

pub mod avoid;
pub mod behavior;
pub mod bounce;
pub mod context;
pub mod model;
pub mod obstacle;
pub mod seek;
pub mod vehicle;
pub mod wander;
pub mod wrap;


pub use avoid::Avoid;
pub use behavior::Behavior;
pub use bounce::Bounce;
pub use context::SteerContext;
pub use model::{BehaviorOutcome, SteeringBehavior};
pub use obstacle::{Obstacle, ObstacleRef, obstacles_for_path, obstacles_for_segment};
pub use seek::{ArrivalAction, Seek};
pub use vehicle::{Pose, UpdateReport, Vehicle, VehicleOptions};
pub use wander::Wander;
pub use wrap::Wrap;
