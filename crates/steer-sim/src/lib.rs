//! `steer-sim` — fixed-step scheduler for the steering simulation workspace.
//!
//! # Step loop
//!
//! ```text
//! for tick in 0..config.total_steps:
//!   now = (tick + 1) * config.step
//!   ① Snapshot — every live vehicle becomes a non-bounce Obstacle.
//!   ② Update   — advance_to(now) for each live vehicle, ascending VehicleId;
//!                arrivals → SimObserver::on_arrival.
//!   ③ Remove   — vehicles marked done during ② leave the simulation.
//!   ④ Report   — on_step_end, and on_snapshot every output_interval_steps.
//! ```
//!
//! # Cargo features
//!
//! | Feature | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Scenario` and steer-core's `SimConfig` become (de)serializable. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use steer_core::SimConfig;
//! use steer_sim::{NoopObserver, Scenario};
//!
//! let mut sim = Scenario::SeekAvoid.build(SimConfig::default(), 20)?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod scenario;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, StepStats};
pub use scenario::Scenario;
pub use sim::{Sim, TrackedVehicle};
