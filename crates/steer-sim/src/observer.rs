//! Simulation observer trait for progress reporting and data collection.

use steer_behavior::Vehicle;
use steer_core::{Tick, VehicleId};

use crate::TrackedVehicle;

/// Counts for one completed step, passed to [`SimObserver::on_step_end`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Vehicles still in the simulation after the step.
    pub live:     usize,
    /// Vehicles whose update reported an arrival this step.
    pub arrivals: usize,
    /// Vehicles removed at the end of this step.
    pub finished: usize,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: arrival counter
///
/// ```rust,ignore
/// struct Arrivals(usize);
///
/// impl SimObserver for Arrivals {
///     fn on_arrival(&mut self, _tick: Tick, _id: VehicleId, _v: &Vehicle) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before any vehicle moves.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called once per vehicle per step while its update reports an arrival.
    /// Seek arrivals are level-triggered, so a vehicle parked inside its
    /// arrival radius is reported every step.
    fn on_arrival(&mut self, _tick: Tick, _id: VehicleId, _vehicle: &Vehicle) {}

    /// Called for each vehicle removed because it finished, after every
    /// vehicle has been updated for the step.
    fn on_vehicle_done(&mut self, _tick: Tick, _id: VehicleId, _vehicle: &Vehicle) {}

    /// Called at the end of each step.
    fn on_step_end(&mut self, _tick: Tick, _stats: &StepStats) {}

    /// Called at snapshot intervals (every `config.output_interval_steps`
    /// steps) with every live vehicle, in id order.  `now` is the simulated
    /// time the vehicles have been advanced to.
    fn on_snapshot(&mut self, _tick: Tick, _now: f64, _vehicles: &[TrackedVehicle]) {}

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
