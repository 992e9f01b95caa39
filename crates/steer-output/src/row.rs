//! Plain data row types written by output backends.

use steer_behavior::Vehicle;
use steer_core::{Tick, VehicleId};

/// One vehicle's pose and speed at a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSnapshotRow {
    pub vehicle_id: u32,
    pub tick:       u64,
    /// Simulated time the vehicle had been advanced to.
    pub time:       f64,
    pub x:          f64,
    pub y:          f64,
    /// Degrees, clockwise, in `(-180, 180]`.
    pub heading:    f64,
    pub speed:      f64,
    pub color:      String,
}

impl VehicleSnapshotRow {
    pub fn new(id: VehicleId, tick: Tick, time: f64, vehicle: &Vehicle) -> Self {
        let p = vehicle.position();
        Self {
            vehicle_id: id.0,
            tick:       tick.0,
            time,
            x:          p.x,
            y:          p.y,
            heading:    vehicle.heading(),
            speed:      vehicle.speed(),
            color:      vehicle.color().to_owned(),
        }
    }
}

/// Counts for one simulation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSummaryRow {
    pub tick:          u64,
    pub time:          f64,
    pub live_vehicles: u64,
    pub arrivals:      u64,
    pub finished:      u64,
}
