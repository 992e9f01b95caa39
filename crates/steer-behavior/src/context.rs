//! The world view handed to every behavior callback.

use steer_core::{Bounds, Point, VehicleId, VehicleRng};

use crate::Obstacle;

/// Everything a behavior may consult besides the vehicle itself.
///
/// The scheduler builds one context per vehicle update.  `neighbors` is a
/// snapshot of every live vehicle taken at the start of the step, so
/// vehicles spawning or leaving between steps never invalidate a scan in
/// progress.
pub struct SteerContext<'a> {
    /// Current simulated time.
    pub now: f64,

    /// The simulation surface.
    pub bounds: Bounds,

    /// Identity of the vehicle being updated.  Avoid uses it to skip the
    /// vehicle's own entry in `neighbors`.
    pub vehicle: VehicleId,

    /// Live vehicles as obstacles, one entry per vehicle.
    pub neighbors: &'a [Obstacle],

    /// The updating vehicle's own RNG.
    pub rng: &'a mut VehicleRng,
}

impl<'a> SteerContext<'a> {
    #[inline]
    pub fn new(
        now:       f64,
        bounds:    Bounds,
        vehicle:   VehicleId,
        neighbors: &'a [Obstacle],
        rng:       &'a mut VehicleRng,
    ) -> Self {
        Self { now, bounds, vehicle, neighbors, rng }
    }

    /// A whole-unit random position inside `bounds`.
    pub fn random_position(&mut self) -> Point {
        self.bounds.random_point(self.rng.inner())
    }
}
