//! The `SteeringBehavior` trait — the extension point for custom behaviors.

use std::fmt;

use crate::{SteerContext, Vehicle};

/// What a behavior reports back after one application.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BehaviorOutcome {
    /// This behavior fully determined the tick's steering; behaviors later
    /// in the list are skipped.
    pub consumed: bool,

    /// The vehicle reached the behavior's target this tick.
    pub arrived: bool,
}

impl BehaviorOutcome {
    /// Keep going with the next behavior.
    pub const PASS: BehaviorOutcome = BehaviorOutcome { consumed: false, arrived: false };

    /// Stop the chain here.
    pub const CONSUMED: BehaviorOutcome = BehaviorOutcome { consumed: true, arrived: false };

    /// Keep going, but report an arrival.
    pub const ARRIVED: BehaviorOutcome = BehaviorOutcome { consumed: false, arrived: true };
}

/// Pluggable steering behavior.
///
/// A behavior adjusts the vehicle's heading, speed, turn rate, position or
/// color and returns a [`BehaviorOutcome`].  It may keep transient state of
/// its own (Avoid tracks the obstacle it is steering around) but never a
/// reference to the vehicle.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug)]
/// struct Brake(f64);
///
/// impl SteeringBehavior for Brake {
///     fn apply(&mut self, v: &mut Vehicle, dt: f64, _ctx: &mut SteerContext<'_>) -> BehaviorOutcome {
///         v.set_speed(v.speed() - self.0 * dt);
///         BehaviorOutcome::PASS
///     }
/// }
/// ```
pub trait SteeringBehavior: fmt::Debug + Send + 'static {
    /// Apply the behavior to `vehicle` for a tick of length `dt`.
    fn apply(
        &mut self,
        vehicle: &mut Vehicle,
        dt:      f64,
        ctx:     &mut SteerContext<'_>,
    ) -> BehaviorOutcome;
}
