//! Seek: head for a target point, slowing down on approach.

use log::trace;
use steer_core::Point;

use crate::{BehaviorOutcome, SteerContext, SteeringBehavior, Vehicle};

/// What Seek does, besides reporting, when the vehicle is within
/// `arrival_distance` of the target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ArrivalAction {
    /// Only report the arrival in the outcome.
    #[default]
    Notify,

    /// Mark the vehicle done so the scheduler removes it.
    Finish,

    /// Move the vehicle to a random position inside the bounds.
    Respawn,
}

/// Steers toward `target` at a limited turn rate and scales speed with the
/// remaining distance:
///
///   speed = speed_max * min(1, distance / max_speed_distance)
///
/// Arrival is reported on **every** tick the vehicle spends within
/// `arrival_distance`, not only on the tick it first gets there; callers
/// that want a one-shot signal must debounce.  Never consumes the tick.
#[derive(Clone, Debug)]
pub struct Seek {
    /// `None` makes the behavior a no-op.
    pub target: Option<Point>,

    /// Maximum heading change in degrees per unit time.  Default: 0.5.
    pub turn_sharpness: f64,

    /// Distance that counts as arrived.  `None`: the vehicle's radius.
    pub arrival_distance: Option<f64>,

    /// Distance at or beyond which the vehicle runs at full speed.
    /// `None`: half the width of the bounds.  Zero: always full speed.
    pub max_speed_distance: Option<f64>,

    pub on_arrival: ArrivalAction,
}

impl Default for Seek {
    fn default() -> Self {
        Self {
            target:             None,
            turn_sharpness:     0.5,
            arrival_distance:   None,
            max_speed_distance: None,
            on_arrival:         ArrivalAction::Notify,
        }
    }
}

impl Seek {
    pub fn new(target: Point) -> Self {
        Self { target: Some(target), ..Self::default() }
    }

    pub fn with_turn_sharpness(mut self, degrees: f64) -> Self {
        self.turn_sharpness = degrees;
        self
    }

    pub fn with_arrival_distance(mut self, distance: f64) -> Self {
        self.arrival_distance = Some(distance);
        self
    }

    pub fn with_max_speed_distance(mut self, distance: f64) -> Self {
        self.max_speed_distance = Some(distance);
        self
    }

    pub fn on_arrival(mut self, action: ArrivalAction) -> Self {
        self.on_arrival = action;
        self
    }
}

impl SteeringBehavior for Seek {
    fn apply(
        &mut self,
        vehicle: &mut Vehicle,
        dt:      f64,
        ctx:     &mut SteerContext<'_>,
    ) -> BehaviorOutcome {
        let Some(target) = self.target else {
            return BehaviorOutcome::PASS;
        };
        let here = vehicle.position();
        let dist = here.distance(target);

        // Without a finite top speed there is nothing to scale.
        if let Some(max) = vehicle.speed_max() {
            let full = self.max_speed_distance.unwrap_or(ctx.bounds.width() * 0.5);
            let pct = if full > 0.0 { (dist / full).min(1.0) } else { 1.0 };
            vehicle.set_speed(max * pct);
        }

        let heading = vehicle.turn_toward(here.angle_to(target), dt, self.turn_sharpness);
        vehicle.set_heading(heading);

        let arrival = self.arrival_distance.unwrap_or(vehicle.radius());
        if dist >= arrival {
            return BehaviorOutcome::PASS;
        }

        trace!("{} arrived at {target} ({dist:.2} away)", ctx.vehicle);
        match self.on_arrival {
            ArrivalAction::Notify => {}
            ArrivalAction::Finish => vehicle.finish(),
            ArrivalAction::Respawn => {
                let p = ctx.random_position();
                vehicle.set_position(p);
            }
        }
        BehaviorOutcome::ARRIVED
    }
}
