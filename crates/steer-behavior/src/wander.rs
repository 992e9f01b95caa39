//! Wander: random nudges to turn rate and speed.

use steer_core::RandomVar;

use crate::{BehaviorOutcome, SteerContext, SteeringBehavior, Vehicle};

/// Every `change_interval` units of simulated time, adds a sample of
/// `turn_rate_delta` to the turn rate and a sample of `speed_delta` to the
/// speed.  Both results are clamped by the vehicle.  Never consumes the tick.
#[derive(Clone, Debug)]
pub struct Wander {
    /// Minimum simulated time between two changes.  Default: 10.
    pub change_interval: f64,
    pub turn_rate_delta: Option<RandomVar>,
    pub speed_delta:     Option<RandomVar>,
    last_change:         f64,
}

impl Default for Wander {
    fn default() -> Self {
        Self {
            change_interval: 10.0,
            turn_rate_delta: None,
            speed_delta:     None,
            last_change:     0.0,
        }
    }
}

impl Wander {
    pub fn new(turn_rate_delta: RandomVar, speed_delta: RandomVar) -> Self {
        Self {
            turn_rate_delta: Some(turn_rate_delta),
            speed_delta:     Some(speed_delta),
            ..Self::default()
        }
    }

    pub fn with_change_interval(mut self, interval: f64) -> Self {
        self.change_interval = interval;
        self
    }

    /// Simulated time of the most recent change.
    #[inline]
    pub fn last_change(&self) -> f64 {
        self.last_change
    }
}

impl SteeringBehavior for Wander {
    fn apply(
        &mut self,
        vehicle: &mut Vehicle,
        _dt:     f64,
        ctx:     &mut SteerContext<'_>,
    ) -> BehaviorOutcome {
        if ctx.now - self.last_change >= self.change_interval {
            if let Some(var) = &self.turn_rate_delta {
                let delta = ctx.rng.sample(var);
                vehicle.set_turn_rate(vehicle.turn_rate() + delta);
            }
            if let Some(var) = &self.speed_delta {
                let delta = ctx.rng.sample(var);
                vehicle.set_speed(vehicle.speed() + delta);
            }
            self.last_change = ctx.now;
        }
        BehaviorOutcome::PASS
    }
}
