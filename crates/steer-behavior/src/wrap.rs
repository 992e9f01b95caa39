//! Wrap: leave one edge of the surface, re-enter at the opposite one.

use crate::{BehaviorOutcome, SteerContext, SteeringBehavior, Vehicle};

/// Teleports the vehicle to the opposite edge when it leaves the bounds.
///
/// Each axis is handled on its own, so a vehicle leaving through a corner
/// re-enters through the opposite corner.  Never consumes the tick.
#[derive(Copy, Clone, Debug, Default)]
pub struct Wrap;

impl SteeringBehavior for Wrap {
    fn apply(
        &mut self,
        vehicle: &mut Vehicle,
        _dt:     f64,
        ctx:     &mut SteerContext<'_>,
    ) -> BehaviorOutcome {
        let b = ctx.bounds;
        let mut p = vehicle.position();

        if p.x < b.min.x {
            p.x = b.max.x;
        } else if p.x > b.max.x {
            p.x = b.min.x;
        }
        if p.y < b.min.y {
            p.y = b.max.y;
        } else if p.y > b.max.y {
            p.y = b.min.y;
        }

        vehicle.set_position(p);
        BehaviorOutcome::PASS
    }
}
