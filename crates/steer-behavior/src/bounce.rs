//! Bounce: reflect off the edges of the surface.

use crate::{BehaviorOutcome, SteerContext, SteeringBehavior, Vehicle};

/// Reflects the heading when the vehicle's edge (centre ± radius) crosses
/// the bounds, and pulls the vehicle back onto the crossed bound.
///
/// An x crossing gives `heading = 180 - heading`; otherwise a y crossing
/// gives `heading = -heading`.  Only one axis is reflected per tick, x
/// first.  Never consumes the tick.
#[derive(Copy, Clone, Debug, Default)]
pub struct Bounce;

impl SteeringBehavior for Bounce {
    fn apply(
        &mut self,
        vehicle: &mut Vehicle,
        _dt:     f64,
        ctx:     &mut SteerContext<'_>,
    ) -> BehaviorOutcome {
        let b = ctx.bounds;
        let r = vehicle.radius();
        let (x_min, x_max) = (b.min.x + r, b.max.x - r);
        let (y_min, y_max) = (b.min.y + r, b.max.y - r);
        let mut p = vehicle.position();

        if p.x < x_min || p.x > x_max {
            vehicle.set_heading(180.0 - vehicle.heading());
            p.x = if p.x < x_min { x_min } else { x_max };
        } else if p.y < y_min || p.y > y_max {
            vehicle.set_heading(-vehicle.heading());
            p.y = if p.y < y_min { y_min } else { y_max };
        }

        vehicle.set_position(p);
        BehaviorOutcome::PASS
    }
}
