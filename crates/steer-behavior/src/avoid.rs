//! Avoid: steer around the nearest obstacle on a collision course.
//!
//! # Algorithm
//!
//! 1. **Search.**  For every candidate obstacle `o` (the behavior's own list,
//!    plus the context's vehicle snapshot when `avoid_vehicles` is set, minus
//!    the vehicle itself):
//!
//!    ```text
//!    offset = o.radius + vehicle.radius + vehicle.speed * dt
//!    gap    = |p - o| - offset
//!    ```
//!
//!    `o` qualifies when `gap <= critical_distance` and one unit step along
//!    the current heading brings the vehicle closer.  The qualifying obstacle
//!    with the smallest gap wins, except that a wall (bounce obstacle) is
//!    never displaced by a non-wall, and wins a tie against one.
//!
//! 2. **Edge transitions.**  On entering avoidance the vehicle's speed (and
//!    color, when `avoid_color` is set) are saved, then the avoid color is
//!    applied and speed multiplied by `slow_down_factor`.  On leaving, both
//!    are restored.  Moving from one obstacle straight to another is not an
//!    edge.
//!
//! 3. **Steer.**  Inside a wall: turn around, with ±3° jitter.  Inside a
//!    non-wall: keep going.  Otherwise probe `heading ± 90 * r / d` and turn
//!    toward whichever side leaves more room, at `turn_sharpness` degrees per
//!    unit time.  The turn rate is zeroed while avoiding.

use std::sync::Arc;

use log::debug;

use crate::{
    BehaviorOutcome, Obstacle, ObstacleRef, SteerContext, SteeringBehavior, Vehicle,
};

/// Maximum jitter, in degrees, added to a turn-around off a wall.
const BOUNCE_JITTER: f64 = 3.0;

#[derive(Clone, Debug)]
pub struct Avoid {
    /// Fixed obstacles.  Shared between all vehicles of a scenario.
    pub obstacles: Arc<[Obstacle]>,

    /// Also avoid the other vehicles in the context's snapshot.
    pub avoid_vehicles: bool,

    /// Color shown while avoiding.  `None` keeps the vehicle's own color.
    pub avoid_color: Option<String>,

    /// Speed multiplier applied on entering avoidance.  Default: 0.75.
    pub slow_down_factor: f64,

    /// Maximum heading change in degrees per unit time.  Default: 0.5.
    pub turn_sharpness: f64,

    /// Consume the tick while avoiding, so lower-priority behaviors do not
    /// fight the avoidance turn.  Default: `true`.
    pub suppress_lower_priority: bool,

    /// Gap at which an obstacle becomes a threat.  `None`: the vehicle's
    /// radius.
    pub critical_distance: Option<f64>,

    current:     Option<ObstacleRef>,
    saved_color: Option<String>,
    saved_speed: f64,
}

impl Default for Avoid {
    fn default() -> Self {
        Self {
            obstacles:               Arc::from(Vec::new()),
            avoid_vehicles:          false,
            avoid_color:             None,
            slow_down_factor:        0.75,
            turn_sharpness:          0.5,
            suppress_lower_priority: true,
            critical_distance:       None,
            current:                 None,
            saved_color:             None,
            saved_speed:             0.0,
        }
    }
}

impl Avoid {
    pub fn new(obstacles: impl Into<Arc<[Obstacle]>>) -> Self {
        Self { obstacles: obstacles.into(), ..Self::default() }
    }

    pub fn with_vehicles(mut self, avoid_vehicles: bool) -> Self {
        self.avoid_vehicles = avoid_vehicles;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.avoid_color = Some(color.into());
        self
    }

    pub fn with_slow_down(mut self, factor: f64) -> Self {
        self.slow_down_factor = factor;
        self
    }

    pub fn with_turn_sharpness(mut self, degrees: f64) -> Self {
        self.turn_sharpness = degrees;
        self
    }

    pub fn with_critical_distance(mut self, distance: f64) -> Self {
        self.critical_distance = Some(distance);
        self
    }

    pub fn suppress_lower_priority(mut self, suppress: bool) -> Self {
        self.suppress_lower_priority = suppress;
        self
    }

    /// The obstacle currently being avoided.
    #[inline]
    pub fn current_obstacle(&self) -> Option<ObstacleRef> {
        self.current
    }

    #[inline]
    pub fn is_avoiding(&self) -> bool {
        self.current.is_some()
    }

    /// The obstacle this vehicle should avoid now, if any.
    pub fn nearest_obstacle(
        &self,
        vehicle: &Vehicle,
        dt:      f64,
        ctx:     &SteerContext<'_>,
    ) -> Option<(ObstacleRef, Obstacle)> {
        let critical = self.critical_distance.unwrap_or(vehicle.radius());
        let here = vehicle.position();
        let next = here + vehicle.direction();
        let reach = vehicle.radius() + vehicle.speed() * dt;

        let statics = self
            .obstacles
            .iter()
            .enumerate()
            .map(|(i, o)| (ObstacleRef::Static(i), o));
        let neighbors = ctx
            .neighbors
            .iter()
            .enumerate()
            .filter(|_| self.avoid_vehicles)
            .map(|(i, o)| (ObstacleRef::Neighbor(i), o));

        let mut best: Option<(ObstacleRef, &Obstacle, f64)> = None;
        for (r, o) in statics.chain(neighbors) {
            if o.owner == Some(ctx.vehicle) {
                continue;
            }
            let offset = o.radius + reach;
            let gap = here.distance(o.position) - offset;
            if gap > critical {
                continue;
            }
            if next.distance(o.position) - offset >= gap {
                continue; // moving away or sideways
            }
            let better = match best {
                None => true,
                Some((_, b, best_gap)) => {
                    if gap < best_gap {
                        o.bounce || !b.bounce
                    } else {
                        gap == best_gap && o.bounce && !b.bounce
                    }
                }
            };
            if better {
                best = Some((r, o, gap));
            }
        }
        best.map(|(r, o, _)| (r, o.clone()))
    }

    /// Heading that steers `vehicle` around `o`.
    pub fn avoid_heading(
        &self,
        vehicle: &Vehicle,
        o:       &Obstacle,
        dt:      f64,
        ctx:     &mut SteerContext<'_>,
    ) -> f64 {
        let here = vehicle.position();
        let heading = vehicle.heading();
        let d = here.distance(o.position);

        if d < o.radius || d <= 0.0 {
            return if o.bounce {
                heading + 180.0 + ctx.rng.gen_range(-BOUNCE_JITTER..BOUNCE_JITTER)
            } else {
                heading
            };
        }

        let delta = 90.0 * o.radius / d;
        let room = |a: f64| o.position.distance(here.offset(heading + a, o.radius));
        let chosen = if room(delta) > room(-delta) { delta } else { -delta };
        vehicle.turn_toward(heading + chosen, dt, self.turn_sharpness)
    }

    fn transition(&mut self, vehicle: &mut Vehicle, next: Option<ObstacleRef>, ctx: &SteerContext<'_>) {
        match (self.current, next) {
            (None, Some(r)) => {
                if let Some(color) = self.avoid_color.as_deref().filter(|c| !c.is_empty()) {
                    self.saved_color = Some(vehicle.color().to_owned());
                    vehicle.set_color(color);
                }
                self.saved_speed = vehicle.speed();
                vehicle.set_speed(vehicle.speed() * self.slow_down_factor);
                debug!("{} start avoiding {r:?}", ctx.vehicle);
            }
            (Some(r), None) => {
                if let Some(color) = self.saved_color.take() {
                    vehicle.set_color(color);
                }
                vehicle.set_speed(self.saved_speed);
                debug!("{} done avoiding {r:?}", ctx.vehicle);
            }
            _ => {}
        }
        self.current = next;
    }
}

impl SteeringBehavior for Avoid {
    fn apply(
        &mut self,
        vehicle: &mut Vehicle,
        dt:      f64,
        ctx:     &mut SteerContext<'_>,
    ) -> BehaviorOutcome {
        let found = self.nearest_obstacle(vehicle, dt, ctx);
        self.transition(vehicle, found.as_ref().map(|(r, _)| *r), ctx);

        let Some((_, obstacle)) = found else {
            return BehaviorOutcome::PASS;
        };
        let heading = self.avoid_heading(vehicle, &obstacle, dt, ctx);
        vehicle.set_heading(heading);
        vehicle.set_turn_rate(0.0);

        BehaviorOutcome {
            consumed: self.suppress_lower_priority,
            arrived:  false,
        }
    }
}
