//! The steerable vehicle and its per-tick integration step.

use steer_core::{Point, normalize_degrees};

use crate::{Behavior, SteerContext, SteeringBehavior};

/// Position and heading, as read by a renderer once per frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Pose {
    pub position: Point,
    pub heading:  f64,
}

/// What happened during one [`Vehicle::update`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct UpdateReport {
    /// At least one behavior reported an arrival.
    pub arrived: bool,

    /// Index of the behavior that consumed the tick, if any.
    pub consumed_by: Option<usize>,

    /// Pose after integration.
    pub pose: Pose,
}

/// Construction parameters for a [`Vehicle`].
///
/// Every field has a default, so scenarios only spell out what differs:
///
/// ```rust,ignore
/// let v = Vehicle::new(VehicleOptions {
///     speed_max: Some(50.0),
///     behaviors: vec![Wrap.into()],
///     ..VehicleOptions::default()
/// });
/// ```
#[derive(Debug)]
pub struct VehicleOptions {
    pub position:      Point,
    /// Degrees, clockwise.
    pub heading:       f64,
    pub speed:         f64,
    pub speed_min:     f64,
    /// `None` means no upper limit.
    pub speed_max:     Option<f64>,
    pub acceleration:  f64,
    /// Degrees per unit time.
    pub turn_rate:     f64,
    pub turn_rate_max: f64,
    pub radius:        f64,
    pub color:         String,
    /// Priority order: first entry runs first.
    pub behaviors:     Vec<Behavior>,
}

impl Default for VehicleOptions {
    fn default() -> Self {
        Self {
            position:      Point::ORIGIN,
            heading:       0.0,
            speed:         0.0,
            speed_min:     0.0,
            speed_max:     None,
            acceleration:  0.0,
            turn_rate:     0.0,
            turn_rate_max: 90.0,
            radius:        25.0,
            color:         "black".to_owned(),
            behaviors:     Vec::new(),
        }
    }
}

/// A body moving on the simulation surface under the control of a list of
/// steering behaviors.
///
/// Kinematic fields are private: every setter normalizes or clamps before
/// storing, so no reader ever sees a heading outside `(-180, 180]`, a speed
/// outside `[speed_min, speed_max]` or a turn rate outside
/// `[-turn_rate_max, turn_rate_max]`.  Setters return the stored value.
#[derive(Debug)]
pub struct Vehicle {
    position:      Point,
    heading:       f64,
    sin:           f64,
    cos:           f64,
    turn_rate:     f64,
    turn_rate_max: f64,
    speed:         f64,
    speed_min:     f64,
    speed_max:     Option<f64>,
    acceleration:  f64,
    radius:        f64,
    color:         String,
    behaviors:     Vec<Behavior>,
    done:          bool,
    last_update:   f64,
}

impl Default for Vehicle {
    fn default() -> Self {
        Vehicle::new(VehicleOptions::default())
    }
}

impl Vehicle {
    /// Build a vehicle, applying bounds before the values they constrain.
    pub fn new(opts: VehicleOptions) -> Self {
        let mut v = Vehicle {
            position:      opts.position,
            heading:       0.0,
            sin:           0.0,
            cos:           1.0,
            turn_rate:     0.0,
            turn_rate_max: 0.0,
            speed:         0.0,
            speed_min:     0.0,
            speed_max:     None,
            acceleration:  opts.acceleration,
            radius:        0.0,
            color:         opts.color,
            behaviors:     opts.behaviors,
            done:          false,
            last_update:   0.0,
        };
        v.set_heading(opts.heading);
        v.set_turn_rate_max(opts.turn_rate_max);
        v.set_turn_rate(opts.turn_rate);
        v.speed_min = opts.speed_min;
        v.speed_max = opts.speed_max;
        v.set_speed(opts.speed);
        v.set_radius(opts.radius);
        v
    }

    // ── Position ──────────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Relocate the vehicle (respawn, wrap, bounce clamping).
    #[inline]
    pub fn set_position(&mut self, p: Point) {
        self.position = p;
    }

    #[inline]
    pub fn pose(&self) -> Pose {
        Pose { position: self.position, heading: self.heading }
    }

    // ── Heading ───────────────────────────────────────────────────────────

    /// Direction of travel in degrees, clockwise, in `(-180, 180]`.
    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn set_heading(&mut self, degrees: f64) -> f64 {
        self.heading = normalize_degrees(degrees);
        let (sin, cos) = self.heading.to_radians().sin_cos();
        self.sin = sin;
        self.cos = cos;
        self.heading
    }

    /// Unit vector along the current heading.
    #[inline]
    pub fn direction(&self) -> Point {
        Point::new(self.cos, self.sin)
    }

    // ── Turn rate ─────────────────────────────────────────────────────────

    #[inline]
    pub fn turn_rate(&self) -> f64 {
        self.turn_rate
    }

    pub fn set_turn_rate(&mut self, rate: f64) -> f64 {
        self.turn_rate = rate.max(-self.turn_rate_max).min(self.turn_rate_max);
        self.turn_rate
    }

    #[inline]
    pub fn turn_rate_max(&self) -> f64 {
        self.turn_rate_max
    }

    /// Negative limits are stored as zero.  Re-clamps the current turn rate.
    pub fn set_turn_rate_max(&mut self, max: f64) -> f64 {
        self.turn_rate_max = max.max(0.0);
        self.set_turn_rate(self.turn_rate);
        self.turn_rate_max
    }

    // ── Speed ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) -> f64 {
        let floored = speed.max(self.speed_min);
        self.speed = match self.speed_max {
            Some(max) => floored.min(max),
            None => floored,
        };
        self.speed
    }

    #[inline]
    pub fn speed_min(&self) -> f64 {
        self.speed_min
    }

    /// Re-clamps the current speed.
    pub fn set_speed_min(&mut self, min: f64) -> f64 {
        self.speed_min = min;
        self.set_speed(self.speed);
        self.speed_min
    }

    #[inline]
    pub fn speed_max(&self) -> Option<f64> {
        self.speed_max
    }

    /// Re-clamps the current speed.
    pub fn set_speed_max(&mut self, max: Option<f64>) -> Option<f64> {
        self.speed_max = max;
        self.set_speed(self.speed);
        self.speed_max
    }

    #[inline]
    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    #[inline]
    pub fn set_acceleration(&mut self, accel: f64) {
        self.acceleration = accel;
    }

    // ── Shape, color, lifecycle ───────────────────────────────────────────

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) -> f64 {
        self.radius = radius.max(0.0);
        self.radius
    }

    #[inline]
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// `true` once the vehicle has asked to leave the simulation.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Ask the scheduler to remove this vehicle.  There is no way back.
    #[inline]
    pub fn finish(&mut self) {
        self.done = true;
    }

    #[inline]
    pub fn last_update(&self) -> f64 {
        self.last_update
    }

    /// Record `now` as the time of the last update without moving.
    #[inline]
    pub fn mark_updated(&mut self, now: f64) {
        self.last_update = now;
    }

    // ── Behaviors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn behaviors(&self) -> &[Behavior] {
        &self.behaviors
    }

    #[inline]
    pub fn behaviors_mut(&mut self) -> &mut Vec<Behavior> {
        &mut self.behaviors
    }

    /// Append a behavior at the lowest priority.
    pub fn push_behavior(&mut self, behavior: impl Into<Behavior>) {
        self.behaviors.push(behavior.into());
    }

    // ── Steering ──────────────────────────────────────────────────────────

    /// The heading that turns from the current one toward `target` by at
    /// most `max(max_rate, max_rate * dt)` degrees, along the shorter arc.
    ///
    /// When the remaining turn is smaller than that step, `target` is
    /// returned unchanged so the heading settles instead of oscillating.
    pub fn turn_toward(&self, target: f64, dt: f64, max_rate: f64) -> f64 {
        let step = max_rate.max(max_rate * dt);
        let delta = normalize_degrees(target - self.heading);
        if delta.abs() < step {
            return target;
        }
        self.heading + step * delta.signum()
    }

    /// Run the behavior chain, then integrate heading, speed and position
    /// over `dt`.
    pub fn update(&mut self, dt: f64, ctx: &mut SteerContext<'_>) -> UpdateReport {
        let mut report = UpdateReport::default();

        // Behaviors borrow the vehicle mutably, so the list is moved out for
        // the duration of the chain.
        let mut behaviors = std::mem::take(&mut self.behaviors);
        for (i, behavior) in behaviors.iter_mut().enumerate() {
            let outcome = behavior.apply(self, dt, ctx);
            report.arrived |= outcome.arrived;
            if outcome.consumed {
                report.consumed_by = Some(i);
                break;
            }
        }
        behaviors.append(&mut self.behaviors);
        self.behaviors = behaviors;

        self.set_heading(self.heading + self.turn_rate * dt);
        self.set_speed(self.speed + self.acceleration * dt);
        self.position.x += self.speed * self.cos * dt;
        self.position.y += self.speed * self.sin * dt;

        report.pose = self.pose();
        report
    }

    /// Catch up to simulated time `now`: update over the time elapsed since
    /// the previous catch-up and remember `now`.  A `now` earlier than the
    /// last catch-up runs a zero-length tick and leaves the mark in place.
    pub fn advance_to(&mut self, now: f64, ctx: &mut SteerContext<'_>) -> UpdateReport {
        let dt = (now - self.last_update).max(0.0);
        let report = self.update(dt, ctx);
        self.last_update = self.last_update.max(now);
        report
    }
}
