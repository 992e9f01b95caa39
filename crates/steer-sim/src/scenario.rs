//! The three sample scenarios: seek, avoid, and seek-avoid.
//!
//! Obstacle layouts are in surface coordinates of the default
//! `(0,0)–(1000,500)` bounds.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use steer_behavior::{
    ArrivalAction, Avoid, Bounce, Obstacle, Seek, VehicleOptions, Wander, Wrap, obstacles_for_path,
};
use steer_core::{Bounds, Point, RandomVar, SimConfig, SimRng};

use crate::{Sim, SimBuilder, SimError, SimResult};

/// Color of a vehicle going about its business.
const VEHICLE_COLOR: &str = "orange";

/// Color of a vehicle while it is avoiding an obstacle.
const AVOID_COLOR: &str = "red";

/// A ready-made population of vehicles and behaviors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Scenario {
    /// Vehicles head for the centre of the surface and reappear at a random
    /// position when they get there.
    Seek,

    /// Vehicles wander around six fixed obstacles, wrapping at the edges.
    Avoid,

    /// [`Scenario::Avoid`], with vehicles also steering around each other.
    AvoidVehicles,

    /// Vehicles start along the bottom edge and funnel between two walls
    /// toward an exit at the top centre, leaving the simulation on arrival.
    SeekAvoid,
}

impl Scenario {
    /// Vehicle count used when none is given.
    pub const DEFAULT_ENTITY_COUNT: usize = 8;

    pub const ALL: [Scenario; 4] = [
        Scenario::Seek,
        Scenario::Avoid,
        Scenario::AvoidVehicles,
        Scenario::SeekAvoid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Seek          => "seek",
            Scenario::Avoid         => "avoid",
            Scenario::AvoidVehicles => "avoid-vehicles",
            Scenario::SeekAvoid     => "seek-avoid",
        }
    }

    /// Build a simulation with `entity_count` vehicles.  Initial positions,
    /// speeds and headings are drawn from an RNG seeded with `config.seed`.
    pub fn build(self, config: SimConfig, entity_count: usize) -> SimResult<Sim> {
        config.validate()?;
        let vehicles = self.vehicles(&config.bounds, entity_count, &mut SimRng::new(config.seed));
        SimBuilder::new(config).vehicles(vehicles).build()
    }

    /// The initial vehicles of this scenario.
    pub fn vehicles(self, bounds: &Bounds, entity_count: usize, rng: &mut SimRng) -> Vec<VehicleOptions> {
        match self {
            Scenario::Seek => (0..entity_count).map(|_| seeker(bounds, rng)).collect(),
            Scenario::Avoid | Scenario::AvoidVehicles => {
                let obstacles: Arc<[Obstacle]> = avoid_obstacles().into();
                let avoid_vehicles = self == Scenario::AvoidVehicles;
                (0..entity_count)
                    .map(|_| wanderer(bounds, rng, &obstacles, avoid_vehicles))
                    .collect()
            }
            Scenario::SeekAvoid => {
                let walls: Arc<[Obstacle]> = funnel_walls().into();
                (0..entity_count).map(|_| funnel_runner(bounds, rng, &walls)).collect()
            }
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Scenario::ALL
            .into_iter()
            .find(|sc| sc.name() == wanted)
            .ok_or_else(|| SimError::UnknownScenario(s.to_owned()))
    }
}

// ── Seek ──────────────────────────────────────────────────────────────────────

fn seeker(bounds: &Bounds, rng: &mut SimRng) -> VehicleOptions {
    VehicleOptions {
        position:      bounds.random_point(rng.inner()),
        heading:       (rng.random::<f64>() * 360.0).round(),
        speed:         rng.sample(&RandomVar::uniform(10.0, 50.0)),
        speed_min:     10.0,
        speed_max:     Some(50.0),
        turn_rate_max: 45.0,
        color:         VEHICLE_COLOR.to_owned(),
        behaviors:     vec![
            Seek::new(bounds.center())
                .with_turn_sharpness(0.5)
                .on_arrival(ArrivalAction::Respawn)
                .into(),
        ],
        ..VehicleOptions::default()
    }
}

// ── Avoid ─────────────────────────────────────────────────────────────────────

fn avoid_obstacles() -> Vec<Obstacle> {
    [
        (100.0, 400.0, 50.0),
        (150.0, 300.0, 30.0),
        (200.0, 150.0, 80.0),
        (500.0, 250.0, 125.0),
        (800.0, 200.0, 50.0),
        (800.0, 400.0, 75.0),
    ]
    .into_iter()
    .map(|(x, y, r)| Obstacle::new(Point::new(x, y), r))
    .collect()
}

fn wanderer(
    bounds:         &Bounds,
    rng:            &mut SimRng,
    obstacles:      &Arc<[Obstacle]>,
    avoid_vehicles: bool,
) -> VehicleOptions {
    // Start on the top edge, clear of the obstacles.
    let mut position = bounds.random_point(rng.inner());
    position.y = bounds.min.y;

    VehicleOptions {
        position,
        heading:       (rng.random::<f64>() * 360.0).round(),
        speed:         rng.sample(&RandomVar::uniform(10.0, 50.0)),
        speed_min:     10.0,
        speed_max:     Some(50.0),
        turn_rate_max: 45.0,
        color:         VEHICLE_COLOR.to_owned(),
        behaviors:     vec![
            Avoid::new(Arc::clone(obstacles))
                .with_color(AVOID_COLOR)
                .with_vehicles(avoid_vehicles)
                .into(),
            Wander::new(RandomVar::uniform(-20.0, 20.0), RandomVar::uniform(-50.0, 50.0)).into(),
            Wrap.into(),
        ],
        ..VehicleOptions::default()
    }
}

// ── Seek-avoid ────────────────────────────────────────────────────────────────

/// Two polylines of touching wall obstacles forming a funnel whose mouth is
/// at the top centre of the surface.
fn funnel_walls() -> Vec<Obstacle> {
    let left = [Point::new(-100.0, 450.0), Point::new(450.0, 150.0), Point::new(450.0, -10.0)];
    let right = [Point::new(1100.0, 450.0), Point::new(550.0, 150.0), Point::new(550.0, -10.0)];

    let mut walls = obstacles_for_path(&left, 5.0, true);
    walls.extend(obstacles_for_path(&right, 5.0, true));
    walls
}

fn funnel_runner(bounds: &Bounds, rng: &mut SimRng, walls: &Arc<[Obstacle]>) -> VehicleOptions {
    let speed = RandomVar::uniform(10.0, 100.0);
    let exit = Point::new(bounds.min.x + bounds.width() * 0.5, bounds.min.y);

    VehicleOptions {
        speed_max: Some(rng.sample(&speed)),
        speed:     rng.sample(&speed),
        speed_min: 10.0,
        heading:   rng.sample(&RandomVar::uniform(0.0, 360.0)),
        position:  Point::new(
            rng.sample(&RandomVar::uniform(bounds.min.x, bounds.max.x)),
            rng.sample(&RandomVar::uniform(460.0, 490.0)),
        ),
        radius:    10.0,
        color:     VEHICLE_COLOR.to_owned(),
        behaviors: vec![
            Bounce.into(),
            Avoid::new(Arc::clone(walls))
                .with_color(AVOID_COLOR)
                .with_vehicles(true)
                .into(),
            Seek::new(exit)
                .with_arrival_distance(25.0)
                .on_arrival(ArrivalAction::Finish)
                .into(),
        ],
        ..VehicleOptions::default()
    }
}
