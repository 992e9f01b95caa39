//! Circular obstacles and helpers that lay them out along paths.

use steer_core::{Point, VehicleId};

use crate::Vehicle;

/// Obstacle radius relative to half the spacing, so neighbours in a chain
/// overlap and leave no gap to slip through.
const CHAIN_OVERLAP: f64 = 1.1;

/// A circle vehicles steer around.
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub position: Point,
    pub radius:   f64,

    /// `true`: a wall; vehicles that end up inside turn around.
    /// `false`: vehicles already inside simply pass through.
    pub bounce:   bool,

    /// Set when the obstacle stands for a live vehicle.
    pub owner:    Option<VehicleId>,
}

impl Obstacle {
    pub fn new(position: Point, radius: f64) -> Self {
        Self { position, radius, bounce: false, owner: None }
    }

    pub fn wall(position: Point, radius: f64) -> Self {
        Self { position, radius, bounce: true, owner: None }
    }

    /// Snapshot of a vehicle as an obstacle.
    pub fn from_vehicle(id: VehicleId, vehicle: &Vehicle) -> Self {
        Self {
            position: vehicle.position(),
            radius:   vehicle.radius(),
            bounce:   false,
            owner:    Some(id),
        }
    }
}

/// Which list an avoided obstacle came from, and where in it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObstacleRef {
    /// Index into the behavior's own obstacle list.
    Static(usize),
    /// Index into the context's `neighbors` snapshot.
    Neighbor(usize),
}

/// Obstacles of radius `1.1 * radius` centred along `p1 → p2`, every
/// `2 * radius` starting at `p1`, as long as the walked distance does not
/// exceed the segment length.
///
/// A non-positive `radius` yields a single obstacle at `p1`.
pub fn obstacles_for_segment(p1: Point, p2: Point, radius: f64, bounce: bool) -> Vec<Obstacle> {
    let make = |position| Obstacle {
        position,
        radius: radius * CHAIN_OVERLAP,
        bounce,
        owner: None,
    };

    let spacing = radius * 2.0;
    if spacing <= 0.0 || !spacing.is_finite() {
        return vec![make(p1)];
    }

    let length = p1.distance(p2);
    let angle = p1.angle_to(p2);
    let mut out = Vec::with_capacity((length / spacing) as usize + 1);
    let mut walked = 0.0;
    while walked <= length {
        out.push(make(p1.offset(angle, walked)));
        walked += spacing;
    }
    out
}

/// [`obstacles_for_segment`] for every consecutive pair in `points`,
/// concatenated.  Shared vertices get one obstacle from each side.
pub fn obstacles_for_path(points: &[Point], radius: f64, bounce: bool) -> Vec<Obstacle> {
    points
        .windows(2)
        .flat_map(|w| obstacles_for_segment(w[0], w[1], radius, bounce))
        .collect()
}
