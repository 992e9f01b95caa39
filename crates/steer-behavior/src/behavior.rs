//! `Behavior` — the tagged union stored in a vehicle's behavior list.

use crate::{
    Avoid, BehaviorOutcome, Bounce, Seek, SteerContext, SteeringBehavior, Vehicle, Wander, Wrap,
};

/// One entry in a vehicle's priority-ordered behavior list.
///
/// The built-in behaviors are dispatched by `match`; anything else goes
/// through [`Behavior::Custom`].
#[derive(Debug)]
pub enum Behavior {
    Wrap(Wrap),
    Bounce(Bounce),
    Wander(Wander),
    Seek(Seek),
    Avoid(Avoid),
    Custom(Box<dyn SteeringBehavior>),
}

impl Behavior {
    /// Wrap an arbitrary [`SteeringBehavior`].
    pub fn custom<B: SteeringBehavior>(behavior: B) -> Self {
        Behavior::Custom(Box::new(behavior))
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Behavior::Wrap(_)   => "wrap",
            Behavior::Bounce(_) => "bounce",
            Behavior::Wander(_) => "wander",
            Behavior::Seek(_)   => "seek",
            Behavior::Avoid(_)  => "avoid",
            Behavior::Custom(_) => "custom",
        }
    }

    pub fn as_seek(&self) -> Option<&Seek> {
        match self {
            Behavior::Seek(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_seek_mut(&mut self) -> Option<&mut Seek> {
        match self {
            Behavior::Seek(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_avoid(&self) -> Option<&Avoid> {
        match self {
            Behavior::Avoid(a) => Some(a),
            _ => None,
        }
    }
}

impl SteeringBehavior for Behavior {
    fn apply(
        &mut self,
        vehicle: &mut Vehicle,
        dt:      f64,
        ctx:     &mut SteerContext<'_>,
    ) -> BehaviorOutcome {
        match self {
            Behavior::Wrap(b)   => b.apply(vehicle, dt, ctx),
            Behavior::Bounce(b) => b.apply(vehicle, dt, ctx),
            Behavior::Wander(b) => b.apply(vehicle, dt, ctx),
            Behavior::Seek(b)   => b.apply(vehicle, dt, ctx),
            Behavior::Avoid(b)  => b.apply(vehicle, dt, ctx),
            Behavior::Custom(b) => b.apply(vehicle, dt, ctx),
        }
    }
}

macro_rules! behavior_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Behavior {
                #[inline]
                fn from(b: $variant) -> Self {
                    Behavior::$variant(b)
                }
            }
        )*
    };
}

behavior_from!(Wrap, Bounce, Wander, Seek, Avoid);
