//! Strongly typed vehicle identifier.
//!
//! `VehicleId` is `Copy + Ord + Hash` so it can be used as a map key and kept
//! in sorted collections without ceremony.  IDs are handed out sequentially
//! by the scheduler and never reused within a run.

use std::fmt;

/// Identity of one vehicle within a simulation run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleId(pub u32);

impl VehicleId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: VehicleId = VehicleId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The ID following `self` in allocation order.
    #[inline]
    pub fn next(self) -> VehicleId {
        VehicleId(self.0 + 1)
    }
}

impl Default for VehicleId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VehicleId({})", self.0)
    }
}

impl From<VehicleId> for usize {
    #[inline(always)]
    fn from(id: VehicleId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for VehicleId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<VehicleId, Self::Error> {
        u32::try_from(n).map(VehicleId)
    }
}
