//! One completed move.

use vr_core::Point;

/// The cost of a single [`Vehicle::move_to`][crate::Vehicle::move_to] call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Leg {
    pub from:     Point,
    pub to:       Point,
    /// Euclidean distance covered.  Always `>= 0`.
    pub distance: f64,
    /// `distance / speed`.
    pub time:     f64,
}

impl Leg {
    /// `true` when the vehicle did not actually go anywhere.
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.distance == 0.0
    }
}
