//! The `Vehicle`: position, cumulative travel, and passengers.

use vr_core::{NodeId, Point};

use crate::{Leg, VehicleError, VehicleResult};

/// The single simulated vehicle.
///
/// Totals are private and only grow through [`move_to`](Self::move_to), so
/// `total_distance` and `time_elapsed` are non-decreasing for the vehicle's
/// whole lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pos:            Point,
    speed:          f64,
    total_distance: f64,
    time_elapsed:   f64,
    /// Node ids currently aboard, in boarding order.
    passengers:     Vec<NodeId>,
    /// Every position occupied, starting with the initial one.  Display only.
    path:           Vec<Point>,
}

impl Vehicle {
    /// A vehicle parked at `start` with zero totals and nobody aboard.
    pub fn new(start: Point, speed: f64) -> VehicleResult<Self> {
        if !(speed.is_finite() && speed > 0.0) {
            return Err(VehicleError::InvalidSpeed(speed));
        }
        Ok(Self {
            pos:            start,
            speed,
            total_distance: 0.0,
            time_elapsed:   0.0,
            passengers:     Vec::new(),
            path:           vec![start],
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    #[inline]
    pub fn time_elapsed(&self) -> f64 {
        self.time_elapsed
    }

    #[inline]
    pub fn passengers(&self) -> &[NodeId] {
        &self.passengers
    }

    #[inline]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    #[inline]
    pub fn is_carrying(&self, id: NodeId) -> bool {
        self.passengers.contains(&id)
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Drive straight to `destination`.
    ///
    /// Moving to the current position is a valid zero-cost leg; it is still
    /// appended to the path history.
    pub fn move_to(&mut self, destination: Point) -> Leg {
        let from     = self.pos;
        let distance = from.distance(destination);
        let time     = distance / self.speed;

        self.pos = destination;
        self.total_distance += distance;
        self.time_elapsed   += time;
        self.path.push(destination);

        Leg { from, to: destination, distance, time }
    }

    // ── Passengers ────────────────────────────────────────────────────────

    /// Put `id` aboard.
    pub fn board(&mut self, id: NodeId) -> VehicleResult<()> {
        if self.is_carrying(id) {
            return Err(VehicleError::AlreadyAboard(id));
        }
        self.passengers.push(id);
        Ok(())
    }

    /// Take `id` off, preserving the order of the remaining passengers.
    pub fn alight(&mut self, id: NodeId) -> VehicleResult<()> {
        let idx = self
            .passengers
            .iter()
            .position(|&p| p == id)
            .ok_or(VehicleError::NotAboard(id))?;
        self.passengers.remove(idx);
        Ok(())
    }
}
