//! Plain data row types written by output backends.

/// Which half of a service step a [`ServiceRow`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceEvent {
    Pickup,
    Drop,
}

impl ServiceEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceEvent::Pickup => "pickup",
            ServiceEvent::Drop   => "drop",
        }
    }
}

/// One pickup or drop, with the vehicle's totals right after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceRow {
    /// Running event counter, from 0.
    pub seq:            u64,
    pub event:          ServiceEvent,
    pub node_id:        u32,
    pub is_priority:    bool,
    pub x:              f64,
    pub y:              f64,
    /// Distance of the leg that led here.  Always 0 for drops.
    pub leg_distance:   f64,
    pub leg_time:       f64,
    pub total_distance: f64,
    pub time_elapsed:   f64,
    /// Passengers aboard after the event.
    pub passengers:     u32,
}

/// One entry of the vehicle's path history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathRow {
    /// Position in the path, from 0 (the start).
    pub step: u64,
    pub x:    f64,
    pub y:    f64,
}
