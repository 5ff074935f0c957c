//! `vr-vehicle`: the single vehicle's movement state and passenger list.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`leg`]     | `Leg`: distance/time of one move                          |
//! | [`vehicle`] | `Vehicle`: position, totals, passengers, path history     |
//! | [`error`]   | `VehicleError`, `VehicleResult<T>`                         |
//!
//! # Movement model (straight-line teleport)
//!
//! [`Vehicle::move_to`] jumps straight to the destination and charges the
//! Euclidean distance, at constant speed, to the running totals.  There is
//! no in-transit state: every call completes the whole leg.

pub mod error;
pub mod leg;
pub mod vehicle;


pub use error::{VehicleError, VehicleResult};
pub use leg::Leg;
pub use vehicle::Vehicle;
