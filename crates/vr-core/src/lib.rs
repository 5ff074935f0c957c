//! `vr-core`: foundational types for the `rust_vr` dispatch simulator.
//!
//! This crate is a dependency of every other `vr-*` crate.  It has no `vr-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`ids`]      | `NodeId`                                          |
//! | [`geo`]      | `Point`, planar Euclidean distance                |
//! | [`config`]   | `SimConfig`                                       |
//! | [`rng`]      | `SimRng` (seeded scenario generation)             |
//! | [`error`]    | `VrError`, `VrResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{VrError, VrResult};
pub use geo::Point;
pub use ids::NodeId;
pub use rng::SimRng;
