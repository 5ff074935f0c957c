//! `vr-registry`: the fixed set of service nodes and their lifecycle.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`status`]   | `NodeStatus`: `Waiting → Picked → Dropped`                |
//! | [`node`]     | `Node`: immutable position/priority + mutable status      |
//! | [`registry`] | `NodeRegistry`, `RegistryBuilder`                          |
//! | [`scatter`]  | `scatter_nodes`: seeded random layout from `SimConfig`    |
//! | [`error`]    | `RegistryError`, `RegistryResult<T>`                       |
//!
//! # Invariants
//!
//! - Ids are `1..=N`, dense, assigned in insertion order.
//! - The registry never grows or shrinks after [`RegistryBuilder::build`].
//! - A node's status only ever moves one step forward along
//!   `Waiting → Picked → Dropped`.  Every other transition is rejected with
//!   [`RegistryError::IllegalTransition`] and leaves the node untouched.

pub mod error;
pub mod node;
pub mod registry;
pub mod scatter;
pub mod status;

#[cfg(test)]
mod tests;

pub use error::{RegistryError, RegistryResult};
pub use node::Node;
pub use registry::{NodeRegistry, RegistryBuilder};
pub use scatter::scatter_nodes;
pub use status::NodeStatus;
