//! Simulation observer trait for progress reporting and data collection.

use vr_core::{NodeId, Point};
use vr_registry::{Node, NodeRegistry};
use vr_vehicle::{Leg, Vehicle};

use crate::RunSummary;

/// Callbacks invoked by [`Sim`][crate::Sim] after every state change.
///
/// Observers get read-only views and run after the change is complete, so
/// they can render or record state but never influence dispatch.  All
/// methods have no-op defaults.
///
/// # Example: console narrator
///
/// ```rust,ignore
/// struct Narrator;
///
/// impl SimObserver for Narrator {
///     fn on_pickup(&mut self, node: &Node, leg: &Leg, _v: &Vehicle) {
///         println!("picked up {} after {:.2} km", node.id, leg.distance);
///     }
/// }
/// ```
pub trait SimObserver {
    /// The policy chose `next` while the vehicle stood at `from`.
    fn on_dispatch(&mut self, _from: Point, _next: NodeId) {}

    /// A pickup completed.  `node` is already `Picked` and aboard.
    fn on_pickup(&mut self, _node: &Node, _leg: &Leg, _vehicle: &Vehicle) {}

    /// A drop completed.  `node` is already `Dropped`.
    fn on_drop(&mut self, _node: &Node, _vehicle: &Vehicle) {}

    /// An autonomous run reached `Done`.
    fn on_run_end(&mut self, _summary: &RunSummary, _registry: &NodeRegistry, _vehicle: &Vehicle) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
