//! The `Sim` context and its operations.

use tracing::{debug, info};

use vr_core::NodeId;
use vr_dispatch::DispatchPolicy;
use vr_registry::{NodeRegistry, NodeStatus};
use vr_vehicle::{Leg, Vehicle};

use crate::{SimError, SimObserver, SimResult};

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// Autonomous-mode state machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    /// At least one node is waiting.
    Running,
    /// No node is waiting.  Terminal.
    Done,
}

/// Result of one [`Sim::step`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// `node` was picked up and dropped off.
    Serviced { node: NodeId, leg: Leg },
    /// Nothing was waiting; the sim is now `Done`.
    Done,
}

/// What one [`Sim::run_auto`] call did.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Nodes serviced by this run, in service order.
    pub serviced: Vec<NodeId>,
    /// Distance covered by this run alone.
    pub distance: f64,
    /// Time spent by this run alone.
    pub time: f64,
    /// Vehicle totals after the run.
    pub total_distance: f64,
    pub time_elapsed: f64,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation context.
///
/// Owns the registry, the vehicle and the dispatch policy for the lifetime
/// of the run.  Collaborators get shared references through the accessors
/// and observer callbacks; every mutation goes through the operations below,
/// which keep the vehicle's passenger list and node statuses consistent:
/// a node id is aboard exactly while its status is `Picked`.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: DispatchPolicy> {
    pub(crate) registry: NodeRegistry,
    pub(crate) vehicle:  Vehicle,
    pub(crate) policy:   P,
}

impl<P: DispatchPolicy> Sim<P> {
    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    #[inline]
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// `Done` exactly when no node is waiting, however the nodes were
    /// serviced.
    #[inline]
    pub fn state(&self) -> RunState {
        if self.registry.has_waiting() { RunState::Running } else { RunState::Done }
    }

    /// What the policy would choose right now.  Pure.
    pub fn peek_next(&self) -> Option<NodeId> {
        self.policy.select_next(self.vehicle.position(), &self.registry)
    }

    // ── Manual operations ─────────────────────────────────────────────────

    /// Drive to `id` and take it aboard.
    ///
    /// # Errors
    ///
    /// - [`SimError::UnknownNode`] if `id` is not in the registry.
    /// - [`SimError::NotWaiting`] if the node was already picked or dropped.
    ///
    /// On error nothing moves and nothing changes.
    pub fn pickup<O: SimObserver>(&mut self, id: NodeId, observer: &mut O) -> SimResult<Leg> {
        let Some(node) = self.registry.get(id) else {
            info!(node = %id, "pickup rejected: unknown node");
            return Err(SimError::UnknownNode(id));
        };
        if node.status() != NodeStatus::Waiting {
            let err = SimError::NotWaiting { id, status: node.status() };
            info!(node = %id, error = %err, "pickup rejected");
            return Err(err);
        }
        let dest = node.pos;

        self.registry.mark_picked(id)?;
        self.vehicle.board(id)?;
        let leg = self.vehicle.move_to(dest);

        debug!(
            node = %id,
            distance = leg.distance,
            time = leg.time,
            total_distance = self.vehicle.total_distance(),
            "picked up"
        );
        if let Some(node) = self.registry.get(id) {
            observer.on_pickup(node, &leg, &self.vehicle);
        }
        Ok(leg)
    }

    /// Let `id` off at the vehicle's current position.
    ///
    /// # Errors
    ///
    /// [`SimError::NotCarried`] if `id` is not aboard.  Nothing changes.
    pub fn drop_off<O: SimObserver>(&mut self, id: NodeId, observer: &mut O) -> SimResult<()> {
        if !self.vehicle.is_carrying(id) {
            let err = SimError::NotCarried(id);
            info!(node = %id, error = %err, "drop rejected");
            return Err(err);
        }

        self.registry.mark_dropped(id)?;
        self.vehicle.alight(id)?;

        debug!(node = %id, passengers = self.vehicle.passengers().len(), "dropped off");
        if let Some(node) = self.registry.get(id) {
            observer.on_drop(node, &self.vehicle);
        }
        Ok(())
    }

    // ── Autonomous mode ───────────────────────────────────────────────────

    /// Service exactly one node: dispatch, pickup, immediate drop.
    ///
    /// Returns [`StepOutcome::Done`] when nothing is waiting.  Calling `step`
    /// again after that is a no-op.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<StepOutcome> {
        let from = self.vehicle.position();
        let Some(next) = self.policy.select_next(from, &self.registry) else {
            return Ok(StepOutcome::Done);
        };

        debug!(node = %next, from = %from, "dispatch");
        observer.on_dispatch(from, next);

        let leg = self.pickup(next, observer)?;
        self.drop_off(next, observer)?;
        Ok(StepOutcome::Serviced { node: next, leg })
    }

    /// Step until nothing is waiting.
    ///
    /// Always terminates: each step drops one previously waiting node, so
    /// there are at most `registry.len()` service steps.
    pub fn run_auto<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        let mut serviced = Vec::new();
        let mut distance = 0.0;
        let mut time     = 0.0;

        while let StepOutcome::Serviced { node, leg } = self.step(observer)? {
            serviced.push(node);
            distance += leg.distance;
            time     += leg.time;
            debug_assert!(serviced.len() <= self.registry.len());
        }

        let summary = RunSummary {
            serviced,
            distance,
            time,
            total_distance: self.vehicle.total_distance(),
            time_elapsed:   self.vehicle.time_elapsed(),
        };
        info!(
            serviced = summary.serviced.len(),
            total_distance = summary.total_distance,
            time_elapsed = summary.time_elapsed,
            "all nodes serviced"
        );
        observer.on_run_end(&summary, &self.registry, &self.vehicle);
        Ok(summary)
    }
}
