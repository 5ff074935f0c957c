//! Dispatch trait and the default linear-scan policy.
//!
//! # Pluggability
//!
//! `vr-sim` only talks to the [`DispatchPolicy`] trait, so a different
//! selection strategy can be swapped in (statically, or boxed at runtime)
//! without touching the simulation loop.

use vr_core::{NodeId, Point};
use vr_registry::{Node, NodeRegistry};

// ── Candidates ────────────────────────────────────────────────────────────────

/// Which class of waiting nodes the rule currently allows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Candidates {
    /// At least one priority node waits: only those may be chosen.
    PriorityOnly,
    /// No priority node waits: every waiting node may be chosen.
    AllWaiting,
}

impl Candidates {
    /// Classify `registry`.  `None` means nothing is waiting.
    pub fn of(registry: &NodeRegistry) -> Option<Candidates> {
        if registry.has_waiting_priority() {
            Some(Candidates::PriorityOnly)
        } else if registry.has_waiting() {
            Some(Candidates::AllWaiting)
        } else {
            None
        }
    }

    /// `true` if `node` is eligible under this class.
    #[inline]
    pub fn admits(self, node: &Node) -> bool {
        node.is_waiting()
            && match self {
                Candidates::PriorityOnly => node.is_priority,
                Candidates::AllWaiting   => true,
            }
    }
}

// ── DispatchPolicy ────────────────────────────────────────────────────────────

/// Pluggable dispatch rule.
///
/// Implementations must be pure: the same `(from, registry)` always yields
/// the same answer, and nothing is mutated.
pub trait DispatchPolicy {
    /// The next node to service from position `from`, or `None` when no node
    /// is waiting.
    fn select_next(&self, from: Point, registry: &NodeRegistry) -> Option<NodeId>;
}

// ── GreedyPriorityPolicy ──────────────────────────────────────────────────────

/// The reference policy: a single linear scan over the registry.
///
/// O(N) per decision with one distance computation per candidate.  Adequate
/// for tens of nodes.
#[derive(Copy, Clone, Debug, Default)]
pub struct GreedyPriorityPolicy;

impl DispatchPolicy for GreedyPriorityPolicy {
    fn select_next(&self, from: Point, registry: &NodeRegistry) -> Option<NodeId> {
        let class = Candidates::of(registry)?;

        // Registry iteration is ascending by id, and only a strictly smaller
        // distance replaces the incumbent, so ties stay with the lowest id.
        let mut best: Option<(f64, NodeId)> = None;
        for node in registry.iter().filter(|n| class.admits(n)) {
            let d = from.distance(node.pos);
            match best {
                Some((best_d, _)) if d >= best_d => {}
                _ => best = Some((d, node.id)),
            }
        }
        best.map(|(_, id)| id)
    }
}

/// Lets the policy be chosen at runtime (`Box<dyn DispatchPolicy>`).
impl<P: DispatchPolicy + ?Sized> DispatchPolicy for Box<P> {
    #[inline]
    fn select_next(&self, from: Point, registry: &NodeRegistry) -> Option<NodeId> {
        (**self).select_next(from, registry)
    }
}
