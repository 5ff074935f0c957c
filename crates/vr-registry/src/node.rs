//! A single service location.

use vr_core::{NodeId, Point};

use crate::NodeStatus;

/// A fixed pickup/drop-off location.
///
/// `id`, `pos` and `is_priority` are fixed at creation.  `status` is private
/// so that only [`NodeRegistry`][crate::NodeRegistry] can move it, and only
/// forward.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id:          NodeId,
    pub pos:         Point,
    pub is_priority: bool,
    pub(crate) status: NodeStatus,
}

impl Node {
    pub(crate) fn new(id: NodeId, pos: Point, is_priority: bool) -> Self {
        Self { id, pos, is_priority, status: NodeStatus::Waiting }
    }

    #[inline]
    pub fn status(&self) -> NodeStatus {
        self.status
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.status == NodeStatus::Waiting
    }
}
