//! The `NodeRegistry` and its builder.

use vr_core::{NodeId, Point};

use crate::{Node, NodeStatus, RegistryError, RegistryResult};

// ── NodeRegistry ──────────────────────────────────────────────────────────────

/// Fixed-size mapping from [`NodeId`] to [`Node`].
///
/// Nodes are packed densely in a `Vec` so that `NodeId(k)` lives at slot
/// `k - 1`.  Lookups are O(1) and iteration is always in ascending id order,
/// which the dispatch policies rely on for their lowest-id tie-break.
///
/// Do not construct directly; use [`RegistryBuilder`] or
/// [`scatter_nodes`][crate::scatter_nodes].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeRegistry {
    nodes: Vec<Node>,
}

impl NodeRegistry {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node.  `None` for ids outside `1..=len`.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        id.slot().and_then(|slot| self.nodes.get(slot))
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Current status of `id`.
    pub fn status(&self, id: NodeId) -> RegistryResult<NodeStatus> {
        self.get(id)
            .map(Node::status)
            .ok_or(RegistryError::UnknownNode(id))
    }

    /// All nodes in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    /// Nodes still waiting for service, in ascending id order.
    pub fn waiting(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(|n| n.is_waiting())
    }

    pub fn has_waiting(&self) -> bool {
        self.nodes.iter().any(Node::is_waiting)
    }

    pub fn has_waiting_priority(&self) -> bool {
        self.nodes.iter().any(|n| n.is_priority && n.is_waiting())
    }

    pub fn count_with(&self, status: NodeStatus) -> usize {
        self.nodes.iter().filter(|n| n.status == status).count()
    }

    // ── Status transitions ────────────────────────────────────────────────

    /// Move `id` one step forward to `to`.
    ///
    /// Returns the previous status.  On error the node is left unchanged.
    pub fn advance(&mut self, id: NodeId, to: NodeStatus) -> RegistryResult<NodeStatus> {
        let node = id
            .slot()
            .and_then(|slot| self.nodes.get_mut(slot))
            .ok_or(RegistryError::UnknownNode(id))?;

        let from = node.status;
        if !from.can_advance_to(to) {
            return Err(RegistryError::IllegalTransition { id, from, to });
        }
        node.status = to;
        Ok(from)
    }

    /// `Waiting → Picked`.
    #[inline]
    pub fn mark_picked(&mut self, id: NodeId) -> RegistryResult<()> {
        self.advance(id, NodeStatus::Picked).map(|_| ())
    }

    /// `Picked → Dropped`.
    #[inline]
    pub fn mark_dropped(&mut self, id: NodeId) -> RegistryResult<()> {
        self.advance(id, NodeStatus::Dropped).map(|_| ())
    }
}

// ── RegistryBuilder ───────────────────────────────────────────────────────────

/// Construct a [`NodeRegistry`] incrementally, then call
/// [`build`](Self::build).
///
/// # Example
///
/// ```
/// use vr_core::{NodeId, Point};
/// use vr_registry::RegistryBuilder;
///
/// let mut b = RegistryBuilder::new();
/// let a = b.add_node(Point::new(0.0, 0.0), false);
/// let c = b.add_node(Point::new(10.0, 0.0), true);
/// let reg = b.build();
/// assert_eq!((a, c), (NodeId(1), NodeId(2)));
/// assert_eq!(reg.len(), 2);
/// assert!(reg.has_waiting_priority());
/// ```
pub struct RegistryBuilder {
    nodes: Vec<Node>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self { nodes: Vec::with_capacity(nodes) }
    }

    /// Add a waiting node and return its `NodeId` (sequential from 1).
    pub fn add_node(&mut self, pos: Point, is_priority: bool) -> NodeId {
        let id = NodeId::from_slot(self.nodes.len());
        self.nodes.push(Node::new(id, pos, is_priority));
        id
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Consume the builder and produce a [`NodeRegistry`].
    pub fn build(self) -> NodeRegistry {
        NodeRegistry { nodes: self.nodes }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
