//! R-tree-backed dispatch.
//!
//! Node positions never change after the registry is built, so the index is
//! bulk-loaded once and only node *status* is consulted per query.  Priority
//! and regular nodes live in separate trees so a priority-only query never
//! walks past regular nodes.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use vr_core::{NodeId, Point};
use vr_registry::NodeRegistry;

use crate::{Candidates, DispatchPolicy};

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2],
    id:    NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        Point::new(point[0], point[1]).distance_sq(Point::new(self.point[0], self.point[1]))
    }
}

// ── IndexedPriorityPolicy ─────────────────────────────────────────────────────

/// Same rule as [`GreedyPriorityPolicy`][crate::GreedyPriorityPolicy], but
/// finds the nearest eligible node by walking an R-tree outward from the
/// vehicle and skipping nodes that are no longer waiting.
///
/// Must be built from the registry it will be queried against.
pub struct IndexedPriorityPolicy {
    priority: RTree<NodeEntry>,
    regular:  RTree<NodeEntry>,
}

impl IndexedPriorityPolicy {
    pub fn new(registry: &NodeRegistry) -> Self {
        let (priority, regular): (Vec<NodeEntry>, Vec<NodeEntry>) = registry
            .iter()
            .map(|n| (n.is_priority, NodeEntry { point: n.pos.to_array(), id: n.id }))
            .fold((Vec::new(), Vec::new()), |(mut p, mut r), (is_priority, e)| {
                if is_priority { p.push(e) } else { r.push(e) }
                (p, r)
            });

        Self {
            priority: RTree::bulk_load(priority),
            regular:  RTree::bulk_load(regular),
        }
    }

    pub fn len(&self) -> usize {
        self.priority.size() + self.regular.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DispatchPolicy for IndexedPriorityPolicy {
    fn select_next(&self, from: Point, registry: &NodeRegistry) -> Option<NodeId> {
        // With no priority node waiting, every waiting node is regular.
        let tree = match Candidates::of(registry)? {
            Candidates::PriorityOnly => &self.priority,
            Candidates::AllWaiting   => &self.regular,
        };

        let query = from.to_array();
        let waiting = |e: &&NodeEntry| registry.get(e.id).is_some_and(|n| n.is_waiting());

        // Neighbours arrive in non-decreasing distance.  Take the first
        // waiting one, then sweep the rest of its distance shell for a lower
        // id.
        let mut best: Option<(f64, NodeId)> = None;
        for entry in tree.nearest_neighbor_iter(&query).filter(waiting) {
            let d = entry.distance_2(&query).sqrt();
            match best {
                None => best = Some((d, entry.id)),
                Some((best_d, _)) if d > best_d => break,
                Some((best_d, best_id)) => {
                    if entry.id < best_id {
                        best = Some((best_d, entry.id));
                    }
                }
            }
        }
        best.map(|(_, id)| id)
    }
}
