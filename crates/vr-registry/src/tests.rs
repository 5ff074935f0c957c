//! Unit tests for vr-registry.

use vr_core::{NodeId, Point};

use crate::{NodeRegistry, RegistryBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Three nodes on the x axis; node 2 is priority.
fn line_registry() -> NodeRegistry {
    let mut b = RegistryBuilder::new();
    b.add_node(Point::new(0.0, 0.0), false);
    b.add_node(Point::new(10.0, 0.0), true);
    b.add_node(Point::new(1.0, 0.0), false);
    b.build()
}

// ── NodeStatus ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod status {
    use crate::NodeStatus;

    #[test]
    fn default_is_waiting() {
        assert_eq!(NodeStatus::default(), NodeStatus::Waiting);
    }

    #[test]
    fn only_single_forward_steps() {
        use NodeStatus::*;
        assert!(Waiting.can_advance_to(Picked));
        assert!(Picked.can_advance_to(Dropped));

        assert!(!Waiting.can_advance_to(Dropped), "skip");
        assert!(!Picked.can_advance_to(Waiting), "reverse");
        assert!(!Dropped.can_advance_to(Picked), "reverse");
        assert!(!Waiting.can_advance_to(Waiting), "self");
        assert!(Dropped.is_terminal());
    }

    #[test]
    fn display() {
        assert_eq!(NodeStatus::Waiting.to_string(), "waiting");
        assert_eq!(NodeStatus::Picked.to_string(), "picked");
        assert_eq!(NodeStatus::Dropped.to_string(), "dropped");
    }
}

// ── Builder & lookup ──────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;
    use crate::NodeStatus;

    #[test]
    fn empty_build() {
        let reg = RegistryBuilder::new().build();
        assert!(reg.is_empty());
        assert!(!reg.has_waiting());
    }

    #[test]
    fn ids_are_one_based_and_sequential() {
        let mut b = RegistryBuilder::new();
        assert_eq!(b.add_node(Point::ORIGIN, false), NodeId(1));
        assert_eq!(b.add_node(Point::ORIGIN, false), NodeId(2));
        assert_eq!(b.add_node(Point::ORIGIN, true), NodeId(3));
        let reg = b.build();
        let ids: Vec<_> = reg.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![NodeId(1), NodeId(2), NodeId(3)]);
    }

    #[test]
    fn all_nodes_start_waiting() {
        let reg = line_registry();
        assert_eq!(reg.count_with(NodeStatus::Waiting), 3);
        assert!(reg.has_waiting_priority());
    }

    #[test]
    fn lookup_out_of_range() {
        let reg = line_registry();
        assert!(reg.get(NodeId(0)).is_none());
        assert!(reg.get(NodeId(4)).is_none());
        assert!(reg.contains(NodeId(3)));
        assert_eq!(reg.get(NodeId(2)).unwrap().pos, Point::new(10.0, 0.0));
    }
}

// ── Transitions ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod transitions {
    use super::*;
    use crate::{NodeStatus, RegistryError};

    #[test]
    fn full_lifecycle() {
        let mut reg = line_registry();
        reg.mark_picked(NodeId(1)).unwrap();
        assert_eq!(reg.status(NodeId(1)).unwrap(), NodeStatus::Picked);
        reg.mark_dropped(NodeId(1)).unwrap();
        assert_eq!(reg.status(NodeId(1)).unwrap(), NodeStatus::Dropped);
        assert_eq!(reg.waiting().count(), 2);
    }

    #[test]
    fn skip_is_rejected_and_leaves_state() {
        let mut reg = line_registry();
        let before = reg.clone();
        let err = reg.mark_dropped(NodeId(1)).unwrap_err();
        assert_eq!(
            err,
            RegistryError::IllegalTransition {
                id:   NodeId(1),
                from: NodeStatus::Waiting,
                to:   NodeStatus::Dropped,
            }
        );
        assert_eq!(reg, before);
    }

    #[test]
    fn double_pickup_is_rejected() {
        let mut reg = line_registry();
        reg.mark_picked(NodeId(2)).unwrap();
        assert!(matches!(
            reg.mark_picked(NodeId(2)),
            Err(RegistryError::IllegalTransition { from: NodeStatus::Picked, .. })
        ));
        assert_eq!(reg.status(NodeId(2)).unwrap(), NodeStatus::Picked);
    }

    #[test]
    fn unknown_node() {
        let mut reg = line_registry();
        assert_eq!(reg.mark_picked(NodeId(9)), Err(RegistryError::UnknownNode(NodeId(9))));
        assert_eq!(reg.status(NodeId(0)), Err(RegistryError::UnknownNode(NodeId(0))));
    }

    #[test]
    fn priority_waiting_clears_once_serviced() {
        let mut reg = line_registry();
        reg.mark_picked(NodeId(2)).unwrap();
        assert!(!reg.has_waiting_priority());
        assert!(reg.has_waiting());
    }
}

// ── Scatter ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scatter {
    use vr_core::{NodeId, SimConfig};

    use crate::scatter_nodes;

    #[test]
    fn default_scenario_layout() {
        let cfg = SimConfig::default();
        let reg = scatter_nodes(&cfg).unwrap();
        assert_eq!(reg.len(), 15);
        let priority: Vec<NodeId> = reg.iter().filter(|n| n.is_priority).map(|n| n.id).collect();
        assert_eq!(priority, vec![NodeId(5), NodeId(7)]);
        for n in reg.iter() {
            assert!((0.0..50.0).contains(&n.pos.x));
            assert!((0.0..50.0).contains(&n.pos.y));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let cfg = SimConfig::default();
        assert_eq!(scatter_nodes(&cfg).unwrap(), scatter_nodes(&cfg).unwrap());
    }

    #[test]
    fn different_seed_different_layout() {
        let a = scatter_nodes(&SimConfig::default()).unwrap();
        let b = scatter_nodes(&SimConfig { seed: 7, ..SimConfig::default() }).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = SimConfig { node_count: 0, ..SimConfig::default() };
        assert!(scatter_nodes(&cfg).is_err());
    }
}
