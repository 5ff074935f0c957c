//! Seeded random node layout.

use vr_core::{SimConfig, SimRng, VrResult};

use crate::{NodeRegistry, RegistryBuilder};

/// Scatter `config.node_count` nodes uniformly over the configured square.
///
/// Node `k` is a priority node iff `NodeId(k)` is listed in
/// `config.priority_ids`.  The same config always yields the same registry.
pub fn scatter_nodes(config: &SimConfig) -> VrResult<NodeRegistry> {
    config.validate()?;

    let mut rng = SimRng::new(config.seed);
    let mut b = RegistryBuilder::with_capacity(config.node_count);
    for _ in 0..config.node_count {
        let pos = rng.point_in_square(config.extent);
        let next = vr_core::NodeId::from_slot(b.node_count());
        b.add_node(pos, config.is_priority(next));
    }
    Ok(b.build())
}
