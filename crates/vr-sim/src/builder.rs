//! Fluent builder for constructing a [`Sim`].

use vr_core::{Point, SimConfig};
use vr_dispatch::DispatchPolicy;
use vr_registry::NodeRegistry;
use vr_vehicle::{Vehicle, VehicleError};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`NodeRegistry`]: from [`vr_registry::RegistryBuilder`] or
///   [`vr_registry::scatter_nodes`]
/// - `P: DispatchPolicy`: e.g. [`vr_dispatch::GreedyPriorityPolicy`]
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                        |
/// |-----------------|--------------------------------|
/// | `.start(p)`     | `SimConfig::default().start`   |
/// | `.speed(s)`     | `SimConfig::default().speed`   |
/// | `.config(&c)`   | sets both of the above         |
pub struct SimBuilder<P: DispatchPolicy> {
    registry: NodeRegistry,
    policy:   P,
    start:    Point,
    speed:    f64,
}

impl<P: DispatchPolicy> SimBuilder<P> {
    pub fn new(registry: NodeRegistry, policy: P) -> Self {
        let defaults = SimConfig::default();
        Self {
            registry,
            policy,
            start: defaults.start,
            speed: defaults.speed,
        }
    }

    /// Take the vehicle's start position and speed from `config`.
    pub fn config(mut self, config: &SimConfig) -> Self {
        self.start = config.start;
        self.speed = config.speed;
        self
    }

    pub fn start(mut self, start: Point) -> Self {
        self.start = start;
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Validate inputs, park the vehicle, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        let vehicle = Vehicle::new(self.start, self.speed).map_err(|e| match e {
            VehicleError::InvalidSpeed(_) => SimError::Config(e.to_string()),
            other                         => SimError::Vehicle(other),
        })?;

        Ok(Sim {
            registry: self.registry,
            vehicle,
            policy:   self.policy,
        })
    }
}
