//! `vr-sim`: the simulation context and its service loop.
//!
//! # Autonomous mode
//!
//! ```text
//! state = Running
//! loop:
//!   1. dispatch: ask the DispatchPolicy for the next node from the
//!                vehicle's current position
//!   2. none?     state = Done; stop
//!   3. pickup:   drive to the node, Waiting → Picked, board it
//!   4. drop:     Picked → Dropped, alight it (no movement)
//! ```
//!
//! Each pass services exactly one node and no node ever returns to
//! `Waiting`, so a run over N nodes ends after at most N passes.
//!
//! # Manual operations
//!
//! [`Sim::pickup`] and [`Sim::drop_off`] are the same building blocks
//! exposed to an operator.  Rejected operations return a [`SimError`] and
//! leave every piece of state exactly as it was.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vr_core::SimConfig;
//! use vr_dispatch::GreedyPriorityPolicy;
//! use vr_registry::scatter_nodes;
//! use vr_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::default();
//! let registry = scatter_nodes(&config)?;
//! let mut sim = SimBuilder::new(registry, GreedyPriorityPolicy)
//!     .config(&config)
//!     .build()?;
//! let summary = sim.run_auto(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{RunState, RunSummary, Sim, StepOutcome};
