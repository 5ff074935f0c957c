//! `vr-dispatch`: choosing the next node to service.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`policy`]   | `DispatchPolicy` trait, `Candidates`, `GreedyPriorityPolicy`  |
//! | [`indexed`]  | `IndexedPriorityPolicy`: same rule, R-tree nearest search    |
//!
//! # The rule
//!
//! 1. Only `Waiting` nodes are candidates.
//! 2. If any waiting node is a priority node, only waiting priority nodes
//!    are candidates.  Priority is a hard ordering, never a weight.
//! 3. Pick the candidate closest to the vehicle (Euclidean).  Equal
//!    distances go to the lowest `NodeId`.
//! 4. No waiting nodes → `None`, which ends an autonomous run.
//!
//! Both policies implement exactly this rule and always agree.  The linear
//! scan is the default; the indexed policy replaces the O(N) scan with an
//! R-tree walk for large node counts.

pub mod indexed;
pub mod policy;


pub use indexed::IndexedPriorityPolicy;
pub use policy::{Candidates, DispatchPolicy, GreedyPriorityPolicy};
