//! Component health probing
//!
//! This module provides the probing primitives the orchestrator fans out
//! over the node set. The orchestrator depends only on the [`Prober`]
//! capability, so the simulation can be swapped for a real network probe
//! without touching the aggregation logic.
//!
//! ## Types
//!
//! - [`Prober`]: the capability trait, one probe per component per run
//! - [`SimulatedProber`]: randomized latency/failure stand-in for a real probe
//! - [`ProbeError`]: catastrophic probe faults (distinct from a DOWN result)

pub mod error;
pub mod simulated;
pub mod types;

pub use error::ProbeError;
pub use simulated::{SimulatedProber, SIMULATED_FAILURE_DETAIL};
pub use types::Prober;
