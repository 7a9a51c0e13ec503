//! Error types for probing operations

use std::time::Duration;
use thiserror::Error;

/// Catastrophic probe faults
///
/// A probe that completes with a DOWN status is a result, not an error;
/// these variants cover a probe failing to complete at all. The simulated
/// prober never raises them, a real probe implementation would.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The probe did not complete in time
    #[error("timeout after {0:?}")]
    Timeout(Duration),

    /// Transport-level failure while probing
    #[error("probe transport failed: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else that prevented the probe from completing
    #[error("probe failed: {0}")]
    Internal(String),
}
