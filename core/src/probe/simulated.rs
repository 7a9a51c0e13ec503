//! Randomized stand-in for a real network probe

use super::{ProbeError, Prober};
use crate::config::SimulationSettings;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use schema::ComponentDetail;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

/// Diagnostic attached to every simulated failure
pub const SIMULATED_FAILURE_DETAIL: &str = "Service unreachable (Simulated Timeout)";

/// Simulated health probe with randomized latency and failure
///
/// Each probe sleeps for a duration drawn uniformly from
/// `[base_latency_ms, base_latency_ms * 4]`, then reports DOWN with
/// probability `failure_rate` and UP otherwise. The RNG is owned by the
/// prober and locked only for the draws, never across the sleep, so
/// concurrent probes stay concurrent and their draws stay independent.
#[derive(Debug)]
pub struct SimulatedProber {
    settings: SimulationSettings,
    rng: Mutex<StdRng>,
}

impl SimulatedProber {
    /// Create a prober seeded from OS entropy
    #[must_use]
    pub fn new(settings: SimulationSettings) -> Self {
        Self {
            settings,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Create a prober with a fixed seed, for deterministic tests
    #[must_use]
    pub fn seeded(settings: SimulationSettings, seed: u64) -> Self {
        Self {
            settings,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// The settings this prober draws against
    #[must_use]
    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// Draw the latency and failure outcome for one probe
    fn draw(&self) -> (Duration, bool) {
        // A poisoned lock only means another probe panicked mid-draw;
        // the RNG state itself is still usable.
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let (lo, hi) = self.settings.latency_range();
        let latency = rng.random_range(lo..=hi);
        let failed = rng.random::<f64>() < self.settings.failure_rate;
        (latency, failed)
    }
}

#[async_trait]
impl Prober for SimulatedProber {
    async fn probe(&self, component: &str) -> Result<ComponentDetail, ProbeError> {
        let (latency, failed) = self.draw();
        debug!("probing {} (simulated latency {:?})", component, latency);
        tokio::time::sleep(latency).await;

        if failed {
            Ok(ComponentDetail::down(component, SIMULATED_FAILURE_DETAIL))
        } else {
            Ok(ComponentDetail::up(component))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::Status;

    fn fast_settings(failure_rate: f64) -> SimulationSettings {
        SimulationSettings {
            failure_rate,
            base_latency_ms: 1,
        }
    }

    #[tokio::test]
    async fn zero_failure_rate_is_always_up() {
        let prober = SimulatedProber::seeded(fast_settings(0.0), 7);
        for _ in 0..50 {
            let detail = prober.probe("api").await.unwrap();
            assert_eq!(detail.status, Status::Up);
            assert_eq!(detail.details, "OK");
        }
    }

    #[tokio::test]
    async fn full_failure_rate_is_always_down() {
        let prober = SimulatedProber::seeded(fast_settings(1.0), 7);
        let detail = prober.probe("db").await.unwrap();
        assert_eq!(detail.status, Status::Down);
        assert_eq!(detail.details, SIMULATED_FAILURE_DETAIL);
        assert_eq!(detail.component, "db");
    }

    #[tokio::test]
    async fn same_seed_gives_same_outcomes() {
        let settings = fast_settings(0.5);
        let mut first = Vec::new();
        let mut second = Vec::new();
        let a = SimulatedProber::seeded(settings, 42);
        let b = SimulatedProber::seeded(settings, 42);
        for i in 0..20 {
            let id = format!("svc-{}", i);
            first.push(a.probe(&id).await.unwrap().status);
            second.push(b.probe(&id).await.unwrap().status);
        }
        assert_eq!(first, second);
    }

    #[test]
    fn draw_respects_latency_range() {
        let prober = SimulatedProber::seeded(
            SimulationSettings {
                failure_rate: 0.5,
                base_latency_ms: 50,
            },
            1,
        );
        for _ in 0..100 {
            let (latency, _) = prober.draw();
            assert!(latency >= Duration::from_millis(50));
            assert!(latency <= Duration::from_millis(200));
        }
    }
}
