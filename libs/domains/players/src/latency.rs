//! Artificial delay applied to single-player lookups.

use rand::Rng;
use std::time::Duration;

/// Default upper bound for [`RandomLatency`]
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(2000);

/// Source of the delay awaited after each single-player lookup
pub trait LatencySimulator: Send + Sync {
    fn next_delay(&self) -> Duration;
}

/// Uniformly random delay in `0..=max`, at millisecond granularity
#[derive(Debug, Clone, Copy)]
pub struct RandomLatency {
    max: Duration,
}

impl RandomLatency {
    pub fn new(max: Duration) -> Self {
        Self { max }
    }

    pub fn from_millis(max_ms: u64) -> Self {
        Self::new(Duration::from_millis(max_ms))
    }

    pub fn max(&self) -> Duration {
        self.max
    }
}

impl Default for RandomLatency {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DELAY)
    }
}

impl LatencySimulator for RandomLatency {
    fn next_delay(&self) -> Duration {
        let max_ms = self.max.as_millis() as u64;
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::rng().random_range(0..=max_ms))
    }
}

/// No delay at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

impl LatencySimulator for NoLatency {
    fn next_delay(&self) -> Duration {
        Duration::ZERO
    }
}
