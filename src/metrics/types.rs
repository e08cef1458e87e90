use std::time::Duration;

use crate::http::RequestOutcome;

/// Aggregate counters for one target host. Latencies are recorded only for
/// successes, so `latencies.len()` always equals `success`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostStats {
    pub success: u64,
    pub failed: u64,
    pub errors: u64,
    pub latencies: Vec<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencySummary {
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
}

impl HostStats {
    /// Fold one completed outcome: exactly one counter moves per call.
    pub(crate) fn fold(&mut self, outcome: &RequestOutcome) {
        match *outcome {
            RequestOutcome::Success { elapsed, .. } => {
                self.success = self.success.saturating_add(1);
                self.latencies.push(elapsed);
            }
            RequestOutcome::Failed { .. } => {
                self.failed = self.failed.saturating_add(1);
            }
            RequestOutcome::TransportError => {
                self.errors = self.errors.saturating_add(1);
            }
        }
    }

    pub(crate) const fn completed(&self) -> u64 {
        self.success
            .saturating_add(self.failed)
            .saturating_add(self.errors)
    }

    /// Min/max/avg over the recorded success latencies, `None` when the
    /// host had no successes. Average uses integer microsecond arithmetic.
    pub(crate) fn latency_summary(&self) -> Option<LatencySummary> {
        let min = self.latencies.iter().min().copied()?;
        let max = self.latencies.iter().max().copied()?;
        let sum_micros = self
            .latencies
            .iter()
            .fold(0u128, |acc, sample| acc.saturating_add(sample.as_micros()));
        let sample_count = u128::try_from(self.latencies.len()).unwrap_or(u128::MAX);
        let avg_micros = sum_micros.checked_div(sample_count).unwrap_or(0);
        let avg = Duration::from_micros(u64::try_from(avg_micros).unwrap_or(u64::MAX));
        Some(LatencySummary { min, max, avg })
    }
}
