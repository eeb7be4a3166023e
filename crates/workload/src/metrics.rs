//! Workload statistics collection and reporting.

/// Aggregate outcome and latency statistics for one workload run.
///
/// Attack and blacklist attempts share one failure counter and one latency
/// series. The benign phase counts successes only; benign failures are
/// reported in logs but never tallied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkloadStats {
    /// Failed attack and blacklist attempts.
    pub attack_failures: u64,

    /// Settled benign calls.
    pub normal_successes: u64,

    /// Settlement latency of each successful attack/blacklist attempt, in
    /// dispatch order.
    pub attack_latencies_ms: Vec<u64>,

    /// Settlement latency of each successful benign call, in dispatch order.
    pub normal_latencies_ms: Vec<u64>,
}

/// Records per-attempt outcomes during a run.
///
/// Mutated only by the single orchestrator task; snapshot with
/// [`finish`](Self::finish) at report time.
#[derive(Debug, Default)]
pub struct MetricsCollector {
    stats: WorkloadStats,
}

impl MetricsCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a settled attack or blacklist attempt.
    pub fn record_attack_success(&mut self, latency_ms: u64) {
        self.stats.attack_latencies_ms.push(latency_ms);
    }

    /// Record a failed attack or blacklist attempt.
    pub fn record_attack_failure(&mut self) {
        self.stats.attack_failures += 1;
    }

    /// Record a settled benign call.
    pub fn record_normal_success(&mut self, latency_ms: u64) {
        self.stats.normal_successes += 1;
        self.stats.normal_latencies_ms.push(latency_ms);
    }

    /// Current statistics.
    pub fn stats(&self) -> &WorkloadStats {
        &self.stats
    }

    /// Consume the collector and produce the final report.
    pub fn finish(self) -> WorkloadReport {
        WorkloadReport { stats: self.stats }
    }
}

/// The final report of a workload run.
#[derive(Debug, Clone)]
pub struct WorkloadReport {
    /// Aggregate statistics.
    pub stats: WorkloadStats,
}

impl WorkloadReport {
    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Transaction Summary ===");
        println!("Attack transactions failed: {}", self.stats.attack_failures);
        println!(
            "Normal transactions succeeded: {}",
            self.stats.normal_successes
        );

        println!("Attack transaction times:");
        for (i, latency) in self.stats.attack_latencies_ms.iter().enumerate() {
            println!("{}: {} ms", i + 1, latency);
        }

        println!("Normal transaction times:");
        for (i, latency) in self.stats.normal_latencies_ms.iter().enumerate() {
            println!("{}: {} ms", i + 1, latency);
        }

        if let Some(mean) = mean(&self.stats.attack_latencies_ms) {
            println!("Mean attack latency: {mean} ms");
        }
        if let Some(mean) = mean(&self.stats.normal_latencies_ms) {
            println!("Mean normal latency: {mean} ms");
        }
    }
}

fn mean(samples: &[u64]) -> Option<u64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<u64>() / samples.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_successes_match_latency_count() {
        let mut metrics = MetricsCollector::new();
        metrics.record_normal_success(12);
        metrics.record_normal_success(30);
        metrics.record_normal_success(9);

        let stats = metrics.finish().stats;
        assert_eq!(stats.normal_successes, 3);
        assert_eq!(stats.normal_latencies_ms, vec![12, 30, 9]);
    }

    #[test]
    fn attack_failures_and_latencies_account_for_all_attempts() {
        let mut metrics = MetricsCollector::new();
        metrics.record_attack_success(100);
        metrics.record_attack_failure();
        metrics.record_attack_success(140);
        metrics.record_attack_failure();
        metrics.record_attack_failure();

        let stats = metrics.finish().stats;
        let total_attempts = 5;
        assert_eq!(
            stats.attack_failures + stats.attack_latencies_ms.len() as u64,
            total_attempts
        );
        assert_eq!(stats.attack_latencies_ms, vec![100, 140]);
    }

    #[test]
    fn mean_of_empty_series_is_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[10, 20]), Some(15));
    }
}
