//! Analysis policies for the audit job.

use crate::AuditError;
use rampart_types::Address;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Mutex;
use std::time::Duration;

/// The fixed ordered audit steps, in execution order.
pub const AUDIT_STEPS: [&str; 9] = [
    "initialize audit environment",
    "load contract code",
    "static code analysis",
    "access control review",
    "known vulnerability scan",
    "unit test execution",
    "symbolic execution",
    "performance testing",
    "audit report generation",
];

/// Vulnerability descriptions a simulated audit can attach.
pub const VULNERABILITY_CATALOG: [&str; 10] = [
    "reentrancy attack risk",
    "integer overflow",
    "unvalidated input parameters",
    "broken access control",
    "outdated cryptographic primitives",
    "timestamp dependence",
    "fund-leaking logic error",
    "missing safety checks",
    "short address attack risk",
    "insecure randomness",
];

/// Classification produced by a completed audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditOutcome {
    /// No known vulnerabilities found.
    Clean,
    /// A vulnerability was found; `detail` describes it.
    Vulnerable {
        /// Human-readable description of the finding.
        detail: String,
    },
}

/// Pluggable analysis strategy behind the audit job.
///
/// The job structure (step sequence, dedup gating, task lifecycle) is fixed;
/// this trait owns the two variable pieces: how long each step takes, and
/// what the final classification is. Swap in a real analyzer here without
/// touching the pipeline.
pub trait AnalysisPolicy: Send + Sync {
    /// Delay to charge before completing the step at `step_index`.
    fn step_delay(&self, step_index: usize) -> Duration;

    /// Final classification for a project.
    fn classify(&self, project: Address) -> Result<AuditOutcome, AuditError>;
}

/// Randomized stand-in for real analysis.
///
/// Each step costs a uniformly random delay from a bounded range, and the
/// classification is a single Bernoulli draw. Outcomes are not repeatable
/// across runs for the same project; callers must not assume otherwise.
pub struct SimulatedAnalysis {
    rng: Mutex<ChaCha8Rng>,
    delay_range_ms: (u64, u64),
    vulnerability_rate: f64,
}

impl SimulatedAnalysis {
    /// Create a simulator seeded from system entropy.
    pub fn new() -> Self {
        Self::from_rng(ChaCha8Rng::from_entropy())
    }

    /// Create a simulator with a fixed seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng: Mutex::new(rng),
            delay_range_ms: (500, 1500),
            vulnerability_rate: 0.5,
        }
    }

    /// Set the per-step delay range in milliseconds (inclusive).
    pub fn with_delay_range(mut self, min_ms: u64, max_ms: u64) -> Self {
        self.delay_range_ms = (min_ms, max_ms.max(min_ms));
        self
    }

    /// Set the probability of classifying a project as vulnerable
    /// (automatically clamped to 0.0-1.0).
    pub fn with_vulnerability_rate(mut self, rate: f64) -> Self {
        self.vulnerability_rate = rate.clamp(0.0, 1.0);
        self
    }
}

impl Default for SimulatedAnalysis {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisPolicy for SimulatedAnalysis {
    fn step_delay(&self, _step_index: usize) -> Duration {
        let (min, max) = self.delay_range_ms;
        let ms = self
            .rng
            .lock()
            .expect("analysis rng lock poisoned")
            .gen_range(min..=max);
        Duration::from_millis(ms)
    }

    fn classify(&self, _project: Address) -> Result<AuditOutcome, AuditError> {
        let mut rng = self.rng.lock().expect("analysis rng lock poisoned");

        if rng.gen_bool(self.vulnerability_rate) {
            let detail = VULNERABILITY_CATALOG[rng.gen_range(0..VULNERABILITY_CATALOG.len())];
            Ok(AuditOutcome::Vulnerable {
                detail: detail.to_string(),
            })
        } else {
            Ok(AuditOutcome::Clean)
        }
    }
}
