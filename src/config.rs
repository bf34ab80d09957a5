//! Resolver configuration.

/// Maximum number of positional operands a call may carry.
pub const MAX_ARITY: usize = 32;

/// Priority of an operand that reports no score of its own.
pub const DEFAULT_PRIORITY: f64 = 0.0;

/// What to do when reading a capability attribute fails.
///
/// Absence of the attribute is never a failure; this only governs reads that
/// raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeFailurePolicy {
    /// Return the error to the caller unmodified.
    Propagate,
    /// Log the error and treat the capability as absent.
    TreatAsAbsent,
}

/// Settings for [`OverrideResolver`](crate::OverrideResolver).
///
/// The defaults keep the two probes asymmetric: a failing read of the legacy
/// attribute propagates, a failing read of the override map is swallowed.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Largest operand count accepted, never above [`MAX_ARITY`].
    pub max_arity: usize,
    /// Priority used for operands without a score.
    pub default_priority: f64,
    /// Failure policy of the legacy probe.
    pub legacy_probe_failure: ProbeFailurePolicy,
    /// Failure policy of the override-map probe.
    pub map_probe_failure: ProbeFailurePolicy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_arity: MAX_ARITY,
            default_priority: DEFAULT_PRIORITY,
            legacy_probe_failure: ProbeFailurePolicy::Propagate,
            map_probe_failure: ProbeFailurePolicy::TreatAsAbsent,
        }
    }
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower the operand bound. Values above [`MAX_ARITY`] are clamped.
    pub fn with_max_arity(mut self, max_arity: usize) -> Self {
        self.max_arity = max_arity.min(MAX_ARITY);
        self
    }

    pub fn with_default_priority(mut self, priority: f64) -> Self {
        self.default_priority = priority;
        self
    }

    pub fn with_legacy_probe_failure(mut self, policy: ProbeFailurePolicy) -> Self {
        self.legacy_probe_failure = policy;
        self
    }

    pub fn with_map_probe_failure(mut self, policy: ProbeFailurePolicy) -> Self {
        self.map_probe_failure = policy;
        self
    }

    /// Use one failure policy for both probes.
    pub fn with_uniform_probe_failure(self, policy: ProbeFailurePolicy) -> Self {
        self.with_legacy_probe_failure(policy)
            .with_map_probe_failure(policy)
    }
}
