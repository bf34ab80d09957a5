//! Priority arbitration between override candidates.

use tracing::debug;
use ufunc_override_core::Dynamic;

use crate::candidates::OverrideCandidate;

/// Priority of an operand, falling back to `default` when it reports none.
pub fn priority_of(operand: &Dynamic, default: f64) -> f64 {
    match operand {
        Dynamic::Object(obj) => obj.array_priority().unwrap_or(default),
        _ => default,
    }
}

/// Selects the highest-priority candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorityArbiter {
    default_priority: f64,
}

impl PriorityArbiter {
    pub fn new(default_priority: f64) -> Self {
        Self { default_priority }
    }

    /// Position (in scan order) of the winning candidate.
    ///
    /// The first candidate is the initial best; a later one replaces it only
    /// with a strictly greater priority. Ties therefore go to the earliest
    /// candidate, and a NaN priority never replaces the incumbent. Priorities
    /// are only queried when there is more than one candidate.
    pub fn select_position(&self, candidates: &[OverrideCandidate<'_>]) -> Option<usize> {
        let (first, rest) = candidates.split_first()?;
        if rest.is_empty() {
            return Some(0);
        }

        let mut best = 0;
        let mut max_priority = first.priority(self.default_priority);
        for (offset, candidate) in rest.iter().enumerate() {
            let priority = candidate.priority(self.default_priority);
            if priority > max_priority {
                max_priority = priority;
                best = offset + 1;
            }
        }

        debug!(
            winner = candidates[best].index,
            priority = max_priority,
            candidates = candidates.len(),
            "priority arbitration"
        );
        Some(best)
    }

    /// The winning candidate.
    pub fn select<'c, 'a>(
        &self,
        candidates: &'c [OverrideCandidate<'a>],
    ) -> Option<&'c OverrideCandidate<'a>> {
        self.select_position(candidates).map(|pos| &candidates[pos])
    }
}
