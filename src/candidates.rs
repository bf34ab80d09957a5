//! Fixed-capacity candidate table.

use smallvec::SmallVec;
use ufunc_override_core::{Dynamic, Handler, OverrideError, Result};

use crate::arbiter::priority_of;
use crate::config::MAX_ARITY;

/// An operand that declared a handler for the current operation.
#[derive(Debug, Clone)]
pub struct OverrideCandidate<'a> {
    /// Original index of the operand in the positional sequence.
    pub index: usize,
    /// The operand itself, owned by the call context.
    pub operand: &'a Dynamic,
    /// The declared handler, owned independently of the operand.
    pub handler: Handler,
}

impl OverrideCandidate<'_> {
    /// The operand's priority, or `default` if it reports none.
    pub fn priority(&self, default: f64) -> f64 {
        priority_of(self.operand, default)
    }
}

/// Candidates collected during one resolution, in scan order.
///
/// Storage is inline up to [`MAX_ARITY`]; pushing beyond the table's capacity
/// is an error rather than an overflow.
#[derive(Debug)]
pub struct CandidateTable<'a> {
    entries: SmallVec<[OverrideCandidate<'a>; MAX_ARITY]>,
    capacity: usize,
}

impl<'a> CandidateTable<'a> {
    /// Create an empty table holding at most `capacity` candidates.
    /// Capacities above [`MAX_ARITY`] are clamped.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: SmallVec::new(),
            capacity: capacity.min(MAX_ARITY),
        }
    }

    /// Append a candidate.
    ///
    /// # Errors
    ///
    /// [`OverrideError::ArityExceeded`] if the table is full.
    pub fn push(&mut self, candidate: OverrideCandidate<'a>) -> Result<()> {
        if self.entries.len() >= self.capacity {
            return Err(OverrideError::ArityExceeded {
                count: self.entries.len() + 1,
                max: self.capacity,
            });
        }
        self.entries.push(candidate);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_slice(&self) -> &[OverrideCandidate<'a>] {
        &self.entries
    }

    /// Remove and return the candidate at `pos` in scan order.
    pub fn take(mut self, pos: usize) -> Option<OverrideCandidate<'a>> {
        (pos < self.entries.len()).then(|| self.entries.swap_remove(pos))
    }
}
