//! Per-invocation call context.

use std::fmt;
use std::iter::Enumerate;
use std::slice;

use ufunc_override_core::{
    Dynamic, Kwargs, OverrideCall, OverrideError, Result, Ufunc, UfuncMethod,
};

use crate::config::MAX_ARITY;

/// Everything the dispatcher knows about one invocation.
///
/// Borrowed from the dispatcher and never mutated by resolution. Construction
/// fails fast when the operand count exceeds [`MAX_ARITY`].
#[derive(Clone, Copy)]
pub struct CallContext<'a> {
    ufunc: &'a Ufunc,
    method: UfuncMethod,
    inputs: &'a [Dynamic],
    kwargs: &'a Kwargs,
}

impl<'a> CallContext<'a> {
    /// Create a call context.
    ///
    /// # Errors
    ///
    /// Returns [`OverrideError::ArityExceeded`] if `inputs` holds more than
    /// [`MAX_ARITY`] operands.
    pub fn new(
        ufunc: &'a Ufunc,
        method: UfuncMethod,
        inputs: &'a [Dynamic],
        kwargs: &'a Kwargs,
    ) -> Result<Self> {
        check_arity(inputs.len(), MAX_ARITY)?;
        Ok(Self {
            ufunc,
            method,
            inputs,
            kwargs,
        })
    }

    pub fn ufunc(&self) -> &'a Ufunc {
        self.ufunc
    }

    pub fn method(&self) -> UfuncMethod {
        self.method
    }

    pub fn inputs(&self) -> &'a [Dynamic] {
        self.inputs
    }

    pub fn kwargs(&self) -> &'a Kwargs {
        self.kwargs
    }

    /// Number of positional operands.
    pub fn arity(&self) -> usize {
        self.inputs.len()
    }

    /// Operands with their original indices, left to right.
    pub fn operands(&self) -> Enumerate<slice::Iter<'a, Dynamic>> {
        self.inputs.iter().enumerate()
    }

    /// Call arguments for a handler belonging to the operand at `position`.
    pub fn override_call(&self, position: usize) -> OverrideCall<'a> {
        OverrideCall::new(self.ufunc, self.method, position, self.inputs, self.kwargs)
    }
}

impl fmt::Debug for CallContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallContext")
            .field("ufunc", &self.ufunc.name())
            .field("method", &self.method)
            .field("arity", &self.inputs.len())
            .field("kwarg_count", &self.kwargs.len())
            .finish()
    }
}

/// Fail with [`OverrideError::ArityExceeded`] if `count > max`.
pub(crate) fn check_arity(count: usize, max: usize) -> Result<()> {
    if count > max {
        return Err(OverrideError::ArityExceeded { count, max });
    }
    Ok(())
}
