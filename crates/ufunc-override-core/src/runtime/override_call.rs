//! Call arguments handed to an override handler.

use std::fmt;

use rustc_hash::FxHashMap;

use super::Dynamic;
use crate::error::{ErrorKind, OverrideError, Result};
use crate::method::UfuncMethod;
use crate::op_hash::Ufunc;

/// Keyword arguments of an invocation. Order is irrelevant.
pub type Kwargs = FxHashMap<String, Dynamic>;

/// Arguments for one override invocation.
///
/// This is the `(ufunc, method, i, inputs)` tuple plus the keyword mapping,
/// held as borrowed views of the caller's call context. Nothing is copied,
/// and the aggregate is released when it goes out of scope on whichever path
/// the resolver takes.
pub struct OverrideCall<'a> {
    /// The operation being dispatched
    ufunc: &'a Ufunc,
    /// The entry point being dispatched
    method: UfuncMethod,
    /// Index of the operand whose handler is running
    position: usize,
    /// The full, original positional operands
    inputs: &'a [Dynamic],
    /// The original keyword arguments
    kwargs: &'a Kwargs,
}

impl<'a> OverrideCall<'a> {
    /// Create the call arguments for the operand at `position`.
    pub fn new(
        ufunc: &'a Ufunc,
        method: UfuncMethod,
        position: usize,
        inputs: &'a [Dynamic],
        kwargs: &'a Kwargs,
    ) -> Self {
        Self {
            ufunc,
            method,
            position,
            inputs,
            kwargs,
        }
    }

    pub fn ufunc(&self) -> &'a Ufunc {
        self.ufunc
    }

    pub fn method(&self) -> UfuncMethod {
        self.method
    }

    /// Index of the operand whose handler is running.
    pub fn position(&self) -> usize {
        self.position
    }

    /// All positional operands, in their original order.
    pub fn inputs(&self) -> &'a [Dynamic] {
        self.inputs
    }

    /// Get a positional operand by index.
    pub fn input(&self, index: usize) -> Result<&'a Dynamic> {
        self.inputs.get(index).ok_or_else(|| {
            OverrideError::raised(
                ErrorKind::Value,
                format!(
                    "operand index {index} out of range for {} operands",
                    self.inputs.len()
                ),
            )
        })
    }

    /// The operand whose handler is running.
    pub fn self_operand(&self) -> Result<&'a Dynamic> {
        self.input(self.position)
    }

    pub fn kwargs(&self) -> &'a Kwargs {
        self.kwargs
    }

    /// Get a keyword argument by name.
    pub fn kwarg(&self, name: &str) -> Option<&'a Dynamic> {
        self.kwargs.get(name)
    }

    /// The positional form `(ufunc name, method name, position, inputs)`.
    pub fn to_tuple(&self) -> Dynamic {
        Dynamic::Tuple(vec![
            Dynamic::Str(self.ufunc.name().to_string()),
            Dynamic::Str(self.method.as_str().to_string()),
            Dynamic::Int(self.position as i64),
            Dynamic::Tuple(self.inputs.to_vec()),
        ])
    }
}

impl fmt::Debug for OverrideCall<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverrideCall")
            .field("ufunc", &self.ufunc.name())
            .field("method", &self.method)
            .field("position", &self.position)
            .field("input_count", &self.inputs.len())
            .field("kwarg_count", &self.kwargs.len())
            .finish()
    }
}
