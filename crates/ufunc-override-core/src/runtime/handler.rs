//! Override handlers and the replies they produce.

use std::fmt;
use std::sync::Arc;

use super::{Dynamic, OverrideCall};
use crate::error::Result;

/// What an override handler answers.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// The handler computed the result.
    Value(Dynamic),
    /// The handler declines; the next candidate may try.
    NotImplemented,
}

impl Reply {
    /// Wrap a value.
    pub fn value(v: impl Into<Dynamic>) -> Self {
        Reply::Value(v.into())
    }
}

/// Trait for values that can act as override handlers.
pub trait OverrideCallable {
    /// Run the override with the given call arguments.
    fn call(&self, call: &OverrideCall<'_>) -> Result<Reply>;
}

// Closures that take the call arguments
impl<F> OverrideCallable for F
where
    F: Fn(&OverrideCall<'_>) -> Result<Reply>,
{
    fn call(&self, call: &OverrideCall<'_>) -> Result<Reply> {
        (self)(call)
    }
}

/// Type-erased override handler.
///
/// The callable is shared through an `Arc`, so a handler taken out of an
/// operand stays valid independently of that operand.
#[derive(Clone)]
pub struct Handler {
    name: Arc<str>,
    inner: Arc<dyn OverrideCallable + Send + Sync>,
}

impl Handler {
    /// Create a handler from a closure.
    pub fn new<F>(name: &str, f: F) -> Self
    where
        F: Fn(&OverrideCall<'_>) -> Result<Reply> + Send + Sync + 'static,
    {
        Self::from_callable(name, f)
    }

    /// Create a handler from any callable.
    pub fn from_callable<C>(name: &str, callable: C) -> Self
    where
        C: OverrideCallable + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name),
            inner: Arc::new(callable),
        }
    }

    /// Name used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the handler.
    pub fn call(&self, call: &OverrideCall<'_>) -> Result<Reply> {
        self.inner.call(call)
    }

    /// Whether both handlers share the same underlying callable.
    pub fn ptr_eq(&self, other: &Handler) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.inner), Arc::as_ptr(&other.inner))
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
