//! Override resolution for elementwise numeric operations.
//!
//! Operands of a ufunc call may declare that they handle the operation
//! themselves. This crate decides whether any operand claims the call, which
//! one wins when several do, and how the winner is invoked.
//!
//! Two declaration styles are supported:
//!
//! - **Legacy**: a single callable under `__numpy_ufunc__`. Operands are
//!   scanned left to right and the first handler that does not decline wins.
//! - **Mapping**: an [`OverrideMap`] under `__ufunc_override__`. Every operand
//!   with a callable entry for the operation is collected and the one with
//!   the highest `__array_priority__` wins.
//!
//! # Example
//!
//! ```
//! use ufunc_override::{CallContext, Outcome, OverrideResolver};
//! use ufunc_override::core::{Dynamic, Kwargs, Ufunc, UfuncMethod};
//!
//! let add = Ufunc::binary("add");
//! let inputs = vec![Dynamic::Int(1), Dynamic::Float(2.0)];
//! let kwargs = Kwargs::default();
//! let ctx = CallContext::new(&add, UfuncMethod::Call, &inputs, &kwargs)?;
//!
//! let resolver = OverrideResolver::default();
//! assert_eq!(resolver.resolve_legacy(&ctx)?, Outcome::NoOverride);
//! assert!(!resolver.has_override(&ctx)?);
//! # Ok::<(), ufunc_override::core::OverrideError>(())
//! ```
//!
//! [`OverrideMap`]: ufunc_override_core::OverrideMap

pub mod arbiter;
pub mod candidates;
pub mod classify;
pub mod config;
pub mod context;
pub mod legacy;
pub mod mapping;
pub mod outcome;
pub mod probe;
pub mod resolver;

pub use ufunc_override_core as core;

pub use arbiter::{PriorityArbiter, priority_of};
pub use candidates::{CandidateTable, OverrideCandidate};
pub use classify::{Classification, classify};
pub use config::{DEFAULT_PRIORITY, MAX_ARITY, ProbeFailurePolicy, ResolverConfig};
pub use context::CallContext;
pub use outcome::Outcome;
pub use probe::{probe_legacy, probe_priority_map};
pub use resolver::OverrideResolver;

/// Glob-import convenience: `use ufunc_override::prelude::*;`
pub mod prelude {
    pub use crate::{CallContext, Outcome, OverrideResolver, ProbeFailurePolicy, ResolverConfig};
    pub use ufunc_override_core::prelude::*;
}
