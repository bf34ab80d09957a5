//! Value model for ufunc override resolution.
//!
//! Provides the pieces shared by the resolver and by authors of override
//! handlers: operation identity, invocation-variant tags, dynamic values,
//! the operand capability surface, handlers and the error type.
//!
//! # Design
//!
//! - Capabilities are read through [`Operand::get_attr`], which separates
//!   absence (`Ok(None)`) from a failing read (`Err`).
//! - Handlers answer with a [`Reply`] instead of a sentinel value compared by
//!   identity.
//! - One error type, [`OverrideError`], is shared by operands, handlers and
//!   resolvers so errors pass through unmodified.

pub mod error;
pub mod method;
pub mod op_hash;
pub mod runtime;

// Re-export key types at crate root for convenience.
pub use error::{ErrorKind, OverrideError, Result};
pub use method::UfuncMethod;
pub use op_hash::{OpHash, Ufunc};
pub use runtime::{
    Dynamic, Handler, Kwargs, Operand, OverrideCall, OverrideCallable, OverrideMap, Reply,
    TypeFlags, attr,
};

/// Items intended for glob-import: `use ufunc_override_core::prelude::*;`
pub mod prelude {
    pub use crate::error::{ErrorKind, OverrideError, Result};
    pub use crate::method::UfuncMethod;
    pub use crate::op_hash::{OpHash, Ufunc};
    pub use crate::runtime::{
        Dynamic, Handler, Kwargs, Operand, OverrideCall, OverrideMap, Reply, TypeFlags, attr,
    };
}
