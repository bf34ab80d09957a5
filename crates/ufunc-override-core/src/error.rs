//! Error types for override resolution.
//!
//! One error type flows through the whole protocol. Operands use it to report
//! failing attribute reads, handlers use it to raise, and the resolvers use it
//! for rejection and bound violations. Because handlers and resolvers share
//! the type, a handler's error reaches the caller through `?` unmodified.
//!
//! ## Error Kinds
//!
//! ```text
//! OverrideError
//! ├── Rejected        - TypeMismatch: every legacy handler declined
//! ├── NotCallable     - TypeMismatch: legacy attribute is not callable
//! ├── ArityExceeded   - Value: more operands than MAX_ARITY
//! ├── UnknownMethod   - Value: unrecognised invocation-variant name
//! └── Raised          - any kind, raised by an operand or a handler
//! ```

use std::fmt;

use thiserror::Error;

/// Category of an [`OverrideError`], as surfaced to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Operand types are not supported by the operation (or a handler).
    TypeMismatch,
    /// An argument has the right type but an unusable value.
    Value,
    /// Reading an attribute failed.
    Attribute,
    /// Any other failure.
    Runtime,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::TypeMismatch => "TypeError",
            ErrorKind::Value => "ValueError",
            ErrorKind::Attribute => "AttributeError",
            ErrorKind::Runtime => "RuntimeError",
        };
        f.write_str(name)
    }
}

/// Errors produced while resolving or running an override.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OverrideError {
    /// At least one legacy handler ran and every one declined.
    #[error("Not implemented for this type.")]
    Rejected,

    /// An operand exposes the legacy attribute but its value cannot be called.
    #[error("'{type_name}' object is not callable (operand {index})")]
    NotCallable { index: usize, type_name: String },

    /// The call has more positional operands than the resolver supports.
    #[error("{count} operands exceed the supported maximum of {max}")]
    ArityExceeded { count: usize, max: usize },

    /// An invocation-variant name did not match any known entry point.
    #[error("unknown ufunc method '{name}'")]
    UnknownMethod { name: String },

    /// Raised by an operand or an override handler.
    #[error("{kind}: {message}")]
    Raised { kind: ErrorKind, message: String },
}

impl OverrideError {
    /// Create a raised error of the given kind.
    pub fn raised(kind: ErrorKind, message: impl Into<String>) -> Self {
        OverrideError::Raised {
            kind,
            message: message.into(),
        }
    }

    /// Shorthand for a raised attribute error.
    pub fn attribute(message: impl Into<String>) -> Self {
        Self::raised(ErrorKind::Attribute, message)
    }

    /// The category this error is surfaced as.
    pub fn kind(&self) -> ErrorKind {
        match self {
            OverrideError::Rejected | OverrideError::NotCallable { .. } => ErrorKind::TypeMismatch,
            OverrideError::ArityExceeded { .. } | OverrideError::UnknownMethod { .. } => {
                ErrorKind::Value
            }
            OverrideError::Raised { kind, .. } => *kind,
        }
    }
}

/// Convenience alias used throughout the override crates.
pub type Result<T> = std::result::Result<T, OverrideError>;
