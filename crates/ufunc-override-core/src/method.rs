//! Invocation-variant tags.
//!
//! An elementwise operation can be entered through several method-like entry
//! points. The tag travels with every override call so a handler knows which
//! one is being dispatched.

use std::fmt;
use std::str::FromStr;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::OverrideError;

/// The entry point being dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum UfuncMethod {
    /// Plain elementwise application.
    Call = 0,
    /// Reduce along an axis.
    Reduce = 1,
    /// Accumulate along an axis, keeping intermediate results.
    Accumulate = 2,
    /// Reduce over slices given by index pairs.
    ReduceAt = 3,
    /// Apply to all pairs of elements from two inputs.
    Outer = 4,
    /// Unbuffered in-place application at given indices.
    At = 5,
}

impl UfuncMethod {
    /// All variants, in tag order.
    pub const ALL: [UfuncMethod; 6] = [
        UfuncMethod::Call,
        UfuncMethod::Reduce,
        UfuncMethod::Accumulate,
        UfuncMethod::ReduceAt,
        UfuncMethod::Outer,
        UfuncMethod::At,
    ];

    /// The name handlers receive for this entry point.
    pub const fn as_str(self) -> &'static str {
        match self {
            UfuncMethod::Call => "__call__",
            UfuncMethod::Reduce => "reduce",
            UfuncMethod::Accumulate => "accumulate",
            UfuncMethod::ReduceAt => "reduceat",
            UfuncMethod::Outer => "outer",
            UfuncMethod::At => "at",
        }
    }
}

impl fmt::Display for UfuncMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UfuncMethod {
    type Err = OverrideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UfuncMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| OverrideError::UnknownMethod {
                name: s.to_string(),
            })
    }
}
