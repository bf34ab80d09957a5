//! Operand classification.
//!
//! Native scalars and exact native arrays skip override lookup entirely; they
//! are never handed to a capability probe.

use ufunc_override_core::Dynamic;

/// Whether an operand takes part in override lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Native value; no lookup.
    Exempt,
    /// Probe the operand for override capabilities.
    Candidate,
}

impl Classification {
    pub fn is_exempt(self) -> bool {
        matches!(self, Classification::Exempt)
    }
}

/// Classify a positional operand.
///
/// Pure: only consults the value's variant and the type-system flags of
/// objects, never an attribute.
#[inline]
pub fn classify(operand: &Dynamic) -> Classification {
    match operand {
        Dynamic::Bool(_) | Dynamic::Int(_) | Dynamic::Float(_) => Classification::Exempt,
        Dynamic::Object(obj) if obj.type_flags().is_exempt() => Classification::Exempt,
        _ => Classification::Candidate,
    }
}
