//! The capability surface of operand objects.

use std::fmt;

use bitflags::bitflags;

use super::Dynamic;
use crate::error::Result;

/// Well-known attribute names read during resolution.
pub mod attr {
    /// Single-callable legacy override.
    pub const LEGACY_OVERRIDE: &str = "__numpy_ufunc__";
    /// Mapping from operation to handler.
    pub const OVERRIDE_MAP: &str = "__ufunc_override__";
    /// Priority score used to arbitrate between mapping candidates.
    pub const ARRAY_PRIORITY: &str = "__array_priority__";
}

bitflags! {
    /// What the type system knows about an operand's type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u8 {
        /// The native array type or a subtype of it.
        const ARRAY = 1 << 0;
        /// Exactly the native type, not a subtype.
        const EXACT = 1 << 1;
        /// A recognized scalar-like value.
        const SCALAR = 1 << 2;
        /// Mapping-like (diagnostics only; never accepted as an override map).
        const MAPPING = 1 << 3;
    }
}

impl TypeFlags {
    /// The native array type itself.
    pub const NATIVE_ARRAY: TypeFlags = TypeFlags::ARRAY.union(TypeFlags::EXACT);

    /// Exact native arrays and scalars never take part in override lookup.
    pub fn is_exempt(self) -> bool {
        self.contains(TypeFlags::NATIVE_ARRAY) || self.contains(TypeFlags::SCALAR)
    }
}

/// An object that may be passed as an operand.
///
/// Implementors answer the classification query through [`type_flags`] and
/// expose capabilities through [`get_attr`]. Absence of an attribute is
/// `Ok(None)`; an `Err` means the read itself failed.
///
/// [`type_flags`]: Operand::type_flags
/// [`get_attr`]: Operand::get_attr
pub trait Operand: Send + Sync {
    /// Name of the object's type, for diagnostics.
    fn type_name(&self) -> &str;

    /// Classification of the object's type.
    fn type_flags(&self) -> TypeFlags {
        TypeFlags::empty()
    }

    /// Read an attribute by name.
    fn get_attr(&self, name: &str) -> Result<Option<Dynamic>> {
        let _ = name;
        Ok(None)
    }

    /// The priority score, if the object reports one.
    ///
    /// Reads [`attr::ARRAY_PRIORITY`]. Booleans score `0` or `1`. A missing
    /// attribute, a failing read or a non-numeric value count as "no score".
    fn array_priority(&self) -> Option<f64> {
        match self.get_attr(attr::ARRAY_PRIORITY) {
            Ok(Some(value)) => value.as_f64(),
            _ => None,
        }
    }
}

impl fmt::Debug for dyn Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} object>", self.type_name())
    }
}
