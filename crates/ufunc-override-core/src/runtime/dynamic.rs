//! Runtime value type for operands, keyword values and handler results.

use std::fmt;
use std::sync::Arc;

use super::{Handler, Operand, OverrideMap};
use crate::error::Result;

/// A dynamic value that flows through override resolution.
///
/// `Bool`, `Int` and `Float` are the native scalar representation; objects
/// that take part in the override protocol are carried as `Object`.
///
/// Cloning is cheap for objects and handlers (shared by `Arc`).
#[derive(Clone)]
pub enum Dynamic {
    /// Absent value / `None`
    None,
    /// Native boolean scalar
    Bool(bool),
    /// Native integer scalar
    Int(i64),
    /// Native floating point scalar
    Float(f64),
    /// String value (owned)
    Str(String),
    /// Ordered sequence of values
    Tuple(Vec<Dynamic>),
    /// The canonical override mapping
    Map(OverrideMap),
    /// A callable value
    Callable(Handler),
    /// An arbitrary object exposing the [`Operand`] capability surface
    Object(Arc<dyn Operand>),
}

impl Dynamic {
    /// Wrap an operand object.
    pub fn object<O: Operand + 'static>(operand: O) -> Self {
        Dynamic::Object(Arc::new(operand))
    }

    /// Get a human-readable name for this value's type.
    pub fn type_name(&self) -> &str {
        match self {
            Dynamic::None => "NoneType",
            Dynamic::Bool(_) => "bool",
            Dynamic::Int(_) => "int",
            Dynamic::Float(_) => "float",
            Dynamic::Str(_) => "str",
            Dynamic::Tuple(_) => "tuple",
            Dynamic::Map(_) => "dict",
            Dynamic::Callable(_) => "function",
            Dynamic::Object(obj) => obj.type_name(),
        }
    }

    /// Check if this value is `None`.
    pub fn is_none(&self) -> bool {
        matches!(self, Dynamic::None)
    }

    /// Check if this value can be called.
    pub fn is_callable(&self) -> bool {
        matches!(self, Dynamic::Callable(_))
    }

    /// The handler, if this value is callable.
    pub fn as_handler(&self) -> Option<&Handler> {
        match self {
            Dynamic::Callable(h) => Some(h),
            _ => None,
        }
    }

    /// Numeric view used for priority values. Booleans count as `0` and `1`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Dynamic::Bool(v) => Some(*v as u8 as f64),
            Dynamic::Float(v) => Some(*v),
            Dynamic::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Look up an attribute.
    ///
    /// Only objects carry attributes; every other variant reports absence.
    pub fn get_attr(&self, name: &str) -> Result<Option<Dynamic>> {
        match self {
            Dynamic::Object(obj) => obj.get_attr(name),
            _ => Ok(None),
        }
    }
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dynamic::None => write!(f, "None"),
            Dynamic::Bool(v) => write!(f, "Bool({})", v),
            Dynamic::Int(v) => write!(f, "Int({})", v),
            Dynamic::Float(v) => write!(f, "Float({})", v),
            Dynamic::Str(s) => write!(f, "Str({:?})", s),
            Dynamic::Tuple(items) => f.debug_tuple("Tuple").field(items).finish(),
            Dynamic::Map(m) => write!(f, "Map({:?})", m),
            Dynamic::Callable(h) => write!(f, "Callable({:?})", h),
            Dynamic::Object(obj) => write!(f, "Object(<{}>)", obj.type_name()),
        }
    }
}

impl PartialEq for Dynamic {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Dynamic::None, Dynamic::None) => true,
            (Dynamic::Bool(a), Dynamic::Bool(b)) => a == b,
            (Dynamic::Int(a), Dynamic::Int(b)) => a == b,
            (Dynamic::Float(a), Dynamic::Float(b)) => a == b,
            (Dynamic::Str(a), Dynamic::Str(b)) => a == b,
            (Dynamic::Tuple(a), Dynamic::Tuple(b)) => a == b,
            (Dynamic::Map(a), Dynamic::Map(b)) => a == b,
            // Callables and objects compare by identity
            (Dynamic::Callable(a), Dynamic::Callable(b)) => a.ptr_eq(b),
            (Dynamic::Object(a), Dynamic::Object(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl From<bool> for Dynamic {
    fn from(v: bool) -> Self {
        Dynamic::Bool(v)
    }
}

impl From<i64> for Dynamic {
    fn from(v: i64) -> Self {
        Dynamic::Int(v)
    }
}

impl From<i32> for Dynamic {
    fn from(v: i32) -> Self {
        Dynamic::Int(v as i64)
    }
}

impl From<f64> for Dynamic {
    fn from(v: f64) -> Self {
        Dynamic::Float(v)
    }
}

impl From<&str> for Dynamic {
    fn from(v: &str) -> Self {
        Dynamic::Str(v.to_string())
    }
}

impl From<String> for Dynamic {
    fn from(v: String) -> Self {
        Dynamic::Str(v)
    }
}

impl From<Handler> for Dynamic {
    fn from(h: Handler) -> Self {
        Dynamic::Callable(h)
    }
}

impl From<OverrideMap> for Dynamic {
    fn from(m: OverrideMap) -> Self {
        Dynamic::Map(m)
    }
}

impl From<Arc<dyn Operand>> for Dynamic {
    fn from(obj: Arc<dyn Operand>) -> Self {
        Dynamic::Object(obj)
    }
}
