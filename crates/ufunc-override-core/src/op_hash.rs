//! Deterministic hash-based operation identity.
//!
//! [`OpHash`] is a 64-bit hash that identifies an elementwise operation by
//! name. Override maps are keyed by it, so an operand can declare handlers for
//! operations it has never seen a handle for:
//!
//! - Same name = same hash, across every [`Ufunc`] handle
//! - No registration order dependencies
//! - Single map lookups (no secondary name→id maps)
//!
//! # Examples
//!
//! ```
//! use ufunc_override_core::{OpHash, Ufunc};
//!
//! let add = Ufunc::binary("add");
//! assert_eq!(add.hash(), OpHash::from_name("add"));
//! assert_ne!(OpHash::from_name("add"), OpHash::from_name("subtract"));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use xxhash_rust::xxh64::xxh64;

/// Domain marker mixed into every operation hash.
const OPERATION: u64 = 0x3e9f5d2a8c7b1403;

/// A deterministic 64-bit hash identifying an operation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct OpHash(pub u64);

impl OpHash {
    /// Empty/invalid hash constant.
    pub const EMPTY: OpHash = OpHash(0);

    /// Create an operation hash from its name.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        OpHash(OPERATION ^ xxh64(name.as_bytes(), 0))
    }

    /// Check if this is the empty hash.
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }
}

impl fmt::Debug for OpHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpHash({:#018x})", self.0)
    }
}

impl fmt::Display for OpHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// Opaque handle to an elementwise operation.
///
/// Cheap to clone. Two handles are equal when their hashes are equal; the
/// name is kept for diagnostics.
#[derive(Clone)]
pub struct Ufunc {
    name: Arc<str>,
    nin: u8,
    nout: u8,
    hash: OpHash,
}

impl Ufunc {
    /// Create a handle for an operation with `nin` inputs and `nout` outputs.
    pub fn new(name: &str, nin: u8, nout: u8) -> Self {
        Self {
            name: Arc::from(name),
            nin,
            nout,
            hash: OpHash::from_name(name),
        }
    }

    /// Single input, single output (`negative`, `sqrt`, ...).
    pub fn unary(name: &str) -> Self {
        Self::new(name, 1, 1)
    }

    /// Two inputs, single output (`add`, `multiply`, ...).
    pub fn binary(name: &str) -> Self {
        Self::new(name, 2, 1)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nin(&self) -> u8 {
        self.nin
    }

    pub fn nout(&self) -> u8 {
        self.nout
    }

    /// Total number of positional arguments the operation accepts,
    /// including explicit outputs.
    pub fn nargs(&self) -> usize {
        self.nin as usize + self.nout as usize
    }

    pub fn hash(&self) -> OpHash {
        self.hash
    }
}

impl PartialEq for Ufunc {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Ufunc {}

impl Hash for Ufunc {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl fmt::Debug for Ufunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ufunc")
            .field("name", &self.name)
            .field("nin", &self.nin)
            .field("nout", &self.nout)
            .finish()
    }
}

impl fmt::Display for Ufunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<ufunc '{}'>", self.name)
    }
}
