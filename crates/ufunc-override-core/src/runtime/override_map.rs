//! The canonical operation → handler mapping.

use std::fmt;

use rustc_hash::FxHashMap;

use super::{Dynamic, Handler};
use crate::op_hash::{OpHash, Ufunc};

/// Mapping from operations to override handlers.
///
/// Only this type counts as an override map. Entries may hold any value, but
/// only callable entries make an operand a candidate.
#[derive(Clone, Default, PartialEq)]
pub struct OverrideMap {
    entries: FxHashMap<OpHash, Dynamic>,
}

impl OverrideMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert_handler`](Self::insert_handler).
    pub fn with_handler(mut self, ufunc: &Ufunc, handler: Handler) -> Self {
        self.insert_handler(ufunc, handler);
        self
    }

    /// Set the entry for an operation, returning the previous one.
    pub fn insert(&mut self, ufunc: &Ufunc, value: Dynamic) -> Option<Dynamic> {
        self.entries.insert(ufunc.hash(), value)
    }

    /// Set a callable entry for an operation.
    pub fn insert_handler(&mut self, ufunc: &Ufunc, handler: Handler) -> Option<Dynamic> {
        self.insert(ufunc, Dynamic::Callable(handler))
    }

    /// Get the raw entry for an operation.
    pub fn get(&self, op: OpHash) -> Option<&Dynamic> {
        self.entries.get(&op)
    }

    /// Get the entry for an operation if it is callable.
    pub fn handler(&self, op: OpHash) -> Option<&Handler> {
        self.get(op).and_then(Dynamic::as_handler)
    }

    pub fn contains(&self, op: OpHash) -> bool {
        self.entries.contains_key(&op)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for OverrideMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
