// tests/test_harness.rs
//! Mock operands for override resolution integration tests.
//!
//! [`MockOperand`] exposes whichever capabilities a test configures and
//! records every attribute read in a shared [`Journal`], so tests can check
//! which operands were probed and in what order.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use ufunc_override::core::{
    Dynamic, Handler, Kwargs, Operand, OverrideError, OverrideMap, Reply, Result, TypeFlags, Ufunc,
    attr,
};

/// Shared record of `(operand name, attribute)` reads, in order.
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<(String, String)>>>);

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, operand: &str, attr: &str) {
        self.0
            .lock()
            .unwrap()
            .push((operand.to_string(), attr.to_string()));
    }

    /// All reads so far.
    pub fn reads(&self) -> Vec<(String, String)> {
        self.0.lock().unwrap().clone()
    }

    /// Operand names in the order they were first read.
    pub fn operands_in_order(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for (name, _) in self.reads() {
            if seen.last() != Some(&name) {
                seen.push(name);
            }
        }
        seen
    }

    /// Whether any attribute of `operand` was read.
    pub fn touched(&self, operand: &str) -> bool {
        self.reads().iter().any(|(name, _)| name == operand)
    }
}

/// Configurable operand.
pub struct MockOperand {
    name: String,
    flags: TypeFlags,
    legacy: Option<Dynamic>,
    overrides: Option<Dynamic>,
    priority: Option<f64>,
    failing: Vec<&'static str>,
    journal: Journal,
}

impl MockOperand {
    pub fn new(name: &str, journal: &Journal) -> Self {
        Self {
            name: name.to_string(),
            flags: TypeFlags::empty(),
            legacy: None,
            overrides: None,
            priority: None,
            failing: Vec::new(),
            journal: journal.clone(),
        }
    }

    pub fn flags(mut self, flags: TypeFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Expose a legacy override.
    pub fn legacy(mut self, handler: Handler) -> Self {
        self.legacy = Some(Dynamic::Callable(handler));
        self
    }

    /// Expose an arbitrary value under the legacy attribute.
    pub fn legacy_value(mut self, value: Dynamic) -> Self {
        self.legacy = Some(value);
        self
    }

    /// Expose an override map.
    pub fn overrides(mut self, map: OverrideMap) -> Self {
        self.overrides = Some(Dynamic::Map(map));
        self
    }

    /// Expose an arbitrary value under the override-map attribute.
    pub fn overrides_value(mut self, value: Dynamic) -> Self {
        self.overrides = Some(value);
        self
    }

    pub fn priority(mut self, priority: f64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Make reads of `attr` fail.
    pub fn failing(mut self, attr: &'static str) -> Self {
        self.failing.push(attr);
        self
    }

    pub fn build(self) -> Dynamic {
        Dynamic::object(self)
    }
}

impl Operand for MockOperand {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn type_flags(&self) -> TypeFlags {
        self.flags
    }

    fn get_attr(&self, name: &str) -> Result<Option<Dynamic>> {
        self.journal.record(&self.name, name);
        if self.failing.contains(&name) {
            return Err(OverrideError::attribute(format!(
                "'{}' raised while reading '{}'",
                self.name, name
            )));
        }
        Ok(match name {
            attr::LEGACY_OVERRIDE => self.legacy.clone(),
            attr::OVERRIDE_MAP => self.overrides.clone(),
            attr::ARRAY_PRIORITY => self.priority.map(Dynamic::Float),
            _ => None,
        })
    }
}

/// Handler that always answers `reply`.
pub fn replying(name: &str, reply: Reply) -> Handler {
    Handler::new(name, move |_| Ok(reply.clone()))
}

/// Handler that always declines.
pub fn declining(name: &str) -> Handler {
    replying(name, Reply::NotImplemented)
}

/// Override map with a single entry.
pub fn single_entry(ufunc: &Ufunc, handler: Handler) -> OverrideMap {
    OverrideMap::new().with_handler(ufunc, handler)
}

/// Route resolver logs to the test writer, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Empty keyword arguments.
pub fn no_kwargs() -> Kwargs {
    Kwargs::default()
}
