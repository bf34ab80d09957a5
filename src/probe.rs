//! Capability probes.
//!
//! Each probe performs a single attribute read on an operand. A missing
//! attribute is an ordinary negative answer (`Ok(None)`). A read that fails is
//! settled by the configured [`ProbeFailurePolicy`].

use tracing::{debug, trace};
use ufunc_override_core::{Dynamic, Handler, OverrideError, OverrideMap, Result, attr};

use crate::config::ProbeFailurePolicy;

/// Read the legacy override of the operand at `index`.
///
/// # Errors
///
/// - A failing read, when `policy` is [`ProbeFailurePolicy::Propagate`].
/// - [`OverrideError::NotCallable`] if the attribute exists but its value
///   cannot be called.
pub fn probe_legacy(
    index: usize,
    operand: &Dynamic,
    policy: ProbeFailurePolicy,
) -> Result<Option<Handler>> {
    let value = settle(
        policy,
        index,
        attr::LEGACY_OVERRIDE,
        operand.get_attr(attr::LEGACY_OVERRIDE),
    )?;

    match value {
        None => Ok(None),
        Some(Dynamic::Callable(handler)) => {
            trace!(index, handler = handler.name(), "legacy override found");
            Ok(Some(handler))
        }
        Some(other) => Err(OverrideError::NotCallable {
            index,
            type_name: other.type_name().to_string(),
        }),
    }
}

/// Read the override map of the operand at `index`.
///
/// Only the canonical [`OverrideMap`] counts. Any other value, including
/// mapping-like objects, is treated as absent.
pub fn probe_priority_map(
    index: usize,
    operand: &Dynamic,
    policy: ProbeFailurePolicy,
) -> Result<Option<OverrideMap>> {
    let value = settle(
        policy,
        index,
        attr::OVERRIDE_MAP,
        operand.get_attr(attr::OVERRIDE_MAP),
    )?;

    match value {
        None => Ok(None),
        Some(Dynamic::Map(map)) => {
            trace!(index, entries = map.len(), "override map found");
            Ok(Some(map))
        }
        Some(other) => {
            trace!(
                index,
                type_name = other.type_name(),
                "override attribute is not an exact map; ignored"
            );
            Ok(None)
        }
    }
}

/// Apply the failure policy to the outcome of an attribute read.
fn settle(
    policy: ProbeFailurePolicy,
    index: usize,
    name: &'static str,
    read: Result<Option<Dynamic>>,
) -> Result<Option<Dynamic>> {
    match (read, policy) {
        (Ok(value), _) => Ok(value),
        (Err(err), ProbeFailurePolicy::Propagate) => Err(err),
        (Err(err), ProbeFailurePolicy::TreatAsAbsent) => {
            debug!(index, attr = name, error = %err, "attribute read failed; treated as absent");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use ufunc_override_core::{ErrorKind, Operand, Reply, TypeFlags, Ufunc};

    use super::*;

    /// Answers every attribute read with a fixed result.
    struct Fixed(Result<Option<Dynamic>>);

    impl Operand for Fixed {
        fn type_name(&self) -> &str {
            "Fixed"
        }

        fn get_attr(&self, _name: &str) -> Result<Option<Dynamic>> {
            self.0.clone()
        }
    }

    /// Looks like a mapping to the type system, but is not the canonical one.
    struct FakeMap;

    impl Operand for FakeMap {
        fn type_name(&self) -> &str {
            "FakeMap"
        }

        fn type_flags(&self) -> TypeFlags {
            TypeFlags::MAPPING
        }
    }

    fn handler() -> Handler {
        Handler::new("h", |_| Ok(Reply::NotImplemented))
    }

    fn failing() -> Dynamic {
        Dynamic::object(Fixed(Err(OverrideError::attribute("descriptor raised"))))
    }

    #[test]
    fn legacy_absent_is_none() {
        let op = Dynamic::object(Fixed(Ok(None)));
        let found = probe_legacy(0, &op, ProbeFailurePolicy::Propagate).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn legacy_callable_is_returned() {
        let h = handler();
        let op = Dynamic::object(Fixed(Ok(Some(Dynamic::Callable(h.clone())))));
        let found = probe_legacy(0, &op, ProbeFailurePolicy::Propagate).unwrap();
        assert!(found.is_some_and(|f| f.ptr_eq(&h)));
    }

    #[test]
    fn legacy_non_callable_is_an_error() {
        let op = Dynamic::object(Fixed(Ok(Some(Dynamic::Int(5)))));
        let err = probe_legacy(3, &op, ProbeFailurePolicy::Propagate).unwrap_err();
        assert_eq!(
            err,
            OverrideError::NotCallable {
                index: 3,
                type_name: "int".to_string()
            }
        );
    }

    #[test]
    fn failing_read_follows_policy() {
        let op = failing();

        let err = probe_legacy(0, &op, ProbeFailurePolicy::Propagate).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Attribute);
        assert!(
            probe_legacy(0, &op, ProbeFailurePolicy::TreatAsAbsent)
                .unwrap()
                .is_none()
        );

        assert!(probe_priority_map(0, &op, ProbeFailurePolicy::Propagate).is_err());
        assert!(
            probe_priority_map(0, &op, ProbeFailurePolicy::TreatAsAbsent)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn exact_map_is_returned() {
        let add = Ufunc::binary("add");
        let map = OverrideMap::new().with_handler(&add, handler());
        let op = Dynamic::object(Fixed(Ok(Some(Dynamic::Map(map)))));

        let found = probe_priority_map(0, &op, ProbeFailurePolicy::TreatAsAbsent)
            .unwrap()
            .unwrap();
        assert!(found.handler(add.hash()).is_some());
    }

    #[test]
    fn look_alike_map_is_absent() {
        let op = Dynamic::object(Fixed(Ok(Some(Dynamic::object(FakeMap)))));
        let found = probe_priority_map(0, &op, ProbeFailurePolicy::Propagate).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn non_objects_expose_nothing() {
        let op = Dynamic::Str("text".into());
        assert!(
            probe_legacy(0, &op, ProbeFailurePolicy::Propagate)
                .unwrap()
                .is_none()
        );
        assert!(
            probe_priority_map(0, &op, ProbeFailurePolicy::Propagate)
                .unwrap()
                .is_none()
        );
    }
}
