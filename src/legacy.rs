//! Legacy override protocol: first accepting handler wins.
//!
//! ## Algorithm
//!
//! Operands are scanned left to right:
//!
//! 1. Exempt operands are skipped
//! 2. Operands without the legacy attribute are skipped
//! 3. The handler is invoked with `(ufunc, method, i, inputs)` and the keywords
//! 4. `NotImplemented` continues the scan; any other reply ends it
//!
//! If the scan runs out, the call is rejected when at least one handler ran,
//! and left to the default computation when none did.

use tracing::{debug, trace};
use ufunc_override_core::{OverrideError, Reply, Result};

use crate::classify::classify;
use crate::config::ResolverConfig;
use crate::context::{CallContext, check_arity};
use crate::outcome::Outcome;
use crate::probe::probe_legacy;

/// Resolve and run the legacy override of a call.
///
/// Returns [`Outcome::Accepted`] with the first accepting handler's value, or
/// [`Outcome::NoOverride`] if no operand exposes a legacy handler.
///
/// # Errors
///
/// - [`OverrideError::Rejected`] if every invoked handler declined
/// - [`OverrideError::NotCallable`] for a non-callable legacy attribute
/// - Failing attribute reads, under [`ProbeFailurePolicy::Propagate`]
/// - Any error raised by a handler, unmodified
///
/// [`ProbeFailurePolicy::Propagate`]: crate::ProbeFailurePolicy::Propagate
pub fn resolve_legacy(ctx: &CallContext<'_>, config: &ResolverConfig) -> Result<Outcome> {
    check_arity(ctx.arity(), config.max_arity)?;

    let mut invoked = false;
    for (index, operand) in ctx.operands() {
        if classify(operand).is_exempt() {
            trace!(
                index,
                type_name = operand.type_name(),
                "exempt operand skipped"
            );
            continue;
        }

        let Some(handler) = probe_legacy(index, operand, config.legacy_probe_failure)? else {
            continue;
        };

        invoked = true;
        let call = ctx.override_call(index);
        match handler.call(&call)? {
            Reply::NotImplemented => {
                trace!(index, handler = handler.name(), "legacy override declined");
            }
            Reply::Value(value) => {
                debug!(
                    index,
                    handler = handler.name(),
                    ufunc = ctx.ufunc().name(),
                    "legacy override accepted"
                );
                return Ok(Outcome::Accepted(value));
            }
        }
    }

    if invoked {
        debug!(ufunc = ctx.ufunc().name(), "every legacy override declined");
        return Err(OverrideError::Rejected);
    }
    Ok(Outcome::NoOverride)
}
