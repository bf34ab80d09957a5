//! Mapping override protocol: collect every candidate, then arbitrate.
//!
//! ## Algorithm
//!
//! 1. Scan all operands left to right, skipping exempt ones
//! 2. Read each operand's override map; keep the operand if the map holds a
//!    callable entry for the current operation
//! 3. No candidates: no override. One candidate: it wins. Several: the
//!    [`PriorityArbiter`] picks the winner
//!
//! Selection does not invoke the handler; [`dispatch_priority`] does both.

use tracing::{debug, trace};
use ufunc_override_core::{Handler, Result};

use crate::arbiter::PriorityArbiter;
use crate::candidates::{CandidateTable, OverrideCandidate};
use crate::classify::classify;
use crate::config::ResolverConfig;
use crate::context::{CallContext, check_arity};
use crate::outcome::Outcome;
use crate::probe::probe_priority_map;

/// Collect every operand with a callable override for the current operation.
pub fn collect_candidates<'a>(
    ctx: &CallContext<'a>,
    config: &ResolverConfig,
) -> Result<CandidateTable<'a>> {
    check_arity(ctx.arity(), config.max_arity)?;

    let op = ctx.ufunc().hash();
    let mut table = CandidateTable::with_capacity(config.max_arity);
    for (index, operand) in ctx.operands() {
        if classify(operand).is_exempt() {
            trace!(
                index,
                type_name = operand.type_name(),
                "exempt operand skipped"
            );
            continue;
        }

        let Some(map) = probe_priority_map(index, operand, config.map_probe_failure)? else {
            continue;
        };

        match map.handler(op) {
            Some(handler) => table.push(OverrideCandidate {
                index,
                operand,
                handler: handler.clone(),
            })?,
            None => trace!(
                index,
                ufunc = ctx.ufunc().name(),
                "override map has no callable entry for this ufunc"
            ),
        }
    }
    Ok(table)
}

/// Select the winning candidate, keeping its position.
pub fn select_priority<'a>(
    ctx: &CallContext<'a>,
    config: &ResolverConfig,
) -> Result<Option<OverrideCandidate<'a>>> {
    let table = collect_candidates(ctx, config)?;
    let arbiter = PriorityArbiter::new(config.default_priority);
    Ok(arbiter
        .select_position(table.as_slice())
        .and_then(|pos| table.take(pos)))
}

/// Select the winning handler, or `None` if no operand claims an override.
pub fn resolve_priority(ctx: &CallContext<'_>, config: &ResolverConfig) -> Result<Option<Handler>> {
    Ok(select_priority(ctx, config)?.map(|candidate| candidate.handler))
}

/// Whether any non-exempt operand exposes an override map.
///
/// Deliberately weaker than [`resolve_priority`]: the map need not contain an
/// entry for the current operation, nor a callable one. `false` here implies
/// `resolve_priority` returns `None`; `true` does not imply the converse.
pub fn has_override(ctx: &CallContext<'_>, config: &ResolverConfig) -> Result<bool> {
    check_arity(ctx.arity(), config.max_arity)?;

    for (index, operand) in ctx.operands() {
        if classify(operand).is_exempt() {
            continue;
        }
        if probe_priority_map(index, operand, config.map_probe_failure)?.is_some() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Select the winning handler and run it for the winner's position.
///
/// # Errors
///
/// Errors raised by the handler are returned unmodified.
pub fn dispatch_priority(ctx: &CallContext<'_>, config: &ResolverConfig) -> Result<Outcome> {
    let Some(candidate) = select_priority(ctx, config)? else {
        return Ok(Outcome::NoOverride);
    };

    debug!(
        index = candidate.index,
        handler = candidate.handler.name(),
        ufunc = ctx.ufunc().name(),
        "dispatching mapping override"
    );
    let call = ctx.override_call(candidate.index);
    Ok(candidate.handler.call(&call)?.into())
}
