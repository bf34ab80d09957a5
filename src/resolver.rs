//! Resolver facade.

use ufunc_override_core::{Handler, Result};

use crate::candidates::OverrideCandidate;
use crate::config::ResolverConfig;
use crate::context::CallContext;
use crate::outcome::Outcome;
use crate::{legacy, mapping};

/// Entry point for the dispatcher.
///
/// Holds no state besides its configuration; every call builds and discards
/// its own candidate table, so one resolver can serve nested (re-entrant)
/// dispatches from inside a handler.
#[derive(Debug, Clone, Default)]
pub struct OverrideResolver {
    config: ResolverConfig,
}

impl OverrideResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Scan for a legacy override and run the first one that accepts.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn resolve_legacy(&self, ctx: &CallContext<'_>) -> Result<Outcome> {
        legacy::resolve_legacy(ctx, &self.config)
    }

    /// Select the highest-priority mapping override without running it.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn resolve_priority(&self, ctx: &CallContext<'_>) -> Result<Option<Handler>> {
        mapping::resolve_priority(ctx, &self.config)
    }

    /// Like [`resolve_priority`](Self::resolve_priority), keeping the
    /// winning operand's position.
    pub fn select_priority<'a>(
        &self,
        ctx: &CallContext<'a>,
    ) -> Result<Option<OverrideCandidate<'a>>> {
        mapping::select_priority(ctx, &self.config)
    }

    /// Whether any operand exposes an override map at all.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn has_override(&self, ctx: &CallContext<'_>) -> Result<bool> {
        mapping::has_override(ctx, &self.config)
    }

    /// Select and run the highest-priority mapping override.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn dispatch_priority(&self, ctx: &CallContext<'_>) -> Result<Outcome> {
        mapping::dispatch_priority(ctx, &self.config)
    }
}
