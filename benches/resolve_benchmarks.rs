//! Performance benchmarks for override resolution.
//!
//! Measures the per-call cost of both protocols across operand counts:
//! - Native-only calls: the fast path every plain arithmetic call takes
//! - Mapping: collecting and arbitrating between several claimants
//! - Legacy: scanning past declining handlers
//!
//! ## Profiling with Puffin
//!
//! ```bash
//! cargo bench --features profile-with-puffin
//! ```

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ufunc_override::core::{
    Dynamic, Handler, Kwargs, Operand, OverrideMap, Reply, Result, Ufunc, UfuncMethod, attr,
};
use ufunc_override::{CallContext, OverrideResolver};

#[cfg(feature = "profile-with-puffin")]
static FRAME_VIEW: std::sync::OnceLock<puffin::GlobalFrameView> = std::sync::OnceLock::new();

/// Initialize puffin profiler.
#[cfg(feature = "profile-with-puffin")]
fn setup_profiler() {
    puffin::set_scopes_on(true);
    FRAME_VIEW.get_or_init(puffin::GlobalFrameView::default);
}

#[cfg(not(feature = "profile-with-puffin"))]
fn setup_profiler() {}

/// Call at the end of each benchmark iteration to flush profiling data.
#[cfg(feature = "profile-with-puffin")]
fn end_profiling_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(not(feature = "profile-with-puffin"))]
fn end_profiling_frame() {}

struct Claimant {
    legacy: Option<Dynamic>,
    overrides: Option<Dynamic>,
    priority: f64,
}

impl Operand for Claimant {
    fn type_name(&self) -> &str {
        "Claimant"
    }

    fn get_attr(&self, name: &str) -> Result<Option<Dynamic>> {
        Ok(match name {
            attr::LEGACY_OVERRIDE => self.legacy.clone(),
            attr::OVERRIDE_MAP => self.overrides.clone(),
            attr::ARRAY_PRIORITY => Some(Dynamic::Float(self.priority)),
            _ => None,
        })
    }
}

fn declining() -> Handler {
    Handler::new("declining", |_| Ok(Reply::NotImplemented))
}

fn mapped(ufunc: &Ufunc, priority: f64) -> Dynamic {
    Dynamic::object(Claimant {
        legacy: None,
        overrides: Some(OverrideMap::new().with_handler(ufunc, declining()).into()),
        priority,
    })
}

fn legacy(handler: Handler) -> Dynamic {
    Dynamic::object(Claimant {
        legacy: Some(handler.into()),
        overrides: None,
        priority: 0.0,
    })
}

const OPERAND_COUNTS: [usize; 4] = [2, 4, 8, 32];

/// Calls where no operand can claim an override.
fn native_benchmarks(c: &mut Criterion) {
    setup_profiler();

    let add = Ufunc::binary("add");
    let kwargs = Kwargs::default();
    let resolver = OverrideResolver::default();
    let mut group = c.benchmark_group("resolve/native");

    for n in OPERAND_COUNTS {
        let inputs: Vec<Dynamic> = (0..n as i64).map(Dynamic::Int).collect();
        let ctx = CallContext::new(&add, UfuncMethod::Call, &inputs, &kwargs).unwrap();

        group.bench_with_input(BenchmarkId::new("legacy", n), &ctx, |b, ctx| {
            b.iter(|| {
                black_box(resolver.resolve_legacy(black_box(ctx)).unwrap());
                end_profiling_frame();
            });
        });
        group.bench_with_input(BenchmarkId::new("has_override", n), &ctx, |b, ctx| {
            b.iter(|| {
                black_box(resolver.has_override(black_box(ctx)).unwrap());
                end_profiling_frame();
            });
        });
    }

    group.finish();
}

/// Every operand claims the call through an override map.
fn mapping_benchmarks(c: &mut Criterion) {
    setup_profiler();

    let add = Ufunc::binary("add");
    let kwargs = Kwargs::default();
    let resolver = OverrideResolver::default();
    let mut group = c.benchmark_group("resolve/mapping");

    for n in OPERAND_COUNTS {
        let inputs: Vec<Dynamic> = (0..n).map(|i| mapped(&add, (i % 5) as f64)).collect();
        let ctx = CallContext::new(&add, UfuncMethod::Call, &inputs, &kwargs).unwrap();

        group.bench_with_input(BenchmarkId::new("resolve_priority", n), &ctx, |b, ctx| {
            b.iter(|| {
                black_box(resolver.resolve_priority(black_box(ctx)).unwrap());
                end_profiling_frame();
            });
        });
        group.bench_with_input(BenchmarkId::new("dispatch_priority", n), &ctx, |b, ctx| {
            b.iter(|| {
                black_box(resolver.dispatch_priority(black_box(ctx)).unwrap());
                end_profiling_frame();
            });
        });
    }

    group.finish();
}

/// All handlers decline except the last.
fn legacy_benchmarks(c: &mut Criterion) {
    setup_profiler();

    let add = Ufunc::binary("add");
    let kwargs = Kwargs::default();
    let resolver = OverrideResolver::default();
    let mut group = c.benchmark_group("resolve/legacy");

    for n in OPERAND_COUNTS {
        let mut inputs: Vec<Dynamic> = (1..n).map(|_| legacy(declining())).collect();
        let accepting = Handler::new("accepting", |_| Ok(Reply::value(1i64)));
        inputs.push(legacy(accepting));
        let ctx = CallContext::new(&add, UfuncMethod::Call, &inputs, &kwargs).unwrap();

        group.bench_with_input(BenchmarkId::new("scan_to_last", n), &ctx, |b, ctx| {
            b.iter(|| {
                black_box(resolver.resolve_legacy(black_box(ctx)).unwrap());
                end_profiling_frame();
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    native_benchmarks,
    mapping_benchmarks,
    legacy_benchmarks
);

criterion_main!(benches);
