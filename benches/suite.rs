//! Allocator comparison suite for the copy-on-write collections.
//!
//! - `churn`: ring growth and release.
//! - `fork`: whole-buffer duplication when a shared handle is written.
//! - `scheduler`: a long-lived heap under steady enqueue and dequeue traffic.
//!
//! With no `alloc-*` feature the system allocator is used.

use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};

mod workloads;

#[cfg(feature = "alloc-mimalloc")]
use mimalloc::MiMalloc;

#[cfg(feature = "alloc-mimalloc")]
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[cfg(feature = "alloc-snmalloc")]
use snmalloc_rs::SnMalloc;

#[cfg(feature = "alloc-snmalloc")]
#[global_allocator]
static GLOBAL: SnMalloc = SnMalloc;

#[cfg(feature = "alloc-jemalloc")]
use jemallocator::Jemalloc;

#[cfg(feature = "alloc-jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn bench_main(c: &mut Criterion) {
    workloads::churn::run(c);
    // Elements own heap allocations, so every fork clones them.
    workloads::fork::run(c);
    workloads::scheduler::run(c);
}

fn suite_config() -> Criterion {
    Criterion::default().warm_up_time(Duration::from_millis(500))
}

criterion_group! {
    name = benches;
    config = suite_config();
    targets = bench_main
}
criterion_main!(benches);
