//! Allocation-heavy workloads, run once per global allocator by `cargo run -p xtask -- bench`.

pub mod churn;
pub mod fork;
pub mod scheduler;
