use criterion::{black_box, Criterion};
use cyclic::{Deque, LinkedList};

pub fn run(c: &mut Criterion) {
    bench_fork_on_write(c);
    bench_snapshot_history(c);
}

fn bench_fork_on_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("fork_on_write");

    let deque: Deque<Vec<u8>> = (0..1024).map(|i| vec![i as u8; 32]).collect();
    group.bench_function("deque_1k_heap_elements", |b| {
        b.iter(|| {
            let mut copy = deque.clone();
            copy.prepend(Vec::new());
            black_box(copy)
        })
    });

    let list: LinkedList<Vec<u8>> = (0..1024).map(|i| vec![i as u8; 32]).collect();
    group.bench_function("linked_list_1k_heap_elements", |b| {
        b.iter(|| {
            let mut copy = list.clone();
            copy.prepend(Vec::new());
            black_box(copy)
        })
    });

    group.finish();
}

/// Keeps every intermediate version alive, so each mutation forks.
fn bench_snapshot_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("fork_history");
    group.sample_size(10);

    group.bench_function("deque_256_versions", |b| {
        b.iter(|| {
            let mut history = Vec::with_capacity(256);
            let mut current = Deque::new();
            for i in 0..256u64 {
                current.append(i);
                history.push(current.clone());
            }
            black_box(history)
        })
    });

    group.finish();
}
