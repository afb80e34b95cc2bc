use criterion::{black_box, Criterion};
use cyclic::{Deque, Queue};

pub fn run(c: &mut Criterion) {
    bench_grow_from_empty(c);
    bench_steady_state_queue(c);
    bench_remove_all(c);
}

fn bench_grow_from_empty(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn_grow");
    group.warm_up_time(std::time::Duration::from_millis(500));
    group.measurement_time(std::time::Duration::from_secs(1));
    group.sample_size(10);

    group.bench_function("append_10k", |b| {
        b.iter(|| {
            let mut deque = Deque::new();
            for i in 0..10_000u32 {
                deque.append(black_box(i));
            }
            black_box(deque.capacity())
        })
    });

    group.bench_function("prepend_10k", |b| {
        b.iter(|| {
            let mut deque = Deque::new();
            for i in 0..10_000u32 {
                deque.prepend(black_box(i));
            }
            black_box(deque.capacity())
        })
    });

    group.finish();
}

fn bench_steady_state_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn_steady");

    group.bench_function("queue_window_64", |b| {
        let mut queue: Queue<Box<u64>> = (0..64).map(Box::new).collect();
        b.iter(|| {
            for i in 0..1000 {
                queue.enqueue(Box::new(black_box(i)));
                black_box(queue.dequeue());
            }
        })
    });

    group.finish();
}

fn bench_remove_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn_remove_all");

    group.bench_function("keep_capacity", |b| {
        let mut deque: Deque<String> = Deque::with_capacity(1024);
        b.iter(|| {
            for i in 0..1000 {
                deque.append(i.to_string());
            }
            deque.remove_all(true);
        })
    });

    group.bench_function("release_capacity", |b| {
        let mut deque: Deque<String> = Deque::new();
        b.iter(|| {
            for i in 0..1000 {
                deque.append(i.to_string());
            }
            deque.remove_all(false);
        })
    });

    group.finish();
}
