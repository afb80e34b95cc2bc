use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cyclic::{Descending, PriorityQueue};
use std::collections::BinaryHeap;

fn bench_binary_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_heap");

    group.bench_function("std_binary_heap_push", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in 0..1000 {
                heap.push(black_box(i));
            }
        });
    });

    group.bench_function("priority_queue_enqueue", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::with_order(Descending);
            for i in 0..1000 {
                queue.enqueue(black_box(i));
            }
        });
    });

    group.bench_function("std_binary_heap_push_pop", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in 0..1000 {
                heap.push(i);
            }
            while let Some(x) = heap.pop() {
                black_box(x);
            }
        });
    });

    group.bench_function("priority_queue_enqueue_dequeue", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::with_order(Descending);
            for i in 0..1000 {
                queue.enqueue(i);
            }
            while let Some(x) = queue.try_dequeue() {
                black_box(x);
            }
        });
    });

    group.bench_function("priority_queue_closure_order", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::with_order(|x: &i32, y: &i32| x > y);
            for i in 0..1000 {
                queue.enqueue(i);
            }
            while let Some(x) = queue.try_dequeue() {
                black_box(x);
            }
        });
    });

    group.bench_function("std_binary_heap_from_vec", |b| {
        let data: Vec<i32> = (0..1000).map(|i| (i * 7919) % 1000).collect();
        b.iter(|| black_box(BinaryHeap::from(data.clone())));
    });

    group.bench_function("priority_queue_heapify", |b| {
        let data: Vec<i32> = (0..1000).map(|i| (i * 7919) % 1000).collect();
        b.iter(|| black_box(PriorityQueue::from_iter_with_order(data.clone(), Descending)));
    });

    group.finish();
}

criterion_group!(benches, bench_binary_heap);
criterion_main!(benches);
