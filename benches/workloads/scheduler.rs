use criterion::{black_box, Criterion};
use cyclic::PriorityQueue;

#[derive(Clone)]
struct Task {
    deadline: u64,
    payload: Box<[u8]>,
}

pub fn run(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler");
    group.sample_size(10);

    // Earliest deadline first; every tick retires one task and schedules two.
    group.bench_function("edf_4k_ticks", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::with_order(|x: &Task, y: &Task| x.deadline < y.deadline);
            let mut seed = 0x2545_f491_4f6c_dd1du64;
            for tick in 0..4096u64 {
                for _ in 0..2 {
                    seed ^= seed << 13;
                    seed ^= seed >> 7;
                    seed ^= seed << 17;
                    queue.enqueue(Task {
                        deadline: tick + seed % 512,
                        payload: vec![0; (seed % 64) as usize].into_boxed_slice(),
                    });
                }
                let task = queue.dequeue();
                black_box(task.payload.len());
            }
            black_box(queue.len())
        })
    });

    group.finish();
}
