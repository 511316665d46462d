// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_timing::{Deferred, TimerQueue};

fn bench_poll_repeating(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing/poll_repeating");

    // One host tick over a queue of periodic timers with staggered periods.
    for len in [16usize, 128, 1_024] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                || {
                    let mut queue = TimerQueue::new();
                    for i in 0..len as u64 {
                        queue.schedule_repeating(0, 100 + i, i);
                    }
                    queue
                },
                |mut queue| {
                    let mut now = 0;
                    while now < 10_000 {
                        now = queue.next_deadline().unwrap_or(10_000);
                        black_box(queue.poll(now));
                    }
                    black_box(queue);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_cancel_reschedule(c: &mut Criterion) {
    c.bench_function("timing/cancel_reschedule", |b| {
        let mut queue = TimerQueue::new();
        for i in 0..256_u64 {
            queue.schedule_once(0, i, i);
        }
        let mut now = 0;
        b.iter(|| {
            let id = queue.schedule_once(now, 4_500, u64::MAX);
            black_box(queue.cancel(id));
            now += 1;
        });
    });
}

fn bench_deferred(c: &mut Criterion) {
    c.bench_function("timing/deferred_settle", |b| {
        let mut settle = Deferred::idle();
        let mut now = 0_u64;
        b.iter(|| {
            settle.reschedule(black_box(1_usize), now, 1_500, 150);
            now += 1_000;
            black_box(settle.poll(now));
            black_box(settle.trigger());
        });
    });
}

criterion_group!(
    benches,
    bench_poll_repeating,
    bench_cancel_reschedule,
    bench_deferred
);
criterion_main!(benches);
