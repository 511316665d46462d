// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_carousel::{Carousel, CarouselConfig, DefaultChrome, GestureSupport, PointerKind};

fn bench_autoplay_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/autoplay_loop");

    // A host that only wakes at reported deadlines, for one simulated minute.
    for len in [3usize, 32, 512] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| {
                let config = CarouselConfig::new()
                    .with_autoplay(true)
                    .with_autoplay_interval_ms(500)
                    .with_transition_duration_ms(250);
                let mut carousel = Carousel::mount(config, len, GestureSupport::Unavailable, 0);
                while let Some(now) = carousel.next_deadline() {
                    if now > 60_000 {
                        break;
                    }
                    carousel.tick(now);
                    black_box(carousel.drain_events().count());
                }
                black_box(carousel.active_index())
            });
        });
    }

    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    c.bench_function("carousel/drag_frames", |b| {
        let mut carousel =
            Carousel::mount(CarouselConfig::new(), 8, GestureSupport::Unavailable, 0);
        b.iter(|| {
            carousel.pointer_down(PointerKind::Mouse, Point::new(800.0, 0.0), 1_000.0, 0);
            for x in (500..800).rev().step_by(10) {
                carousel.pointer_move(Point::new(f64::from(x), 0.0));
                black_box(carousel.frame());
            }
            black_box(carousel.pointer_up(Point::new(500.0, 0.0), 0));
            carousel.drain_events().for_each(drop);
        });
    });
}

fn bench_view_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/view_model");

    for len in [8usize, 128, 2_048] {
        let carousel = Carousel::mount(CarouselConfig::new(), len, GestureSupport::Unavailable, 0);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &carousel, |b, carousel| {
            b.iter(|| {
                black_box(carousel.track_slots().count());
                black_box(carousel.chrome(&DefaultChrome))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_autoplay_loop, bench_drag, bench_view_model);
criterion_main!(benches);
