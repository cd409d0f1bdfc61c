// Copyright 2025 the Pixelscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use pixelscope_view2d::{ImageViewport, ViewState, recompute_transform};

fn viewport(image: Size) -> ImageViewport {
    let mut vp = ImageViewport::new(Size::new(1_280.0, 800.0));
    vp.set_image_size(Some(image));
    vp.fit_content();
    vp
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("view/recompute_transform");
    let widget = Size::new(1_280.0, 800.0);
    let image = Size::new(4_000.0, 3_000.0);

    group.bench_function("valid", |b| {
        let mut scale = 0.1;
        b.iter(|| {
            scale = if scale > 16.0 { 0.1 } else { scale * 1.01 };
            let view = ViewState {
                scale,
                offset: Vec2::new(12.0, -3.0),
            };
            black_box(recompute_transform(view, widget, image))
        });
    });

    group.bench_function("rejected", |b| {
        let view = ViewState {
            scale: 0.0,
            offset: Vec2::ZERO,
        };
        b.iter(|| black_box(recompute_transform(black_box(view), widget, image)));
    });
    group.finish();
}

fn bench_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("view/zoom");
    let image = Size::new(4_000.0, 3_000.0);
    let anchor = Point::new(300.0, 200.0);

    for steps in [1_usize, 16, 256] {
        group.bench_with_input(BenchmarkId::new("zoom_at", steps), &steps, |b, &steps| {
            b.iter_batched(
                || viewport(image),
                |mut vp| {
                    for i in 0..steps {
                        let target = if i % 2 == 0 { 2.0 } else { 0.5 };
                        vp.zoom_at(anchor, target);
                    }
                    black_box(vp)
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("zoom_by_steps", steps),
            &steps,
            |b, &steps| {
                b.iter_batched(
                    || viewport(image),
                    |mut vp| {
                        for i in 0..steps {
                            let dir = if i % 2 == 0 { 1.0 } else { -1.0 };
                            vp.zoom_by_steps(anchor, dir, core::f64::consts::SQRT_2);
                        }
                        black_box(vp)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

fn bench_fit(c: &mut Criterion) {
    c.bench_function("view/fit_content", |b| {
        let mut vp = viewport(Size::new(800.0, 600.0));
        let mut w = 400.0;
        b.iter(|| {
            w = if w > 2_000.0 { 400.0 } else { w + 1.0 };
            vp.set_widget_size(Size::new(w, 600.0));
            black_box(vp.fit_content())
        });
    });
}

criterion_group!(benches, bench_recompute, bench_zoom, bench_fit);
criterion_main!(benches);
