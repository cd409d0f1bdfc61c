// Copyright 2025 the Pixelscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use pixelscope_canvas::probe::probe_pixel;
use pixelscope_canvas::{CanvasConfig, ImageCanvas, InputHandler, PointerButton, RgbImage};
use pixelscope_view2d::{ImageTransform, ViewState, recompute_transform};

fn gradient(side: u32) -> RgbImage {
    RgbImage::from_fn(side, side, |x, y| [(x & 0xff) as u8, (y & 0xff) as u8, 64])
}

fn bench_probe_pixel(c: &mut Criterion) {
    let mut group = c.benchmark_group("probe/probe_pixel");
    let image = gradient(2_048);
    let invalid = CanvasConfig::default().invalid_color;

    for scale in [0.25_f64, 1.0, 8.0] {
        let transform = recompute_transform(
            ViewState {
                scale,
                ..Default::default()
            },
            Size::new(1_024.0, 768.0),
            Size::new(2_048.0, 2_048.0),
        )
        .unwrap_or(ImageTransform::IDENTITY);

        group.bench_with_input(BenchmarkId::new("scale", scale), &transform, |b, t| {
            let mut x = 0.0;
            b.iter(|| {
                x = (x + 7.0) % 1_024.0;
                black_box(probe_pixel(Some(&image), t, Point::new(x, 384.0), invalid))
            });
        });
    }
    group.finish();
}

fn bench_pointer_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("probe/pointer_move");

    for listeners in [0_usize, 1, 8] {
        let mut canvas = ImageCanvas::default();
        canvas.set_image(Some(gradient(1_024)));
        canvas.resize(Size::new(800.0, 600.0));
        for _ in 0..listeners {
            canvas.subscribe(|e| {
                black_box(e);
            });
        }

        group.throughput(Throughput::Elements(1));
        group.bench_function(BenchmarkId::new("hover", listeners), |b| {
            let mut y = 0.0;
            b.iter(|| {
                y = (y + 3.0) % 600.0;
                black_box(canvas.pointer_move(Point::new(400.0, y)))
            });
        });

        canvas.pointer_down(PointerButton::Primary, Point::new(400.0, 300.0));
        group.bench_function(BenchmarkId::new("drag", listeners), |b| {
            let mut dx = 1.0;
            b.iter(|| {
                dx = -dx;
                black_box(canvas.pointer_move(Point::new(400.0 + dx, 300.0)))
            });
        });
        canvas.pointer_up(PointerButton::Primary, Point::new(400.0, 300.0));
    }
    group.finish();
}

criterion_group!(benches, bench_probe_pixel, bench_pointer_move);
criterion_main!(benches);
