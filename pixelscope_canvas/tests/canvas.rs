// Copyright 2025 the Pixelscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end behavior of `ImageCanvas` driven through its host API.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Circle, Line, Point, Size, Vec2};
use peniko::Color;
use pixelscope_canvas::{
    CanvasEvent, CursorProbe, ImageCanvas, InputHandler, PaintOp, Paintable, PointerButton,
    RecordingPainter, RgbImage, WheelDelta,
};

const EPS: f64 = 1e-9;

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        [(x % 256) as u8, (y % 256) as u8, 128]
    })
}

fn canvas_with(image: RgbImage, widget: Size) -> ImageCanvas {
    let mut canvas = ImageCanvas::default();
    canvas.set_image(Some(image));
    canvas.resize(widget);
    canvas
}

fn record(canvas: &mut ImageCanvas) -> Rc<RefCell<Vec<CanvasEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    canvas.subscribe(move |e| sink.borrow_mut().push(e.clone()));
    log
}

fn probes(log: &RefCell<Vec<CanvasEvent>>) -> Vec<CursorProbe> {
    log.borrow()
        .iter()
        .filter_map(|e| match e {
            CanvasEvent::CursorPositionChanged(p) => Some(p.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn screen_image_round_trip() {
    let mut canvas = canvas_with(gradient(37, 91), Size::new(640.0, 480.0));
    canvas.zoom_at(13.0, 400.0, 3.3);
    canvas.set_view_offset(-21.5, 7.25);

    let to_image = canvas.viewport_to_image();
    let to_view = canvas.image_to_viewport();
    for p in [
        Point::new(0.0, 0.0),
        Point::new(639.0, 479.0),
        Point::new(-250.0, 1_000.0),
        Point::new(0.5, 0.25),
    ] {
        let back = to_view * (to_image * p);
        assert!((back - p).hypot() < EPS, "{p:?} -> {back:?}");
    }
}

#[test]
fn zoom_at_preserves_the_anchor() {
    let mut canvas = canvas_with(gradient(300, 200), Size::new(500.0, 500.0));
    let anchor = Point::new(123.0, 321.0);
    let before = canvas.viewport_to_image() * anchor;

    for zoom in [0.1, 2.0, 8.0, 0.75] {
        canvas.zoom_at(anchor.x, anchor.y, zoom);
        let after = canvas.viewport_to_image() * anchor;
        assert!((after - before).hypot() < EPS, "zoom {zoom}: {before:?} vs {after:?}");
        assert!((canvas.zoom_factor() - zoom).abs() < EPS);
    }
}

#[test]
fn fit_content_for_wide_image() {
    let mut canvas = canvas_with(gradient(800, 600), Size::new(400.0, 600.0));
    let log = record(&mut canvas);

    canvas.set_zoom_factor(3.0);
    canvas.set_view_offset(40.0, 40.0);
    canvas.fit_content(true);

    assert!((canvas.zoom_factor() - 0.5).abs() < EPS);
    assert_eq!(canvas.viewport().offset(), Vec2::ZERO);
    assert_eq!(
        *log.borrow(),
        [CanvasEvent::ZoomChanged(3.0), CanvasEvent::ZoomChanged(0.5)]
    );
}

#[test]
fn pan_accumulates_independent_of_event_count() {
    let mut canvas = canvas_with(gradient(100, 100), Size::new(200.0, 200.0));
    canvas.set_view_offset(1.0, -1.0);

    canvas.pointer_down(PointerButton::Primary, Point::new(10.0, 10.0));
    canvas.pointer_move(Point::new(15.0, 12.0));
    canvas.pointer_move(Point::new(20.0, 20.0));
    canvas.pointer_up(PointerButton::Primary, Point::new(20.0, 20.0));

    assert_eq!(canvas.viewport().offset(), Vec2::new(11.0, 9.0));
}

#[test]
fn cursor_events_fire_on_every_move_even_while_dragging() {
    let mut canvas = canvas_with(gradient(100, 100), Size::new(100.0, 100.0));
    let log = record(&mut canvas);

    canvas.pointer_move(Point::new(50.0, 50.0));
    canvas.pointer_down(PointerButton::Primary, Point::new(50.0, 50.0));
    canvas.pointer_move(Point::new(60.0, 50.0));
    canvas.pointer_move(Point::new(70.0, 50.0));
    canvas.pointer_up(PointerButton::Primary, Point::new(70.0, 50.0));

    let seen = probes(&log);
    assert_eq!(seen.len(), 3);
    // Each probe maps through the transform in effect before that move's pan.
    assert_eq!(seen[0].position, Point::new(50.0, 50.0));
    assert_eq!(seen[1].position, Point::new(60.0, 50.0));
    assert_eq!(seen[2].position, Point::new(60.0, 50.0));
}

#[test]
fn probe_validity_boundary() {
    // 1:1 scale, image exactly covering the widget.
    let mut canvas = canvas_with(gradient(100, 100), Size::new(100.0, 100.0));
    assert!((canvas.zoom_factor() - 1.0).abs() < EPS);
    let log = record(&mut canvas);

    canvas.pointer_move(Point::new(99.999, 99.999));
    canvas.pointer_move(Point::new(100.0, 0.0));
    canvas.pointer_move(Point::new(-0.001, 0.0));
    canvas.pointer_move(Point::new(12.7, 3.2));

    let seen = probes(&log);
    assert!(seen[0].valid);
    assert_eq!(seen[0].description, "R:99,G:99,B:128");
    assert!(!seen[1].valid);
    assert!(!seen[2].valid);
    assert_eq!(seen[2].color, Color::from_rgb8(0, 0, 0));
    assert!(seen[2].description.is_empty());
    assert!(seen[3].valid);
    assert_eq!(seen[3].color, Color::from_rgb8(12, 3, 128));
}

#[test]
fn probe_without_image_is_invalid() {
    let mut canvas: ImageCanvas = ImageCanvas::default();
    canvas.resize(Size::new(100.0, 100.0));
    let log = record(&mut canvas);

    canvas.pointer_move(Point::new(10.0, 10.0));
    let seen = probes(&log);
    assert_eq!(seen.len(), 1);
    assert!(!seen[0].valid);
}

#[test]
fn wheel_clicks_compound_by_sqrt_two() {
    let mut canvas = canvas_with(gradient(100, 100), Size::new(100.0, 100.0));
    let anchor = Point::new(30.0, 40.0);
    let before = canvas.viewport_to_image() * anchor;

    canvas.wheel(anchor, WheelDelta::AngleEighths(120));
    assert!((canvas.zoom_factor() - std::f64::consts::SQRT_2).abs() < 1e-12);
    canvas.wheel(anchor, WheelDelta::AngleEighths(120));
    assert!((canvas.zoom_factor() - 2.0).abs() < 1e-12);
    canvas.wheel(anchor, WheelDelta::AngleEighths(-360));
    assert!((canvas.zoom_factor() - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);

    let after = canvas.viewport_to_image() * anchor;
    assert!((after - before).hypot() < 1e-9);
}

#[test]
fn degenerate_zoom_keeps_last_good_view() {
    let mut canvas = canvas_with(gradient(10, 10), Size::new(100.0, 100.0));
    let log = record(&mut canvas);
    let before = canvas.transform();

    canvas.set_zoom_factor(0.0);
    canvas.zoom_at(5.0, 5.0, -2.0);
    assert_eq!(canvas.transform(), before);
    assert!(log.borrow().is_empty());

    // Collapsing the widget keeps the previous transform as well.
    canvas.resize(Size::ZERO);
    assert_eq!(canvas.transform(), before);
}

#[test]
fn paint_pass_order_and_geometry() {
    let mut canvas = canvas_with(gradient(10, 10), Size::new(100.0, 100.0));
    // Fit gives scale 10 and maps image (0, 0) to the widget origin.
    assert!((canvas.zoom_factor() - 10.0).abs() < EPS);

    canvas.add_text(1.0, 1.0, 0, 0, 255, "label");
    canvas.add_line(0.0, 0.0, 10.0, 10.0, 0, 255, 0);
    canvas.add_dot(0.5, 0.5, 255, 0, 0);
    canvas.pointer_move(Point::new(25.0, 75.0));

    let mut painter = RecordingPainter::new();
    canvas.paint(&mut painter);
    let ops = painter.take();

    assert_eq!(ops.len(), 7);
    assert!(matches!(ops[0], PaintOp::FillRect { .. }));
    assert!(matches!(ops[1], PaintOp::DrawImage { .. }));
    assert_eq!(
        ops[2],
        PaintOp::StrokeCircle {
            circle: Circle::new((5.0, 5.0), 2.0),
            color: Color::from_rgb8(255, 0, 0),
        }
    );
    assert_eq!(
        ops[3],
        PaintOp::StrokeLine {
            line: Line::new((0.0, 0.0), (100.0, 100.0)),
            color: Color::from_rgb8(0, 255, 0),
        }
    );
    assert_eq!(
        ops[4],
        PaintOp::DrawText {
            origin: Point::new(10.0, 10.0),
            text: "label".into(),
            color: Color::from_rgb8(0, 0, 255),
        }
    );
    // Crosshair spans the widget through the cursor, in screen space.
    assert_eq!(
        ops[5],
        PaintOp::StrokeLine {
            line: Line::new((0.0, 75.0), (100.0, 75.0)),
            color: canvas.config().crosshair,
        }
    );
    assert_eq!(
        ops[6],
        PaintOp::StrokeLine {
            line: Line::new((25.0, 0.0), (25.0, 100.0)),
            color: canvas.config().crosshair,
        }
    );
}

#[test]
fn paint_without_image_draws_background_only() {
    let mut canvas: ImageCanvas = ImageCanvas::default();
    canvas.resize(Size::new(64.0, 32.0));
    canvas.add_dot(1.0, 1.0, 255, 255, 255);

    let mut painter = RecordingPainter::new();
    canvas.paint(&mut painter);
    assert_eq!(
        painter.ops(),
        [PaintOp::FillRect {
            rect: kurbo::Rect::new(0.0, 0.0, 64.0, 32.0),
            color: canvas.config().background,
        }]
    );
}

#[test]
fn clear_drops_annotations_but_not_crosshair() {
    let mut canvas = canvas_with(gradient(10, 10), Size::new(100.0, 100.0));
    canvas.add_dot(1.0, 1.0, 1, 2, 3);
    canvas.add_text(2.0, 2.0, 1, 2, 3, "t");
    canvas.pointer_move(Point::new(5.0, 5.0));
    canvas.clear();

    assert!(canvas.overlays().is_empty());
    assert_eq!(
        canvas.crosshair().horizontal,
        Line::new((0.0, 5.0), (100.0, 5.0))
    );
}
