// Copyright 2025 the Pixelscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Affine, Circle, Line, Point, Rect, Size, Vec2};
use peniko::Color;
use pixelscope_event_state::drag::{PanDrag, PressOutcome};
use pixelscope_event_state::wheel::WheelDelta;
use pixelscope_event_state::{CursorIcon, PointerButton};
use pixelscope_overlay::{Annotation, Crosshair, OverlayStore};
use pixelscope_view2d::{ImageTransform, ImageViewport};

use crate::config::CanvasConfig;
use crate::event::{CanvasEvent, ListenerId, Listeners};
use crate::image::{RasterImage, RgbImage};
use crate::input::{EventResult, InputHandler};
use crate::paint::{PaintOp, Paintable, Painter};
use crate::probe::probe_pixel;

/// Interactive image‑inspection canvas.
///
/// `ImageCanvas` is the piece a host widget embeds. The host forwards its
/// input through [`InputHandler`], paints through [`Paintable`], and
/// listens for [`CanvasEvent`]s. The canvas itself never blocks and never
/// fails: operations that cannot apply (no image, degenerate view) are
/// no‑ops.
///
/// All annotation coordinates use image space with the pixel‑corner
/// convention.
#[derive(Debug)]
pub struct ImageCanvas<I = RgbImage> {
    config: CanvasConfig,
    image: Option<I>,
    viewport: ImageViewport,
    drag: PanDrag,
    cursor_icon: CursorIcon,
    overlays: OverlayStore,
    crosshair: Crosshair,
    listeners: Listeners,
    needs_paint: bool,
}

impl<I: RasterImage> ImageCanvas<I> {
    /// Creates an empty canvas; the widget size arrives with the first
    /// [`InputHandler::resize`].
    #[must_use]
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            crosshair: Crosshair::new(config.crosshair),
            config,
            image: None,
            viewport: ImageViewport::new(Size::ZERO),
            drag: PanDrag::new(),
            cursor_icon: CursorIcon::Default,
            overlays: OverlayStore::new(),
            listeners: Listeners::new(),
            needs_paint: true,
        }
    }

    /// Replaces the displayed image.
    ///
    /// The view scale and offset are kept. Setting the first non‑empty image
    /// emits [`CanvasEvent::LayoutInvalidated`] with the new preferred size.
    pub fn set_image(&mut self, image: Option<I>) {
        let had_image = self.viewport.has_image();
        let size = image.as_ref().filter(|img| !img.is_empty()).map(|img| img.size());
        self.image = image;
        self.viewport.set_image_size(size);
        if !had_image && size.is_some() {
            self.emit(CanvasEvent::LayoutInvalidated(self.size_hint()));
        }
        self.request_paint();
    }

    /// Sets the view offset in viewport pixels.
    pub fn set_view_offset(&mut self, x: f64, y: f64) {
        if self.viewport.set_view_offset(Vec2::new(x, y)) {
            self.request_paint();
        }
    }

    /// Sets the zoom factor, keeping the current offset.
    pub fn set_zoom_factor(&mut self, zoom: f64) {
        if self.viewport.set_zoom_factor(zoom) {
            self.zoom_changed();
        }
    }

    /// Zooms to `target_zoom`, keeping the image point under
    /// `(screen_x, screen_y)` in place.
    pub fn zoom_at(&mut self, screen_x: f64, screen_y: f64, target_zoom: f64) {
        if self.viewport.zoom_at(Point::new(screen_x, screen_y), target_zoom) {
            self.zoom_changed();
        }
    }

    /// Centers the image and scales it to fill the widget on one axis.
    ///
    /// The transform is always rebuilt; `refresh` only controls whether a
    /// repaint is requested.
    pub fn fit_content(&mut self, refresh: bool) {
        if self.viewport.fit_content() {
            self.emit(CanvasEvent::ZoomChanged(self.viewport.zoom()));
            if refresh {
                self.request_paint();
            }
        }
    }

    /// Adds a dot at image position `(x, y)`.
    pub fn add_dot(&mut self, x: f64, y: f64, r: u8, g: u8, b: u8) {
        self.overlays.add_dot(Point::new(x, y), Color::from_rgb8(r, g, b));
        self.request_paint();
    }

    /// Adds a line from `(x0, y0)` to `(x1, y1)` in image space.
    pub fn add_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, r: u8, g: u8, b: u8) {
        self.overlays
            .add_line(Line::new((x0, y0), (x1, y1)), Color::from_rgb8(r, g, b));
        self.request_paint();
    }

    /// Adds a text label with its origin at image position `(x, y)`.
    pub fn add_text(&mut self, x: f64, y: f64, r: u8, g: u8, b: u8, text: impl Into<String>) {
        self.overlays
            .add_text(Point::new(x, y), Color::from_rgb8(r, g, b), text);
        self.request_paint();
    }

    /// Removes all dots, lines and labels.
    pub fn clear(&mut self) {
        self.overlays.clear();
        self.request_paint();
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.viewport.zoom()
    }

    /// The image handed to [`ImageCanvas::set_image`], if any.
    #[must_use]
    pub fn image(&self) -> Option<&I> {
        self.image.as_ref()
    }

    /// Forward transform (image → viewport).
    #[must_use]
    pub fn image_to_viewport(&self) -> Affine {
        self.viewport.image_to_viewport()
    }

    /// Inverse transform (viewport → image).
    #[must_use]
    pub fn viewport_to_image(&self) -> Affine {
        self.viewport.viewport_to_image()
    }

    /// Both transforms as one consistent pair.
    #[must_use]
    pub fn transform(&self) -> ImageTransform {
        self.viewport.transform()
    }

    /// The underlying view model.
    #[must_use]
    pub fn viewport(&self) -> &ImageViewport {
        &self.viewport
    }

    /// Preferred widget size: the image's pixel size, or the configured
    /// fallback without an image.
    #[must_use]
    pub fn size_hint(&self) -> Size {
        self.viewport.image_size().unwrap_or(self.config.fallback_size)
    }

    /// Cursor glyph the host should show.
    #[must_use]
    pub fn cursor_icon(&self) -> CursorIcon {
        self.cursor_icon
    }

    /// Returns `true` while a pan drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Crosshair through the last cursor position.
    #[must_use]
    pub fn crosshair(&self) -> &Crosshair {
        &self.crosshair
    }

    /// Stored annotations.
    #[must_use]
    pub fn overlays(&self) -> &OverlayStore {
        &self.overlays
    }

    /// Configuration the canvas was built with.
    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Returns `true` if something changed since the last
    /// [`ImageCanvas::take_needs_paint`].
    #[must_use]
    pub fn needs_paint(&self) -> bool {
        self.needs_paint
    }

    /// Returns and resets the repaint request flag.
    pub fn take_needs_paint(&mut self) -> bool {
        core::mem::take(&mut self.needs_paint)
    }

    /// Registers an event listener.
    pub fn subscribe(&mut self, callback: impl FnMut(&CanvasEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(callback)
    }

    /// Removes an event listener.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn displayed_image(&self) -> Option<&I> {
        self.image.as_ref().filter(|_| self.viewport.has_image())
    }

    fn zoom_changed(&mut self) {
        self.emit(CanvasEvent::ZoomChanged(self.viewport.zoom()));
        self.request_paint();
    }

    fn emit(&mut self, event: CanvasEvent) {
        self.listeners.emit(&event);
    }

    fn request_paint(&mut self) {
        self.needs_paint = true;
    }
}

impl<I: RasterImage> Default for ImageCanvas<I> {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl<I: RasterImage> InputHandler for ImageCanvas<I> {
    fn pointer_down(&mut self, button: PointerButton, pos: Point) -> EventResult {
        match self.drag.press(button, pos, self.cursor_icon) {
            PressOutcome::Started { icon } => {
                self.cursor_icon = icon;
                EventResult::Handled
            }
            PressOutcome::Consumed => EventResult::Handled,
            PressOutcome::Ignored => EventResult::Ignored,
        }
    }

    fn pointer_move(&mut self, pos: Point) -> EventResult {
        self.crosshair.update(pos, self.viewport.widget_size());

        let probe = probe_pixel(
            self.displayed_image(),
            &self.viewport.transform(),
            pos,
            self.config.invalid_color,
        );
        self.emit(CanvasEvent::CursorPositionChanged(probe));

        if let Some(delta) = self.drag.motion(pos) {
            self.viewport.pan_by(delta);
        }
        self.request_paint();
        EventResult::Handled
    }

    fn pointer_up(&mut self, button: PointerButton, pos: Point) -> EventResult {
        if let Some(release) = self.drag.release(pos) {
            self.viewport.pan_by(release.delta);
            self.cursor_icon = release.restore_icon;
            self.request_paint();
            return EventResult::Handled;
        }
        match button {
            PointerButton::Primary | PointerButton::Secondary | PointerButton::Auxiliary => {
                EventResult::Handled
            }
            PointerButton::Other(_) => EventResult::Ignored,
        }
    }

    fn wheel(&mut self, pos: Point, delta: WheelDelta) -> EventResult {
        let target = self.viewport.zoom() * self.config.wheel.zoom_factor(delta);
        self.zoom_at(pos.x, pos.y, target);
        // Let the host keep propagating the wheel, e.g. to a scroll area.
        EventResult::Ignored
    }

    fn resize(&mut self, size: Size) {
        self.viewport.set_widget_size(size);
        self.fit_content(true);
        self.request_paint();
    }
}

impl<I: RasterImage> Paintable for ImageCanvas<I> {
    fn paint(&self, painter: &mut dyn Painter) {
        painter.paint(PaintOp::FillRect {
            rect: Rect::from_origin_size(Point::ORIGIN, self.viewport.widget_size()),
            color: self.config.background,
        });

        if self.displayed_image().is_none() {
            return;
        }

        let t = self.viewport.image_to_viewport();
        painter.paint(PaintOp::DrawImage { transform: t });

        for annotation in self.overlays.iter() {
            let op = match annotation {
                Annotation::Dot(dot) => PaintOp::StrokeCircle {
                    circle: Circle::new(t * dot.at, self.config.dot_radius),
                    color: dot.color,
                },
                Annotation::Segment(seg) => PaintOp::StrokeLine {
                    line: Line::new(t * seg.line.p0, t * seg.line.p1),
                    color: seg.color,
                },
                Annotation::Label(label) => PaintOp::DrawText {
                    origin: t * label.at,
                    text: label.text.clone(),
                    color: label.color,
                },
            };
            painter.paint(op);
        }

        for line in self.crosshair.lines() {
            painter.paint(PaintOp::StrokeLine {
                line,
                color: self.crosshair.color,
            });
        }
    }
}
