// Copyright 2025 the Pixelscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `powf`
use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::transform::{ImageTransform, TransformError, recompute_transform};

/// Scale and offset parameterizing the image → viewport transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Uniform zoom factor (viewport pixels per image pixel).
    pub scale: f64,
    /// Translation applied after centering, in viewport pixels.
    pub offset: Vec2,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

/// Pan/zoom view of a raster image inside a resizable widget.
///
/// `ImageViewport` owns the widget size, the size of the displayed image (if
/// any), the current [`ViewState`] and the [`ImageTransform`] derived from
/// them. Every mutation rebuilds the transform eagerly, so readers never see
/// a stale inverse.
///
/// Mutations that would make the transform singular (non‑positive scale, a
/// widget with no area) are rejected as a whole and report `false`; the last
/// good view state and transform stay in place.
#[derive(Clone, Debug)]
pub struct ImageViewport {
    widget_size: Size,
    image_size: Option<Size>,
    view: ViewState,
    transform: ImageTransform,
}

impl ImageViewport {
    /// Creates a viewport for a widget of `widget_size` with no image.
    ///
    /// - Initial zoom is `1.0`.
    /// - Initial offset is zero.
    /// - If `widget_size` has no area the transform starts out as identity.
    #[must_use]
    pub fn new(widget_size: Size) -> Self {
        let mut vp = Self {
            widget_size,
            image_size: None,
            view: ViewState::default(),
            transform: ImageTransform::IDENTITY,
        };
        vp.rebuild();
        vp
    }

    /// Returns the widget size in viewport pixels.
    #[must_use]
    pub fn widget_size(&self) -> Size {
        self.widget_size
    }

    /// Records a new widget size and rebuilds the transform.
    ///
    /// The size is always recorded. If it has no area, the previous transform
    /// stays in effect until a usable size arrives.
    pub fn set_widget_size(&mut self, size: Size) {
        self.widget_size = size;
        self.rebuild();
    }

    /// Returns the pixel size of the displayed image, if there is one.
    #[must_use]
    pub fn image_size(&self) -> Option<Size> {
        self.image_size
    }

    /// Replaces the image size (`None` when the image is removed).
    pub fn set_image_size(&mut self, size: Option<Size>) {
        self.image_size = size;
        self.rebuild();
    }

    /// Returns `true` if an image is being displayed.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image_size.is_some()
    }

    /// Returns the current scale + offset.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.view
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.view.scale
    }

    /// Returns the current view offset in viewport pixels.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.view.offset
    }

    /// Returns the current transform pair.
    #[must_use]
    pub fn transform(&self) -> ImageTransform {
        self.transform
    }

    /// Forward transform (image → viewport).
    #[must_use]
    pub fn image_to_viewport(&self) -> Affine {
        self.transform.image_to_viewport()
    }

    /// Inverse transform (viewport → image).
    #[must_use]
    pub fn viewport_to_image(&self) -> Affine {
        self.transform.viewport_to_image()
    }

    /// Converts an image‑space point into viewport coordinates.
    #[must_use]
    pub fn image_to_viewport_point(&self, pt: Point) -> Point {
        self.transform.image_to_viewport_point(pt)
    }

    /// Converts a viewport‑space point into image coordinates.
    #[must_use]
    pub fn viewport_to_image_point(&self, pt: Point) -> Point {
        self.transform.viewport_to_image_point(pt)
    }

    /// Sets the view offset.
    ///
    /// Returns `false` (and changes nothing) if the resulting transform would
    /// be singular.
    pub fn set_view_offset(&mut self, offset: Vec2) -> bool {
        self.try_apply(ViewState {
            offset,
            ..self.view
        })
    }

    /// Adds `delta` to the view offset; used by drag panning.
    pub fn pan_by(&mut self, delta: Vec2) -> bool {
        self.set_view_offset(self.view.offset + delta)
    }

    /// Sets the zoom factor, keeping the current offset.
    ///
    /// No‑op returning `false` without an image or for a scale that cannot be
    /// inverted.
    pub fn set_zoom_factor(&mut self, zoom: f64) -> bool {
        if !self.has_image() {
            return false;
        }
        self.try_apply(ViewState {
            scale: zoom,
            ..self.view
        })
    }

    /// Zooms to `target_zoom` while keeping the image point under `anchor`
    /// fixed at `anchor`.
    pub fn zoom_at(&mut self, anchor: Point, target_zoom: f64) -> bool {
        let Some(image) = self.image_size else {
            return false;
        };
        let on_image = self.viewport_to_image_point(anchor);
        let w = self.widget_size;
        let offset = Vec2::new(
            anchor.x - (0.5 * w.width - 0.5 * image.width * target_zoom) - target_zoom * on_image.x,
            anchor.y - (0.5 * w.height - 0.5 * image.height * target_zoom)
                - target_zoom * on_image.y,
        );
        self.try_apply(ViewState {
            scale: target_zoom,
            offset,
        })
    }

    /// Multiplies the zoom by `step_factor.powf(steps)` around `anchor`.
    ///
    /// This is the wheel path: each whole step changes the zoom by
    /// `step_factor`, and steps compound multiplicatively.
    pub fn zoom_by_steps(&mut self, anchor: Point, steps: f64, step_factor: f64) -> bool {
        self.zoom_at(anchor, self.view.scale * step_factor.powf(steps))
    }

    /// Centers the image and scales it so that it exactly fills the widget on
    /// at least one axis, preserving the aspect ratio.
    ///
    /// No‑op returning `false` without an image, for an image with no area or
    /// for a widget with no area.
    pub fn fit_content(&mut self) -> bool {
        let Some(image) = self.image_size else {
            return false;
        };
        if !(image.width > 0.0 && image.height > 0.0) {
            return false;
        }
        let scale = (self.widget_size.width / image.width)
            .min(self.widget_size.height / image.height);
        let applied = self.try_apply(ViewState {
            scale,
            offset: Vec2::ZERO,
        });
        if applied {
            log::debug!("fit {}x{} image at scale {scale}", image.width, image.height);
        }
        applied
    }

    /// Returns where the image lands in viewport coordinates, if one is set.
    #[must_use]
    pub fn image_rect_in_viewport(&self) -> Option<Rect> {
        let image = self.image_size?;
        Some(
            self.transform
                .image_to_viewport_rect(Rect::from_origin_size(Point::ORIGIN, image)),
        )
    }

    /// Returns the part of the image currently visible through the widget, in
    /// image coordinates.
    ///
    /// Returns `None` without an image or when the image is panned fully out
    /// of view.
    #[must_use]
    pub fn visible_image_rect(&self) -> Option<Rect> {
        let image = Rect::from_origin_size(Point::ORIGIN, self.image_size?);
        let widget = Rect::from_origin_size(Point::ORIGIN, self.widget_size);
        let visible = self.transform.viewport_to_image_rect(widget).intersect(image);
        (visible.area() > 0.0).then_some(visible)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ImageViewportDebugInfo {
        ImageViewportDebugInfo {
            widget_size: self.widget_size,
            image_size: self.image_size,
            view: self.view,
            transform: self.transform,
            visible_image_rect: self.visible_image_rect(),
        }
    }

    fn try_apply(&mut self, view: ViewState) -> bool {
        match self.build(view) {
            Ok(transform) => {
                self.view = view;
                self.transform = transform;
                true
            }
            Err(err) => {
                log::debug!("keeping previous view transform: {err}");
                false
            }
        }
    }

    fn rebuild(&mut self) {
        match self.build(self.view) {
            Ok(transform) => self.transform = transform,
            Err(err) => log::debug!("keeping previous view transform: {err}"),
        }
    }

    fn build(&self, view: ViewState) -> Result<ImageTransform, TransformError> {
        recompute_transform(view, self.widget_size, self.image_size.unwrap_or(Size::ZERO))
    }
}

/// Debug snapshot of an [`ImageViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ImageViewportDebugInfo {
    /// Widget size in viewport pixels.
    pub widget_size: Size,
    /// Image size in pixels, if an image is set.
    pub image_size: Option<Size>,
    /// Current scale + offset.
    pub view: ViewState,
    /// Transform currently in effect.
    pub transform: ImageTransform,
    /// Visible part of the image, in image coordinates.
    pub visible_image_rect: Option<Rect>,
}
