// Copyright 2025 the Pixelscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Affine, Point, Rect, Size};

use crate::view::ViewState;

/// Image‑space ↔ viewport‑space mapping.
///
/// Both directions are stored together and are always rebuilt as a pair by
/// [`recompute_transform`], so [`ImageTransform::viewport_to_image`] is the
/// inverse of [`ImageTransform::image_to_viewport`] for as long as the value
/// exists.
///
/// Both spaces use the pixel‑corner convention: `(0, 0)` is the top‑left
/// corner of the top‑left pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageTransform {
    image_to_viewport: Affine,
    viewport_to_image: Affine,
}

impl ImageTransform {
    /// Identity mapping in both directions.
    pub const IDENTITY: Self = Self {
        image_to_viewport: Affine::IDENTITY,
        viewport_to_image: Affine::IDENTITY,
    };

    /// Forward transform (image → viewport).
    #[must_use]
    pub fn image_to_viewport(&self) -> Affine {
        self.image_to_viewport
    }

    /// Inverse transform (viewport → image).
    #[must_use]
    pub fn viewport_to_image(&self) -> Affine {
        self.viewport_to_image
    }

    /// Maps an image‑space point into viewport coordinates.
    #[must_use]
    pub fn image_to_viewport_point(&self, pt: Point) -> Point {
        self.image_to_viewport * pt
    }

    /// Maps a viewport‑space point into image coordinates.
    #[must_use]
    pub fn viewport_to_image_point(&self, pt: Point) -> Point {
        self.viewport_to_image * pt
    }

    /// Maps an image‑space rectangle into viewport coordinates.
    ///
    /// The transform is a uniform scale plus translation, so mapping the two
    /// corners is exact.
    #[must_use]
    pub fn image_to_viewport_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.image_to_viewport * rect.origin(),
            self.image_to_viewport * Point::new(rect.x1, rect.y1),
        )
    }

    /// Maps a viewport‑space rectangle into image coordinates.
    #[must_use]
    pub fn viewport_to_image_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.viewport_to_image * rect.origin(),
            self.viewport_to_image * Point::new(rect.x1, rect.y1),
        )
    }
}

impl Default for ImageTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Reason a transform could not be built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformError {
    /// The scale is zero, negative, or not finite.
    InvalidScale(f64),
    /// The widget has no area to map into.
    EmptyViewport(Size),
    /// The offset, or the translation derived from it, is NaN or infinite.
    NonFinite(ViewState),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale(scale) => {
                write!(f, "view scale {scale} does not produce an invertible transform")
            }
            Self::EmptyViewport(size) => {
                write!(f, "viewport {}x{} has no area", size.width, size.height)
            }
            Self::NonFinite(view) => write!(
                f,
                "view scale {} with offset ({}, {}) does not produce a finite transform",
                view.scale, view.offset.x, view.offset.y
            ),
        }
    }
}

impl core::error::Error for TransformError {}

/// Builds the image ↔ viewport transform pair for the given inputs.
///
/// The image is scaled about its own center, translated by the view offset
/// and re‑centered in the widget:
///
/// ```text
/// x' = s * x + (ox + W / 2 - Iw * s / 2)
/// y' = s * y + (oy + H / 2 - Ih * s / 2)
/// ```
///
/// `image` is [`Size::ZERO`] when no image is loaded.
///
/// # Errors
///
/// Returns [`TransformError::InvalidScale`] when the scale is not a positive
/// finite number and [`TransformError::EmptyViewport`] when the widget has
/// zero (or negative) width or height, and [`TransformError::NonFinite`]
/// when the offset or any resulting coefficient is NaN or infinite (for
/// example a scale so large that `Iw * s` overflows).
///
/// # Example
///
/// ```rust
/// use kurbo::{Point, Size, Vec2};
/// use pixelscope_view2d::{ViewState, recompute_transform};
///
/// let view = ViewState { scale: 2.0, offset: Vec2::ZERO };
/// let t = recompute_transform(view, Size::new(100.0, 100.0), Size::new(10.0, 10.0)).unwrap();
///
/// // The image center lands on the widget center.
/// assert_eq!(t.image_to_viewport_point(Point::new(5.0, 5.0)), Point::new(50.0, 50.0));
/// ```
pub fn recompute_transform(
    view: ViewState,
    widget: Size,
    image: Size,
) -> Result<ImageTransform, TransformError> {
    let s = view.scale;
    if !s.is_finite() || s <= 0.0 {
        return Err(TransformError::InvalidScale(s));
    }
    if !(widget.width > 0.0 && widget.height > 0.0) {
        return Err(TransformError::EmptyViewport(widget));
    }

    let tx = view.offset.x + 0.5 * widget.width - 0.5 * image.width * s;
    let ty = view.offset.y + 0.5 * widget.height - 0.5 * image.height * s;
    let inv = 1.0 / s;
    if ![tx, ty, inv, tx * inv, ty * inv].iter().all(|c| c.is_finite()) {
        return Err(TransformError::NonFinite(view));
    }

    Ok(ImageTransform {
        image_to_viewport: Affine::new([s, 0.0, 0.0, s, tx, ty]),
        viewport_to_image: Affine::new([inv, 0.0, 0.0, inv, -tx * inv, -ty * inv]),
    })
}
