// Copyright 2025 the Pixelscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel probing under the cursor.

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `trunc`
use kurbo::Point;
use peniko::Color;
use pixelscope_view2d::ImageTransform;

use crate::image::RasterImage;

/// What lies under the cursor, reported on every pointer move.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorProbe {
    /// Cursor position in image space, `(0, 0)` at the image's top‑left
    /// corner. Reported even when it falls outside the image.
    pub position: Point,
    /// `true` if `position` lies on a pixel of the image.
    pub valid: bool,
    /// Channel values of the pixel, e.g. `R:12,G:34,B:56`; empty when invalid.
    pub description: String,
    /// Displayed color of the pixel, or the sentinel color when invalid.
    pub color: Color,
}

/// Returns `true` if image‑space `pos` lies on a pixel of a `width` ×
/// `height` image.
///
/// Pixel `(x, y)` covers `[x, x + 1) × [y, y + 1)`, so the far edges are
/// outside the image.
#[must_use]
pub fn pixel_in_bounds(pos: Point, width: u32, height: u32) -> bool {
    pos.x >= 0.0 && pos.y >= 0.0 && pos.x < f64::from(width) && pos.y < f64::from(height)
}

/// Maps `screen_pos` through `transform` and samples `image` there.
///
/// `image` is `None` when nothing is displayed; the probe is then always
/// invalid. `invalid_color` is reported whenever no pixel was sampled.
pub fn probe_pixel<I: RasterImage + ?Sized>(
    image: Option<&I>,
    transform: &ImageTransform,
    screen_pos: Point,
    invalid_color: Color,
) -> CursorProbe {
    let position = transform.viewport_to_image_point(screen_pos);
    let sample = image
        .filter(|img| pixel_in_bounds(position, img.width(), img.height()))
        .and_then(|img| {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "position was bounds-checked against the image size"
            )]
            let (x, y) = (position.x.trunc() as u32, position.y.trunc() as u32);
            img.pixel(x, y)
        });

    match sample {
        Some(px) => {
            let description = format!("R:{},G:{},B:{}", px.r, px.g, px.b);
            log::trace!("probe ({}, {}): {description}", position.x, position.y);
            CursorProbe {
                position,
                valid: true,
                description,
                color: Color::from_rgb8(px.r, px.g, px.b),
            }
        }
        None => CursorProbe {
            position,
            valid: false,
            description: String::new(),
            color: invalid_color,
        },
    }
}
