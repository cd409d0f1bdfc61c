// Copyright 2025 the Pixelscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pixelscope_view2d --heading-base-level=0

//! Pixelscope View 2D: the image ↔ viewport transform and its pan/zoom model.
//!
//! This crate provides a small, headless model of a raster image shown inside
//! a resizable widget. It focuses on:
//! - The affine mapping between image space and viewport (widget) space.
//! - Zooming with a fixed anchor point, fitting, and offset panning.
//! - Keeping the forward and inverse transforms consistent at all times.
//!
//! It does **not** own the image pixels, windows, or a rendering backend.
//! Callers are expected to:
//! - Forward widget resizes and image changes into [`ImageViewport`].
//! - Use [`ImageViewport::image_to_viewport`] to draw and
//!   [`ImageViewport::viewport_to_image`] to hit‑test or probe pixels.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use pixelscope_view2d::ImageViewport;
//!
//! // 400x600 widget showing an 800x600 image.
//! let mut view = ImageViewport::new(Size::new(400.0, 600.0));
//! view.set_image_size(Some(Size::new(800.0, 600.0)));
//! view.fit_content();
//! assert_eq!(view.zoom(), 0.5);
//!
//! // Zoom in around the cursor; the pixel under it stays put.
//! let cursor = Point::new(100.0, 200.0);
//! let before = view.viewport_to_image_point(cursor);
//! view.zoom_at(cursor, 4.0);
//! let after = view.viewport_to_image_point(cursor);
//! assert!((before - after).hypot() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - The transform is a uniform scale plus translation; there is no rotation.
//! - The image is scaled about its own center and re‑centered in the widget,
//!   then shifted by the view offset.
//! - Coordinates use the pixel‑corner convention: `(0, 0)` is the top‑left
//!   corner of the top‑left pixel, and pixel `(x, y)` has its center at
//!   `(x + 0.5, y + 0.5)`.
//! - Degenerate inputs (zero scale, a widget with no area) never produce a
//!   transform; the previous one is kept.
//!
//! This crate is `no_std`.

#![no_std]

mod transform;
mod view;

pub use transform::{ImageTransform, TransformError, recompute_transform};
pub use view::{ImageViewport, ImageViewportDebugInfo, ViewState};
