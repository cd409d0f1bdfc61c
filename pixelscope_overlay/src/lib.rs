// Copyright 2025 the Pixelscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pixelscope_overlay --heading-base-level=0

//! Pixelscope Overlay: annotations anchored to image coordinates.
//!
//! [`OverlayStore`] keeps dots, line segments and text labels in **image
//! space** using the pixel‑corner convention, each with its own color. The
//! store is append‑only; [`OverlayStore::clear`] drops everything at once.
//!
//! [`Crosshair`] is kept apart from the store: it lives in **viewport space**
//! and is recomputed from the cursor on every pointer move.
//!
//! Neither type draws anything. A painter maps stored positions through the
//! current image → viewport transform and strokes them itself.
//!
//! ```rust
//! use kurbo::{Line, Point};
//! use peniko::Color;
//! use pixelscope_overlay::{Annotation, OverlayStore};
//!
//! let mut overlays = OverlayStore::new();
//! // Center of pixel (3, 4).
//! overlays.add_dot(Point::new(3.5, 4.5), Color::from_rgb8(255, 0, 0));
//! overlays.add_line(Line::new((0.0, 0.0), (10.0, 10.0)), Color::from_rgb8(0, 0, 255));
//!
//! assert_eq!(overlays.len(), 2);
//! assert!(matches!(overlays.iter().next(), Some(Annotation::Dot(_))));
//! ```

#![no_std]

extern crate alloc;

mod crosshair;
mod store;

pub use crosshair::Crosshair;
pub use store::{Annotation, Dot, Label, OverlayStore, Segment};
