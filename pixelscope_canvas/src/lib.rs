// Copyright 2025 the Pixelscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pixelscope_canvas --heading-base-level=0

//! Pixelscope Canvas: a headless image‑inspection canvas.
//!
//! [`ImageCanvas`] combines the pieces of the other `pixelscope_*` crates
//! into the component a host widget embeds:
//!
//! - a pan/zoom [`ImageViewport`](pixelscope_view2d::ImageViewport),
//! - drag panning and wheel zoom from `pixelscope_event_state`,
//! - annotations and a crosshair from `pixelscope_overlay`,
//! - pixel probing under the cursor ([`probe`]).
//!
//! # Position in the stack
//!
//! The canvas computes *what* to draw and *where*; the host owns the window,
//! decodes images, and decides *how* to draw:
//!
//! - The host translates native input into [`InputHandler`] calls.
//! - It paints by passing its own [`Painter`] to [`Paintable::paint`].
//! - It subscribes to [`CanvasEvent`]s for cursor and zoom feedback.
//!
//! Everything runs synchronously on the caller's thread; each call finishes
//! before the next one starts, and events are delivered in call order.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use pixelscope_canvas::{
//!     CanvasEvent, ImageCanvas, InputHandler, Paintable, RecordingPainter, RgbImage,
//! };
//!
//! let mut canvas = ImageCanvas::default();
//! canvas.set_image(Some(RgbImage::from_fn(800, 600, |x, _| [(x % 256) as u8, 0, 0])));
//!
//! // The host forwards its widget geometry; the image is fit to it.
//! canvas.resize(Size::new(400.0, 600.0));
//! assert_eq!(canvas.zoom_factor(), 0.5);
//!
//! canvas.subscribe(|event| {
//!     if let CanvasEvent::CursorPositionChanged(probe) = event {
//!         assert!(probe.valid);
//!         assert_eq!(probe.position, Point::new(200.0, 300.0));
//!     }
//! });
//! canvas.pointer_move(Point::new(100.0, 300.0));
//!
//! // Pixel (10, 20) gets a red dot.
//! canvas.add_dot(10.5, 20.5, 255, 0, 0);
//!
//! let mut painter = RecordingPainter::new();
//! canvas.paint(&mut painter);
//! assert!(!painter.ops().is_empty());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod canvas;
mod config;
pub mod event;
pub mod image;
mod input;
pub mod paint;
pub mod probe;

pub use canvas::ImageCanvas;
pub use config::CanvasConfig;
pub use event::{CanvasEvent, ListenerId};
pub use image::{RasterImage, RgbImage};
pub use input::{EventResult, InputHandler};
pub use paint::{PaintOp, Paintable, Painter, RecordingPainter};
pub use probe::CursorProbe;

pub use pixelscope_event_state::wheel::{WheelConfig, WheelDelta};
pub use pixelscope_event_state::{CursorIcon, PointerButton};
