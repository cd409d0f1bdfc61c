// Copyright 2025 the Pixelscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pixelscope_event_state --heading-base-level=0

//! Pixelscope Event State: pointer interaction state for an image canvas.
//!
//! This crate provides small state machines for the interactions that need
//! state across several input events:
//!
//! - [`drag`]: press → move → release panning with incremental deltas and
//!   cursor‑icon bookkeeping
//! - [`wheel`]: quantize wheel deltas into steps and zoom factors
//!
//! Plus the toolkit‑neutral [`PointerButton`] and [`CursorIcon`] types the
//! host translates its native events into.
//!
//! None of these types touch the view directly. They return deltas, factors
//! and icons; the caller applies them to its view model.
//!
//! ### Drag panning
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use pixelscope_event_state::{CursorIcon, PointerButton};
//! use pixelscope_event_state::drag::PanDrag;
//!
//! let mut drag = PanDrag::new();
//! drag.press(PointerButton::Primary, Point::new(0.0, 0.0), CursorIcon::Default);
//! let delta = drag.motion(Point::new(4.0, -2.0));
//! assert_eq!(delta, Some(Vec2::new(4.0, -2.0)));
//! ```
//!
//! ### Wheel zoom
//!
//! ```rust
//! use pixelscope_event_state::wheel::{WheelConfig, WheelDelta};
//!
//! let wheel = WheelConfig::default();
//! // Two clicks away from the user double the zoom.
//! let factor = wheel.zoom_factor(WheelDelta::AngleEighths(240));
//! assert!((factor - 2.0).abs() < 1e-12);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
mod pointer;
pub mod wheel;

pub use pointer::{CursorIcon, PointerButton};
