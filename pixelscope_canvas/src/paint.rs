// Copyright 2025 the Pixelscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint output: what the host should draw and where.
//!
//! The canvas decides the geometry of a frame and hands it to a [`Painter`]
//! one [`PaintOp`] at a time. The host implements [`Painter`] on top of its
//! own drawing API and decides how each op is rasterized (antialiasing,
//! image sampling, font choice).

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, Circle, Line, Point, Rect};
use peniko::Color;

/// One drawing command, in viewport coordinates unless noted.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    /// Fill `rect` with a solid color.
    FillRect {
        /// Area to fill.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Draw the current image with `transform` mapping image pixels into
    /// the viewport. Pixels should be sampled nearest‑neighbor.
    DrawImage {
        /// Image → viewport transform.
        transform: Affine,
    },
    /// Stroke the outline of a circle.
    StrokeCircle {
        /// Circle to stroke.
        circle: Circle,
        /// Stroke color.
        color: Color,
    },
    /// Stroke a line segment.
    StrokeLine {
        /// Segment to stroke.
        line: Line,
        /// Stroke color.
        color: Color,
    },
    /// Draw a run of text with its baseline origin at `origin`.
    DrawText {
        /// Baseline origin.
        origin: Point,
        /// Text to draw.
        text: String,
        /// Text color.
        color: Color,
    },
}

/// Consumer of paint ops, implemented by the host.
pub trait Painter {
    /// Draws a single op.
    fn paint(&mut self, op: PaintOp);
}

/// Something that can describe a frame to a [`Painter`].
pub trait Paintable {
    /// Emits every op of the current frame, back to front.
    fn paint(&self, painter: &mut dyn Painter);
}

/// A [`Painter`] that records ops instead of drawing them.
///
/// Useful for tests and for hosts that want to replay a frame later.
#[derive(Clone, Debug, Default)]
pub struct RecordingPainter {
    ops: Vec<PaintOp>,
}

impl RecordingPainter {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded ops in paint order.
    #[must_use]
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Takes the recorded ops, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<PaintOp> {
        core::mem::take(&mut self.ops)
    }

    /// Forgets all recorded ops.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Painter for RecordingPainter {
    fn paint(&mut self, op: PaintOp) {
        self.ops.push(op);
    }
}
