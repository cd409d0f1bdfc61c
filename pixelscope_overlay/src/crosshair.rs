// Copyright 2025 the Pixelscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Line, Point, Size};
use peniko::Color;

/// Full‑width / full‑height lines through the cursor, in viewport space.
///
/// The crosshair is not an annotation: it follows the live cursor and is
/// recomputed on every pointer move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crosshair {
    /// Line spanning the widget width at the cursor's `y`.
    pub horizontal: Line,
    /// Line spanning the widget height at the cursor's `x`.
    pub vertical: Line,
    /// Stroke color for both lines.
    pub color: Color,
}

impl Crosshair {
    /// Creates a crosshair whose lines are collapsed at the origin.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            horizontal: Line::new(Point::ORIGIN, Point::ORIGIN),
            vertical: Line::new(Point::ORIGIN, Point::ORIGIN),
            color,
        }
    }

    /// Moves both lines through `cursor` across a widget of size `widget`.
    pub fn update(&mut self, cursor: Point, widget: Size) {
        self.horizontal = Line::new((0.0, cursor.y), (widget.width, cursor.y));
        self.vertical = Line::new((cursor.x, 0.0), (cursor.x, widget.height));
    }

    /// Both lines, horizontal first.
    #[must_use]
    pub fn lines(&self) -> [Line; 2] {
        [self.horizontal, self.vertical]
    }
}
