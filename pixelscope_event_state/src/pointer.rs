// Copyright 2025 the Pixelscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toolkit‑neutral pointer vocabulary.

/// Mouse / pointer button that triggered a press or release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left button on a right‑handed mouse, primary touch contact.
    Primary,
    /// Right button.
    Secondary,
    /// Middle button / wheel press.
    Auxiliary,
    /// Any other button, by toolkit index.
    Other(u16),
}

/// Cursor glyph the host should display over the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CursorIcon {
    /// Platform default arrow.
    #[default]
    Default,
    /// Thin crosshair.
    Crosshair,
    /// Open hand, content can be grabbed.
    Grab,
    /// Closed hand, content is being dragged.
    Grabbing,
}
