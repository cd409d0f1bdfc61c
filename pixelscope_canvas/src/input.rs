// Copyright 2025 the Pixelscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use pixelscope_event_state::PointerButton;
use pixelscope_event_state::wheel::WheelDelta;

/// Whether an input event was used.
///
/// Hosts propagate [`EventResult::Ignored`] events to the parent widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventResult {
    /// The event was consumed.
    Handled,
    /// The event should continue to the next handler.
    Ignored,
}

/// Raw input the host forwards verbatim, in viewport coordinates.
pub trait InputHandler {
    /// A pointer button went down at `pos`.
    fn pointer_down(&mut self, button: PointerButton, pos: Point) -> EventResult;

    /// The pointer moved to `pos`, with or without buttons held.
    fn pointer_move(&mut self, pos: Point) -> EventResult;

    /// A pointer button was released at `pos`.
    fn pointer_up(&mut self, button: PointerButton, pos: Point) -> EventResult;

    /// The wheel turned while the pointer was at `pos`.
    fn wheel(&mut self, pos: Point, delta: WheelDelta) -> EventResult;

    /// The widget was resized to `size`.
    fn resize(&mut self, size: Size);
}
