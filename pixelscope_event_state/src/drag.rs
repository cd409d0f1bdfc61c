// Copyright 2025 the Pixelscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag‑to‑pan state machine.
//!
//! ## Usage
//!
//! 1) Forward a primary press to [`PanDrag::press`]; on
//!    [`PressOutcome::Started`] show the returned cursor icon.
//! 2) On each move, call [`PanDrag::motion`] and add the returned delta to
//!    the view offset.
//! 3) On release, call [`PanDrag::release`], apply the final delta and
//!    restore the returned cursor icon.
//!
//! Deltas are measured from the last recorded position, so the summed pan is
//! the same however many move events the host delivers.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use pixelscope_event_state::{CursorIcon, PointerButton};
//! use pixelscope_event_state::drag::{PanDrag, PressOutcome};
//!
//! let mut drag = PanDrag::new();
//! let outcome = drag.press(PointerButton::Primary, Point::new(10.0, 10.0), CursorIcon::Default);
//! assert_eq!(outcome, PressOutcome::Started { icon: CursorIcon::Grabbing });
//!
//! assert_eq!(drag.motion(Point::new(15.0, 12.0)), Some(Vec2::new(5.0, 2.0)));
//!
//! let release = drag.release(Point::new(20.0, 20.0)).unwrap();
//! assert_eq!(release.delta, Vec2::new(5.0, 8.0));
//! assert_eq!(release.restore_icon, CursorIcon::Default);
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

use crate::pointer::{CursorIcon, PointerButton};

/// Positions tracked for one press → release drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Where the press happened.
    pub start_pos: Point,
    /// Last position a delta was measured to.
    pub last_pos: Point,
}

impl DragSession {
    /// Starts a session at `pos`.
    #[must_use]
    pub fn new(pos: Point) -> Self {
        Self {
            start_pos: pos,
            last_pos: pos,
        }
    }

    /// Returns the movement since the last update and records `pos`.
    pub fn advance(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.last_pos;
        self.last_pos = pos;
        delta
    }

    /// Total offset from the press position.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Vec2 {
        pos - self.start_pos
    }
}

/// Result of forwarding a press to [`PanDrag::press`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// A drag started; the host should show `icon`.
    Started {
        /// Cursor to display while dragging.
        icon: CursorIcon,
    },
    /// A drag is already in progress; the press is swallowed.
    Consumed,
    /// The press does not concern panning.
    Ignored,
}

/// Final step of a drag, returned by [`PanDrag::release`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanRelease {
    /// Movement since the last motion event.
    pub delta: Vec2,
    /// Cursor that was shown before the drag started.
    pub restore_icon: CursorIcon,
}

/// Idle / dragging state machine for panning with the primary button.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanDrag {
    session: Option<DragSession>,
    saved_icon: CursorIcon,
}

impl PanDrag {
    /// Creates an idle state machine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Handles a button press at `pos`.
    ///
    /// `current_icon` is remembered and handed back on release.
    pub fn press(
        &mut self,
        button: PointerButton,
        pos: Point,
        current_icon: CursorIcon,
    ) -> PressOutcome {
        if self.session.is_some() {
            return PressOutcome::Consumed;
        }
        if button != PointerButton::Primary {
            return PressOutcome::Ignored;
        }
        log::debug!("pan drag started at ({}, {})", pos.x, pos.y);
        self.session = Some(DragSession::new(pos));
        self.saved_icon = current_icon;
        PressOutcome::Started {
            icon: CursorIcon::Grabbing,
        }
    }

    /// Handles pointer motion; returns the pan delta while dragging.
    pub fn motion(&mut self, pos: Point) -> Option<Vec2> {
        self.session.as_mut().map(|s| s.advance(pos))
    }

    /// Ends the drag, whichever button was released.
    ///
    /// Returns `None` if no drag was active.
    pub fn release(&mut self, pos: Point) -> Option<PanRelease> {
        let mut session = self.session.take()?;
        let delta = session.advance(pos);
        let total = session.total_offset(pos);
        log::debug!("pan drag finished, total offset ({}, {})", total.x, total.y);
        Some(PanRelease {
            delta,
            restore_icon: self.saved_icon,
        })
    }

    /// Drops an active drag without reporting a final delta.
    ///
    /// Returns the cursor to restore if a drag was active.
    pub fn cancel(&mut self) -> Option<CursorIcon> {
        self.session.take().map(|_| self.saved_icon)
    }
}
