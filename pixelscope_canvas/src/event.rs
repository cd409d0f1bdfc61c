// Copyright 2025 the Pixelscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications sent from the canvas to its host.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Size;

use crate::probe::CursorProbe;

/// Something the host may want to react to.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasEvent {
    /// The cursor moved; sent on every pointer move, dragging or not.
    CursorPositionChanged(CursorProbe),
    /// The zoom factor changed through a setter, anchored zoom or fit.
    ZoomChanged(f64),
    /// The first non‑empty image was set; the preferred size is now this.
    LayoutInvalidated(Size),
}

/// Handle returned by [`Listeners::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback = Box<dyn FnMut(&CanvasEvent)>;

/// Registry of event callbacks.
///
/// Events are delivered synchronously, in the order they are emitted, to
/// every listener in subscription order. Nothing is batched or coalesced.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<(ListenerId, Callback)>,
    next_id: u64,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl Listeners {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` and returns a handle for removing it.
    pub fn subscribe(&mut self, callback: impl FnMut(&CanvasEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Removes a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nobody is listening.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Delivers `event` to every listener.
    pub fn emit(&mut self, event: &CanvasEvent) {
        for (_, callback) in &mut self.entries {
            callback(event);
        }
    }
}
