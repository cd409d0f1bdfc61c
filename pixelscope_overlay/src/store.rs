// Copyright 2025 the Pixelscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Line, Point};
use peniko::Color;

/// A marker dot at an image‑space position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    /// Center, image space, pixel‑corner convention.
    pub at: Point,
    /// Stroke color.
    pub color: Color,
}

/// A line segment between two image‑space points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Endpoints, image space, pixel‑corner convention.
    pub line: Line,
    /// Stroke color.
    pub color: Color,
}

/// A text label anchored at an image‑space position.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// Text baseline origin, image space, pixel‑corner convention.
    pub at: Point,
    /// Text color.
    pub color: Color,
    /// Label contents.
    pub text: String,
}

/// Borrowed view of one stored annotation, as yielded by
/// [`OverlayStore::iter`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Annotation<'a> {
    /// See [`Dot`].
    Dot(&'a Dot),
    /// See [`Segment`].
    Segment(&'a Segment),
    /// See [`Label`].
    Label(&'a Label),
}

/// Append‑only collection of image‑space annotations.
///
/// Annotations are never edited in place: they are added one at a time and
/// removed all at once with [`OverlayStore::clear`]. Insertion order within
/// each kind is preserved and is the draw order.
#[derive(Clone, Debug, Default)]
pub struct OverlayStore {
    dots: Vec<Dot>,
    segments: Vec<Segment>,
    labels: Vec<Label>,
    revision: u64,
}

impl OverlayStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dot centered at `at`.
    pub fn add_dot(&mut self, at: Point, color: Color) {
        self.dots.push(Dot { at, color });
        self.bump_revision();
    }

    /// Adds a line segment.
    pub fn add_line(&mut self, line: Line, color: Color) {
        self.segments.push(Segment { line, color });
        self.bump_revision();
    }

    /// Adds a text label with its origin at `at`.
    pub fn add_text(&mut self, at: Point, color: Color, text: impl Into<String>) {
        self.labels.push(Label {
            at,
            color,
            text: text.into(),
        });
        self.bump_revision();
    }

    /// Removes every annotation.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        self.dots.clear();
        self.segments.clear();
        self.labels.clear();
        self.bump_revision();
    }

    /// Stored dots in insertion order.
    #[must_use]
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Stored line segments in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[Segment] {
        &self.segments
    }

    /// Stored labels in insertion order.
    #[must_use]
    pub fn texts(&self) -> &[Label] {
        &self.labels
    }

    /// Total number of annotations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dots.len() + self.segments.len() + self.labels.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over all annotations in draw order: dots, then lines, then
    /// labels.
    pub fn iter(&self) -> impl Iterator<Item = Annotation<'_>> + '_ {
        self.dots
            .iter()
            .map(Annotation::Dot)
            .chain(self.segments.iter().map(Annotation::Segment))
            .chain(self.labels.iter().map(Annotation::Label))
    }

    /// Returns the current revision counter.
    ///
    /// Bumped by every add and by a `clear` that removed something, so
    /// painters can tell whether cached overlay geometry is still current.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
