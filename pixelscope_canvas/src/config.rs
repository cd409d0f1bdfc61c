// Copyright 2025 the Pixelscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use peniko::Color;
use pixelscope_event_state::wheel::WheelConfig;

/// Appearance and input knobs for an [`ImageCanvas`](crate::ImageCanvas).
///
/// All fields have defaults matching a plain image inspector: gray
/// background, green crosshair, two‑pixel dots, `√2` zoom per wheel click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasConfig {
    /// Color painted behind the image (and alone when there is none).
    pub background: Color,
    /// Crosshair line color.
    pub crosshair: Color,
    /// Radius of annotation dots, in viewport pixels.
    pub dot_radius: f64,
    /// Preferred size reported when no image is set.
    pub fallback_size: Size,
    /// Color reported by the cursor probe off the image.
    pub invalid_color: Color,
    /// Wheel zoom step.
    pub wheel: WheelConfig,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(160, 160, 164),
            crosshair: Color::from_rgb8(0, 255, 0),
            dot_radius: 2.0,
            fallback_size: Size::new(150.0, 150.0),
            invalid_color: Color::from_rgb8(0, 0, 0),
            wheel: WheelConfig::default(),
        }
    }
}

impl CanvasConfig {
    /// Sets [`CanvasConfig::background`].
    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Sets [`CanvasConfig::crosshair`].
    #[must_use]
    pub fn with_crosshair(mut self, color: Color) -> Self {
        self.crosshair = color;
        self
    }

    /// Sets [`CanvasConfig::dot_radius`].
    #[must_use]
    pub fn with_dot_radius(mut self, radius: f64) -> Self {
        self.dot_radius = radius;
        self
    }

    /// Sets [`CanvasConfig::fallback_size`].
    #[must_use]
    pub fn with_fallback_size(mut self, size: Size) -> Self {
        self.fallback_size = size;
        self
    }

    /// Sets [`CanvasConfig::invalid_color`].
    #[must_use]
    pub fn with_invalid_color(mut self, color: Color) -> Self {
        self.invalid_color = color;
        self
    }

    /// Sets [`CanvasConfig::wheel`].
    #[must_use]
    pub fn with_wheel(mut self, wheel: WheelConfig) -> Self {
        self.wheel = wheel;
        self
    }
}
