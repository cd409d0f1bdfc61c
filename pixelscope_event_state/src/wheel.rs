// Copyright 2025 the Pixelscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel quantization: turn raw wheel deltas into zoom factors.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `powf`

/// Vertical wheel movement as reported by the host toolkit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelDelta {
    /// Eighths of a degree; a typical mouse click reports `120`.
    AngleEighths(i32),
    /// Degrees of wheel rotation.
    Degrees(f64),
    /// Whole or fractional wheel steps.
    Steps(f64),
}

/// How much one wheel step zooms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelConfig {
    /// Wheel rotation that makes up one step.
    pub degrees_per_step: f64,
    /// Zoom multiplier applied per step.
    pub step_factor: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            degrees_per_step: 15.0,
            step_factor: core::f64::consts::SQRT_2,
        }
    }
}

impl WheelConfig {
    /// Signed number of steps in `delta`; positive rolls away from the user.
    #[must_use]
    pub fn steps(&self, delta: WheelDelta) -> f64 {
        match delta {
            WheelDelta::AngleEighths(eighths) => f64::from(eighths) / 8.0 / self.degrees_per_step,
            WheelDelta::Degrees(degrees) => degrees / self.degrees_per_step,
            WheelDelta::Steps(steps) => steps,
        }
    }

    /// Zoom multiplier for `delta`: `step_factor` raised to the step count.
    #[must_use]
    pub fn zoom_factor(&self, delta: WheelDelta) -> f64 {
        self.step_factor.powf(self.steps(delta))
    }
}

#[cfg(test)]
mod tests {
    use super::{WheelConfig, WheelDelta};

    #[test]
    fn one_click_is_one_step() {
        let wheel = WheelConfig::default();
        assert_eq!(wheel.steps(WheelDelta::AngleEighths(120)), 1.0);
        assert_eq!(wheel.steps(WheelDelta::Degrees(-15.0)), -1.0);
        assert_eq!(wheel.steps(WheelDelta::Steps(2.5)), 2.5);
    }

    #[test]
    fn factor_is_sqrt_two_per_step() {
        let wheel = WheelConfig::default();
        let one = wheel.zoom_factor(WheelDelta::AngleEighths(120));
        assert!((one - 2.0_f64.sqrt()).abs() < 1e-15);

        let two = wheel.zoom_factor(WheelDelta::AngleEighths(240));
        assert!((two - 2.0).abs() < 1e-12);
        assert!((two - one * one).abs() < 1e-12);

        let back = wheel.zoom_factor(WheelDelta::AngleEighths(-120));
        assert!((one * back - 1.0).abs() < 1e-12);
    }

    #[test]
    fn custom_step() {
        let wheel = WheelConfig {
            degrees_per_step: 30.0,
            step_factor: 2.0,
        };
        assert_eq!(wheel.zoom_factor(WheelDelta::Degrees(60.0)), 4.0);
    }
}
