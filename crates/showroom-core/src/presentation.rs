//! Drag-to-rotate presentation rig
//!
//! The rig wraps the model and turns it in response to pointer drags anywhere
//! on the canvas. Horizontal drags spin it freely (azimuth); vertical drags
//! tilt it (polar) within a clamped range.

use std::f32::consts::{FRAC_PI_4, PI};

/// Tuning for pointer drags
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSettings {
    /// Multiplier applied to a full-viewport drag of half a turn
    pub speed: f32,
    /// Allowed polar (tilt) range in radians, `min <= max`
    pub polar_min: f32,
    pub polar_max: f32,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self {
            speed: 2.0,
            polar_min: 0.0,
            polar_max: FRAC_PI_4,
        }
    }
}

/// Current rotation of the presentation rig
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PresentationRotation {
    /// Tilt about the horizontal axis (radians)
    pub polar: f32,
    /// Spin about the vertical axis (radians), unconstrained
    pub azimuth: f32,
}

impl PresentationRotation {
    /// Apply a pointer drag of `delta` pixels on a viewport of `viewport` pixels
    pub fn drag(&mut self, delta: [f32; 2], viewport: [f32; 2], settings: &DragSettings) {
        let [width, height] = viewport;
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        self.azimuth += delta[0] / width * PI * settings.speed;
        self.polar = (self.polar + delta[1] / height * PI * settings.speed)
            .clamp(settings.polar_min, settings.polar_max);
    }
}
