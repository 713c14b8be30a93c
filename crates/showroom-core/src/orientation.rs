//! Model yaw stepping

use std::f32::consts::TAU;

/// Yaw applied to the model every rendered frame (radians)
pub const YAW_STEP_PER_FRAME: f32 = -0.01;

/// Rotation of the showcased model about the vertical axis.
///
/// The angle is left unbounded; quaternion construction wraps it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ModelOrientation {
    pub yaw: f32,
}

impl ModelOrientation {
    pub fn new(yaw: f32) -> Self {
        Self { yaw }
    }

    /// Orientation for the next frame
    pub fn step(self) -> Self {
        Self {
            yaw: self.yaw + YAW_STEP_PER_FRAME,
        }
    }

    /// Orientation after `frames` steps from this one
    pub fn after_frames(self, frames: u32) -> Self {
        Self {
            yaw: self.yaw + YAW_STEP_PER_FRAME * frames as f32,
        }
    }

    /// Yaw folded into `[0, TAU)`, useful for display and comparisons
    pub fn wrapped(self) -> f32 {
        self.yaw.rem_euclid(TAU)
    }
}
