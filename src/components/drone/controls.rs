use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// The four normalized control inputs driving the flight model for one tick.
///
/// Each axis lives in [-1, 1]:
/// * `forward` - positive moves along the nose.
/// * `right` - positive moves toward the drone's right.
/// * `yaw` - positive turns clockwise seen from above.
/// * `vertical` - positive climbs (and builds take-off throttle on the ground).
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlAxes {
    pub forward: f64,
    pub right: f64,
    pub yaw: f64,
    pub vertical: f64,
}

impl ControlAxes {
    pub fn new(forward: f64, right: f64, yaw: f64, vertical: f64) -> Self {
        Self {
            forward,
            right,
            yaw,
            vertical,
        }
    }

    /// All axes centred.
    pub fn neutral() -> Self {
        Self::default()
    }

    pub fn vertical(vertical: f64) -> Self {
        Self {
            vertical,
            ..Self::default()
        }
    }

    /// Copy with every axis clamped to [-1, 1].
    pub fn clamped(&self) -> Self {
        Self {
            forward: self.forward.clamp(-1.0, 1.0),
            right: self.right.clamp(-1.0, 1.0),
            yaw: self.yaw.clamp(-1.0, 1.0),
            vertical: self.vertical.clamp(-1.0, 1.0),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.forward.is_finite()
            && self.right.is_finite()
            && self.yaw.is_finite()
            && self.vertical.is_finite()
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::neutral()
    }
}

/// Anything that can hand the flight model a control sample for the next tick.
pub trait ControlSource {
    fn control_axes(&mut self) -> ControlAxes;
}

impl ControlSource for ControlAxes {
    fn control_axes(&mut self) -> ControlAxes {
        *self
    }
}
