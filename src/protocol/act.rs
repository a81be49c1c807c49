use serde::{Deserialize, Serialize};

use crate::{
    components::ControlAxes,
    protocol::{ControlEcho, ControlMessage, ProtocolError},
};

/// Converts a network control message into canonical control axes.
pub trait ToControls {
    fn to_controls(&self, message: &ControlMessage) -> Result<ControlAxes, ProtocolError>;
}

/// Range of the `thrust` field on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThrustRange {
    /// [0, 1] with 0.5 holding altitude.
    #[default]
    Unipolar,
    /// [-1, 1] with 0 holding altitude.
    Bipolar,
}

impl ThrustRange {
    fn to_vertical(self, thrust: f64) -> f64 {
        match self {
            ThrustRange::Unipolar => thrust * 2.0 - 1.0,
            ThrustRange::Bipolar => thrust,
        }
    }

    fn from_vertical(self, vertical: f64) -> f64 {
        match self {
            ThrustRange::Unipolar => (vertical + 1.0) * 0.5,
            ThrustRange::Bipolar => vertical,
        }
    }
}

/// Sign and range conventions of a control client.
///
/// By default negative pitch flies forward, positive roll flies right and
/// positive yaw turns right. `invert_pitch` makes positive pitch fly forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionConvention {
    pub thrust: ThrustRange,
    pub invert_pitch: bool,
}

impl ActionConvention {
    fn pitch_sign(&self) -> f64 {
        if self.invert_pitch {
            1.0
        } else {
            -1.0
        }
    }

    /// Expresses applied axes in this convention, the inverse of `to_controls`.
    pub fn from_axes(&self, axes: &ControlAxes) -> ControlEcho {
        ControlEcho {
            thrust: self.thrust.from_vertical(axes.vertical),
            pitch: self.pitch_sign() * axes.forward,
            roll: axes.right,
            yaw: axes.yaw,
        }
    }
}

fn finite(value: Option<f64>, field: &'static str) -> Result<Option<f64>, ProtocolError> {
    match value {
        Some(v) if !v.is_finite() => Err(ProtocolError::NonFinite { field }),
        other => Ok(other),
    }
}

impl ToControls for ActionConvention {
    fn to_controls(&self, message: &ControlMessage) -> Result<ControlAxes, ProtocolError> {
        let thrust = finite(message.thrust, "thrust")?;
        let pitch = finite(message.pitch, "pitch")?;
        let roll = finite(message.roll, "roll")?;
        let yaw = finite(message.yaw, "yaw")?;

        let axes = ControlAxes {
            forward: pitch.map_or(0.0, |p| self.pitch_sign() * p),
            right: roll.unwrap_or(0.0),
            yaw: yaw.unwrap_or(0.0),
            vertical: thrust.map_or(0.0, |t| self.thrust.to_vertical(t)),
        };
        Ok(axes.clamped())
    }
}
