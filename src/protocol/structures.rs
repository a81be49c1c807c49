use serde::{Deserialize, Serialize};

use crate::{protocol::ProtocolError, utils::Xyz};

/// Messages sent to a running session, tagged by `"type"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Latch a new control sample.
    Control(ControlMessage),
    /// Put the drone back on the ground, optionally somewhere else.
    Reset {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<Xyz>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timestamp: Option<u64>,
    },
    /// Switch between external and keyboard control.
    Config {
        #[serde(rename = "externalControl")]
        external_control: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timestamp: Option<u64>,
    },
    Ping { timestamp: u64 },
}

impl Command {
    pub fn decode(message: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(message)?)
    }

    pub fn encode(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A raw control message in the network convention. Missing axes are
/// treated as centred.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thrust: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaw: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

impl ControlMessage {
    pub fn new(thrust: f64, pitch: f64, roll: f64, yaw: f64) -> Self {
        Self {
            thrust: Some(thrust),
            pitch: Some(pitch),
            roll: Some(roll),
            yaw: Some(yaw),
            timestamp: None,
        }
    }
}

/// The applied control axes, echoed back in the network convention.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlEcho {
    pub thrust: f64,
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}

/// One telemetry sample of the drone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryFrame {
    pub position: Xyz,
    /// Euler angles in degrees: x = pitch, y = yaw, z = roll
    pub rotation: Xyz,
    pub velocity: Xyz,
    /// Rates of the rotation angles [deg/s]
    pub angular_velocity: Xyz,
    pub controls: ControlEcho,
    pub is_flying: bool,
    /// Simulation time [ms]
    pub timestamp: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfigSettings {
    #[serde(rename = "externalControl")]
    pub external_control: bool,
}

/// Messages emitted by a running session, tagged by `"type"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    State(TelemetryFrame),
    ConfigAck { settings: ConfigSettings },
    ResetAck { timestamp: u64 },
    Pong { timestamp: u64 },
}

impl Response {
    pub fn encode(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn decode(message: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(message)?)
    }
}
