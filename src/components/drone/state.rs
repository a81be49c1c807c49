use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Discrete flight state gating horizontal physics and altitude control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlightState {
    #[default]
    Grounded,
    Flying,
}

impl FlightState {
    pub fn is_flying(&self) -> bool {
        matches!(self, FlightState::Flying)
    }
}

/// Physical state of one simulated drone.
///
/// World frame is y-up. Angles are in degrees: `yaw` is a heading in [0, 360),
/// `pitch` and `roll` are the visual tilt only.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneBody {
    /// Position in world space [m]
    pub position: Vector3<f64>,
    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
    /// Rates of (pitch, yaw, roll) over the last step [deg/s]
    pub angular_velocity: Vector3<f64>,
    /// Altitude setpoint of the hold controller [m]
    pub target_altitude: f64,
    /// Accumulated take-off throttle in [0, 1]
    pub throttle: f64,
    /// Height error seen on the previous tick, for the derivative term
    pub last_height_error: f64,
    pub state: FlightState,
}

impl DroneBody {
    /// A grounded drone at the origin, resting on the ground plane.
    pub fn on_ground(ground_height: f64) -> Self {
        Self::at_position(Vector3::zeros(), ground_height)
    }

    /// A grounded drone resting on the ground plane below or above `position`.
    /// Only the horizontal coordinates of `position` are used.
    pub fn at_position(position: Vector3<f64>, ground_height: f64) -> Self {
        let position = Vector3::new(position.x, ground_height, position.z);
        Self {
            position,
            velocity: Vector3::zeros(),
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            angular_velocity: Vector3::zeros(),
            target_altitude: ground_height,
            throttle: 0.0,
            last_height_error: 0.0,
            state: FlightState::Grounded,
        }
    }

    pub fn is_flying(&self) -> bool {
        self.state.is_flying()
    }
}

impl Default for DroneBody {
    fn default() -> Self {
        Self::on_ground(0.0)
    }
}
