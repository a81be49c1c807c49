use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::resources::ConfigError;
use crate::utils::{GRAVITY, MAX_TIMESTEP};

/// Named tunings of the one flight model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightProfile {
    /// Thrust from the PD altitude hold, drag-limited lateral motion.
    #[default]
    Physics,
    /// Near-instant response that tracks the stick, no visual tilt.
    Kinematic,
}

/// Every constant of the drone flight model.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DroneConfig {
    pub name: String,
    /// Mass [kg]
    pub mass: f64,
    /// Gravitational acceleration [m/s²]
    pub gravity: f64,
    /// Upper thrust limit [N]
    pub max_thrust: f64,
    /// Proportional gain of the altitude hold
    pub kp: f64,
    /// Derivative gain of the altitude hold
    pub kd: f64,
    /// Force at full forward/right input [N]
    pub lateral_force: f64,
    /// Linear drag [1/s]
    pub drag_coefficient: f64,
    /// Throttle gained per second of positive vertical input on the ground
    pub rise_rate: f64,
    /// Throttle lost per second of negative vertical input on the ground
    pub fall_rate: f64,
    /// Throttle above which the drone lifts off
    pub liftoff_threshold: f64,
    /// Setpoint above ground chosen at liftoff [m]
    pub liftoff_altitude: f64,
    /// Height above ground within which a descent command lands [m]
    pub landing_margin: f64,
    /// Setpoint change at full vertical input [m/s]
    pub altitude_change_speed: f64,
    /// Yaw rate at full yaw input [deg/s]
    pub rotate_speed: f64,
    /// Visual tilt at full forward/right input [deg]
    pub max_tilt_angle: f64,
    /// Tilt smoothing rate [1/s]
    pub tilt_speed: f64,
    pub ground_height: f64,
    /// Longest step integrated in one call [s]
    pub max_timestep: f64,
}

impl Default for DroneConfig {
    fn default() -> Self {
        Self::physics()
    }
}

impl DroneConfig {
    pub fn physics() -> Self {
        Self {
            name: "drone".to_string(),
            mass: 2.0,
            gravity: GRAVITY,
            max_thrust: 40.0,
            kp: 3.0,
            kd: 2.0,
            lateral_force: 10.0,
            drag_coefficient: 0.5,
            rise_rate: 0.5,
            fall_rate: 1.0,
            liftoff_threshold: 0.25,
            liftoff_altitude: 1.0,
            landing_margin: 0.1,
            altitude_change_speed: 2.0,
            rotate_speed: 90.0,
            max_tilt_angle: 15.0,
            tilt_speed: 5.0,
            ground_height: 0.0,
            max_timestep: MAX_TIMESTEP,
        }
    }

    /// Retunes the model so it behaves like direct position control.
    pub fn kinematic() -> Self {
        Self {
            kp: 40.0,
            kd: 12.0,
            max_thrust: 120.0,
            lateral_force: 80.0,
            drag_coefficient: 8.0,
            rise_rate: 1000.0,
            liftoff_threshold: 0.0,
            altitude_change_speed: 3.0,
            rotate_speed: 120.0,
            max_tilt_angle: 0.0,
            ..Self::physics()
        }
    }

    pub fn with_profile(profile: FlightProfile) -> Self {
        match profile {
            FlightProfile::Physics => Self::physics(),
            FlightProfile::Kinematic => Self::kinematic(),
        }
    }

    /// Thrust that exactly cancels gravity [N]
    pub fn hover_thrust(&self) -> f64 {
        self.mass * self.gravity
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: DroneConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("mass", self.mass),
            ("max_timestep", self.max_timestep),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(name, value));
            }
        }

        let non_negative = [
            ("gravity", self.gravity),
            ("max_thrust", self.max_thrust),
            ("kp", self.kp),
            ("kd", self.kd),
            ("lateral_force", self.lateral_force),
            ("drag_coefficient", self.drag_coefficient),
            ("rise_rate", self.rise_rate),
            ("fall_rate", self.fall_rate),
            ("liftoff_altitude", self.liftoff_altitude),
            ("landing_margin", self.landing_margin),
            ("altitude_change_speed", self.altitude_change_speed),
            ("rotate_speed", self.rotate_speed),
            ("max_tilt_angle", self.max_tilt_angle),
            ("tilt_speed", self.tilt_speed),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::invalid(name, value));
            }
        }

        if !self.ground_height.is_finite() {
            return Err(ConfigError::invalid("ground_height", self.ground_height));
        }
        // Throttle saturates at 1, so a threshold of 1 could never be exceeded
        if !(0.0..1.0).contains(&self.liftoff_threshold) {
            return Err(ConfigError::invalid(
                "liftoff_threshold",
                self.liftoff_threshold,
            ));
        }
        Ok(())
    }
}
