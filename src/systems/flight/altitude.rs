use crate::components::{DroneBody, DroneConfig};

/// Proportional-derivative altitude hold.
///
/// There is no integral term, so a persistent disturbance leaves a steady
/// offset from the setpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeHold {
    pub hover_thrust: f64,
    pub kp: f64,
    pub kd: f64,
    pub max_thrust: f64,
}

impl AltitudeHold {
    pub fn from_config(config: &DroneConfig) -> Self {
        Self {
            hover_thrust: config.hover_thrust(),
            kp: config.kp,
            kd: config.kd,
            max_thrust: config.max_thrust,
        }
    }

    /// Thrust [N] for a height error [m] and its rate of change [m/s].
    pub fn thrust(&self, height_error: f64, derivative: f64) -> f64 {
        (self.hover_thrust + self.kp * height_error + self.kd * derivative)
            .clamp(0.0, self.max_thrust)
    }

    /// Runs one controller tick against the body's setpoint and remembers the
    /// error for the next derivative.
    pub fn update(&self, body: &mut DroneBody, dt: f64) -> f64 {
        let height_error = body.target_altitude - body.position.y;
        let derivative = (height_error - body.last_height_error) / dt;
        body.last_height_error = height_error;
        self.thrust(height_error, derivative)
    }
}
