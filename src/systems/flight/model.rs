use bevy::prelude::*;
use nalgebra::Vector3;

use crate::{
    components::{ControlAxes, ControlSource, DroneBody, DroneConfig, FlightState},
    systems::flight::AltitudeHold,
    utils::{heading_basis, lerp, wrap_degrees},
};

/// Gives the flight model access to a drone and its input without tying it to
/// any particular runtime.
pub trait FlightHost: ControlSource {
    fn body_mut(&mut self) -> &mut DroneBody;
}

/// Per-tick drone dynamics.
///
/// A tick runs, in order: take-off throttle and liftoff (grounded), the landing
/// check (flying), the altitude hold and force integration (flying), heading
/// and visual tilt, and finally position integration against the ground floor.
/// Steps longer than `max_timestep` are shortened to it, not sub-stepped.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct FlightModel {
    config: DroneConfig,
    altitude_hold: AltitudeHold,
}

impl Default for FlightModel {
    fn default() -> Self {
        Self::new(DroneConfig::default())
    }
}

impl FlightModel {
    pub fn new(config: DroneConfig) -> Self {
        let altitude_hold = AltitudeHold::from_config(&config);
        Self {
            config,
            altitude_hold,
        }
    }

    pub fn config(&self) -> &DroneConfig {
        &self.config
    }

    /// A fresh grounded body for this model's ground plane.
    pub fn spawn_body(&self, position: Vector3<f64>) -> DroneBody {
        DroneBody::at_position(position, self.config.ground_height)
    }

    /// Samples the host's controls and advances its body by `dt`.
    pub fn advance<H: FlightHost>(&self, host: &mut H, dt: f64) {
        let input = host.control_axes();
        self.step(host.body_mut(), &input, dt);
    }

    /// Advances `body` by one tick of `dt` seconds under `input`.
    ///
    /// Inputs are assumed finite; they are clamped to [-1, 1] here. A
    /// non-positive `dt` leaves the body untouched.
    pub fn step(&self, body: &mut DroneBody, input: &ControlAxes, dt: f64) {
        if !(dt > 0.0) {
            return;
        }
        let dt = dt.min(self.config.max_timestep);
        let input = input.clamped();
        let (prev_pitch, prev_roll) = (body.pitch, body.roll);

        let lifted_off = match body.state {
            FlightState::Grounded => self.update_throttle(body, input.vertical, dt),
            FlightState::Flying => {
                self.check_landing(body, input.vertical);
                false
            }
        };

        if body.state.is_flying() {
            // The liftoff setpoint holds for the tick it was chosen on
            if !lifted_off {
                body.target_altitude = (body.target_altitude
                    + input.vertical * self.config.altitude_change_speed * dt)
                    .max(self.config.ground_height);
            }
            let thrust = self.altitude_hold.update(body, dt);
            let acceleration = self.acceleration(body, &input, thrust);
            body.velocity += acceleration * dt;
        }

        self.update_orientation(body, &input, dt);

        if body.state.is_flying() {
            self.integrate_position(body, dt);
        }

        body.angular_velocity = Vector3::new(
            (body.pitch - prev_pitch) / dt,
            input.yaw * self.config.rotate_speed,
            (body.roll - prev_roll) / dt,
        );

        trace!(
            "drone {:?} pos={:?} vel={:?} yaw={:.1} throttle={:.3}",
            body.state,
            body.position,
            body.velocity,
            body.yaw,
            body.throttle
        );
    }

    /// Builds or bleeds take-off throttle. Returns true on the liftoff tick.
    fn update_throttle(&self, body: &mut DroneBody, vertical: f64, dt: f64) -> bool {
        if vertical > 0.0 {
            body.throttle += dt * self.config.rise_rate;
        } else if vertical < 0.0 {
            body.throttle -= dt * self.config.fall_rate;
        }
        body.throttle = body.throttle.clamp(0.0, 1.0);

        if body.throttle > self.config.liftoff_threshold {
            body.state = FlightState::Flying;
            body.target_altitude = self.config.ground_height + self.config.liftoff_altitude;
            body.last_height_error = 0.0;
            info!(
                "Drone lifted off at throttle {:.2}, holding {:.2}m",
                body.throttle, body.target_altitude
            );
            return true;
        }
        false
    }

    fn check_landing(&self, body: &mut DroneBody, vertical: f64) {
        let ground = self.config.ground_height;
        if body.position.y <= ground + self.config.landing_margin && vertical < 0.0 {
            body.state = FlightState::Grounded;
            body.velocity = Vector3::zeros();
            body.position.y = ground;
            body.target_altitude = ground;
            body.throttle = 0.0;
            body.last_height_error = 0.0;
            info!(
                "Drone touched down at ({:.2}, {:.2})",
                body.position.x, body.position.z
            );
        }
    }

    fn acceleration(&self, body: &DroneBody, input: &ControlAxes, thrust: f64) -> Vector3<f64> {
        let config = &self.config;
        let (forward_axis, right_axis) = heading_basis(body.yaw);
        let lateral = config.lateral_force / config.mass;

        Vector3::new(0.0, thrust / config.mass - config.gravity, 0.0)
            + forward_axis * (input.forward * lateral)
            + right_axis * (input.right * lateral)
            - body.velocity * config.drag_coefficient
    }

    fn update_orientation(&self, body: &mut DroneBody, input: &ControlAxes, dt: f64) {
        let config = &self.config;
        body.yaw = wrap_degrees(body.yaw + input.yaw * config.rotate_speed * dt);

        let (target_pitch, target_roll, rate) = if body.state.is_flying() {
            (
                -input.forward * config.max_tilt_angle,
                -input.right * config.max_tilt_angle,
                config.tilt_speed,
            )
        } else {
            (0.0, 0.0, config.tilt_speed * 2.0)
        };
        body.pitch = lerp(body.pitch, target_pitch, dt * rate);
        body.roll = lerp(body.roll, target_roll, dt * rate);
    }

    fn integrate_position(&self, body: &mut DroneBody, dt: f64) {
        body.position += body.velocity * dt;

        let ground = self.config.ground_height;
        if body.position.y < ground {
            body.position.y = ground;
            if body.velocity.y < 0.0 {
                body.velocity.y = 0.0;
            }
        }
    }
}
