use bevy::{ecs::schedule::ScheduleLabel, prelude::*};
use nalgebra::Vector3;

use crate::{
    components::{ControlAxes, PlayerController},
    resources::{
        ControlLatch, ControlSettings, PhysicsConfig, SessionConfig, SimClock, TelemetryConfig,
        TelemetryState, UpdateMode,
    },
    systems::{
        advance_clock_system, drone_flight_system, external_control_system,
        handle_commands_system, keyboard_control_system, telemetry_system, FlightModel,
    },
};

/// Order of the per-tick session work.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum DroneSet {
    Clock,
    Commands,
    Input,
    Flight,
    Telemetry,
}

/// Runs one drone session: spawns the player drone and schedules its systems.
///
/// The `SessionLink` resource is optional and supplied by whoever owns the
/// transport; without it commands and telemetry are simply skipped.
pub struct DronePlugin {
    config: SessionConfig,
    spawn_position: Vector3<f64>,
}

impl DronePlugin {
    pub fn new(config: SessionConfig) -> Self {
        DronePlugin {
            config,
            spawn_position: Vector3::zeros(),
        }
    }

    pub fn at(mut self, position: Vector3<f64>) -> Self {
        self.spawn_position = position;
        self
    }

    fn spawn_drone(world: &mut World, model: FlightModel, position: Vector3<f64>) {
        let body = model.spawn_body(position);
        info!(
            "Spawning drone '{}' at {:?}",
            model.config().name,
            body.position
        );
        world.spawn((
            body,
            ControlAxes::neutral(),
            PlayerController::new(),
            Name::new(model.config().name.clone()),
            model,
        ));
    }

    fn add_session_systems(app: &mut App, schedule: impl ScheduleLabel + Clone) {
        app.configure_sets(
            schedule.clone(),
            (
                DroneSet::Clock,
                DroneSet::Commands,
                DroneSet::Input,
                DroneSet::Flight,
                DroneSet::Telemetry,
            )
                .chain(),
        )
        .add_systems(
            schedule,
            (
                advance_clock_system.in_set(DroneSet::Clock),
                handle_commands_system.in_set(DroneSet::Commands),
                (keyboard_control_system, external_control_system).in_set(DroneSet::Input),
                drone_flight_system.in_set(DroneSet::Flight),
                telemetry_system.in_set(DroneSet::Telemetry),
            ),
        );
    }
}

impl Plugin for DronePlugin {
    fn build(&self, app: &mut App) {
        let config = &self.config;

        app.insert_resource(PhysicsConfig {
            timestep: config.timestep,
        })
        .insert_resource(SimClock::new())
        .insert_resource(ControlLatch::new(config.control_timeout))
        .insert_resource(ControlSettings {
            external_control: config.external_control,
            convention: config.convention,
        })
        .insert_resource(TelemetryConfig {
            rate_hz: config.telemetry_rate_hz,
        })
        .init_resource::<TelemetryState>();

        // Spawned during build so the drone exists before the first tick
        Self::spawn_drone(
            app.world_mut(),
            FlightModel::new(config.drone.clone()),
            self.spawn_position,
        );

        match config.update_mode {
            UpdateMode::RealTime => {
                Self::add_session_systems(app, FixedUpdate);
                app.insert_resource(Time::<Fixed>::from_seconds(config.timestep));
            }
            UpdateMode::Stepped => Self::add_session_systems(app, Update),
        }
    }
}
