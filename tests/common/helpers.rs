use drone_flyer::{
    components::DroneConfig,
    protocol::{Command, ControlMessage, Response, TelemetryFrame},
    resources::{SessionConfig, UpdateMode},
};

pub const TEST_TIMESTEP: f64 = 1.0 / 60.0;

/// Creates a stepped session configuration for testing
pub fn create_test_session_config() -> SessionConfig {
    SessionConfig {
        timestep: TEST_TIMESTEP,
        update_mode: UpdateMode::Stepped,
        drone: create_test_drone_config(),
        ..SessionConfig::default()
    }
}

/// Creates the default drone with a test name
pub fn create_test_drone_config() -> DroneConfig {
    DroneConfig {
        name: "test_drone".to_string(),
        ..DroneConfig::default()
    }
}

/// A control command in the unipolar network convention
pub fn control(thrust: f64, pitch: f64, roll: f64, yaw: f64) -> Command {
    Command::Control(ControlMessage::new(thrust, pitch, roll, yaw))
}

/// Keeps only the state frames of a response batch
pub fn state_frames(responses: &[Response]) -> Vec<TelemetryFrame> {
    responses
        .iter()
        .filter_map(|response| match response {
            Response::State(frame) => Some(frame.clone()),
            _ => None,
        })
        .collect()
}
