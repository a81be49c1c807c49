use drone_flyer::{
    components::{ControlAxes, FlightState},
    protocol::{Command, ConfigSettings, Response},
    resources::{ControlLatch, ControlSettings, SimClock, TelemetryState},
    utils::Xyz,
};
use nalgebra::Vector3;
use pretty_assertions::assert_eq;

use crate::common::{assert_body_valid, control, state_frames, TestAppBuilder};

#[test]
fn test_ping_pong() {
    let mut app = TestAppBuilder::new().with_telemetry_rate(1.0).build();
    app.send(Command::Ping { timestamp: 77 });
    app.run_frame();

    assert_eq!(app.drain_responses(), vec![Response::Pong { timestamp: 77 }]);
}

#[test]
fn test_control_is_latched_between_messages() {
    let mut app = TestAppBuilder::new().build();
    app.send(control(0.5, 0.0, 0.0, 1.0));
    app.run_steps(30);

    let controls = *app.query_single::<ControlAxes>().unwrap();
    assert_eq!(controls, ControlAxes::new(0.0, 0.0, 1.0, 0.0));
    assert!(app.body().yaw > 40.0);
}

#[test]
fn test_silent_link_falls_back_to_neutral() {
    let mut app = TestAppBuilder::new().build();
    app.stream(control(1.0, 0.0, 0.0, 0.0), 120);
    assert!(app.body().is_flying());

    // Nothing more arrives; the last sample expires after a second
    app.run_steps(90);
    assert!(app.query_single::<ControlAxes>().unwrap().is_neutral());
    let now = app.get_state::<SimClock>().unwrap().elapsed_seconds();
    assert!(app.get_state::<ControlLatch>().unwrap().is_stale(now));

    // The hold keeps the drone at its last setpoint instead of climbing away
    let target = app.body().target_altitude;
    app.run_steps(600);
    let body = app.body();
    assert!(body.is_flying());
    assert_eq!(body.target_altitude, target);
}

#[test]
fn test_reset_returns_drone_to_ground() {
    let mut app = TestAppBuilder::new().build();
    app.stream(control(1.0, -0.5, 0.0, 0.3), 120);
    app.drain_responses();

    app.send(Command::Reset {
        position: Some(Xyz::new(2.0, 5.0, -1.0)),
        timestamp: Some(1234),
    });
    app.run_frame();

    let responses = app.drain_responses();
    assert!(responses.contains(&Response::ResetAck { timestamp: 1234 }));

    let body = app.body();
    assert_eq!(body.state, FlightState::Grounded);
    // Only the horizontal part of the reset position is used
    assert_eq!(body.position, Vector3::new(2.0, 0.0, -1.0));
    assert_eq!(body.yaw, 0.0);
    assert_eq!(body.throttle, 0.0);
    assert!(app.query_single::<ControlAxes>().unwrap().is_neutral());
}

#[test]
fn test_reset_without_position_uses_origin_and_clock() {
    let mut app = TestAppBuilder::new().build();
    app.run_steps(59);
    app.send(Command::Reset {
        position: None,
        timestamp: None,
    });
    app.run_frame();

    assert!(app
        .drain_responses()
        .contains(&Response::ResetAck { timestamp: 1000 }));
    assert_eq!(app.body().position, Vector3::zeros());
}

#[test]
fn test_config_switches_to_keyboard_control() {
    let mut app = TestAppBuilder::new().build();
    app.send(Command::Config {
        external_control: false,
        timestamp: None,
    });
    app.run_frame();

    assert!(app.drain_responses().contains(&Response::ConfigAck {
        settings: ConfigSettings {
            external_control: false
        }
    }));
    assert!(!app.get_state::<ControlSettings>().unwrap().external_control);

    // Remote samples are ignored while the keyboard owns the drone
    app.stream(control(1.0, 0.0, 0.0, 0.0), 120);
    let body = app.body();
    assert_eq!(body.state, FlightState::Grounded);
    assert_eq!(body.throttle, 0.0);
}

#[test]
fn test_switch_to_keyboard_drops_remote_input() {
    let mut app = TestAppBuilder::new().build();
    app.stream(control(1.0, -1.0, 0.0, 1.0), 120);
    assert!(app.body().is_flying());

    app.send(Command::Config {
        external_control: false,
        timestamp: None,
    });
    app.run_frame();

    // Headless: no keyboard either, so the drone holds neutral
    assert!(app.query_single::<ControlAxes>().unwrap().is_neutral());
    let held = app.body();
    app.run_steps(600);
    let body = app.body();
    assert!(body.is_flying());
    assert_eq!(body.target_altitude, held.target_altitude);
    assert_eq!(body.yaw, held.yaw);
}

#[test]
fn test_reset_to_non_finite_position_is_ignored() {
    let mut app = TestAppBuilder::new()
        .with_spawn_position(Vector3::new(1.0, 0.0, 2.0))
        .build();
    app.run_frame();
    app.drain_responses();

    app.send(Command::Reset {
        position: Some(Xyz::new(f64::NAN, 0.0, f64::INFINITY)),
        timestamp: Some(9),
    });
    app.run_frame();

    assert!(!app
        .drain_responses()
        .iter()
        .any(|response| matches!(response, Response::ResetAck { .. })));
    let body = app.body();
    assert_body_valid(&body, 0.0);
    assert_eq!(body.position, Vector3::new(1.0, 0.0, 2.0));
}

#[test]
fn test_invalid_control_keeps_previous_sample() {
    let mut app = TestAppBuilder::new().build();
    app.send(control(0.5, 0.0, 0.0, 1.0));
    app.run_frame();

    app.send(control(f64::NAN, 0.0, 0.0, 0.0));
    app.run_frame();
    assert_eq!(
        *app.query_single::<ControlAxes>().unwrap(),
        ControlAxes::new(0.0, 0.0, 1.0, 0.0)
    );
}

#[test]
fn test_telemetry_rate_is_independent_of_ticks() {
    let mut app = TestAppBuilder::new().build();
    app.stream(control(1.0, 0.0, 0.0, 0.0), 60);

    let frames = state_frames(&app.drain_responses());
    assert_eq!(frames.len(), 10);
    let timestamps: Vec<u64> = frames.iter().map(|frame| frame.timestamp).collect();
    assert_eq!(
        timestamps,
        vec![100, 200, 300, 400, 500, 600, 700, 800, 900, 1000]
    );
    assert_eq!(app.get_state::<TelemetryState>().unwrap().frames_sent, 10);

    let last = frames.last().unwrap();
    assert!(last.is_flying);
    assert_eq!(last.controls.thrust, 1.0);
}

#[test]
fn test_session_runs_without_link() {
    let mut app = TestAppBuilder::new().without_link().build();
    app.run_steps(30);

    assert_eq!(app.get_state::<SimClock>().unwrap().tick_count(), 30);
    assert_eq!(app.get_state::<TelemetryState>().unwrap().frames_sent, 0);
}
