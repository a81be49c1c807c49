use approx::assert_relative_eq;
use drone_flyer::{
    components::{ControlAxes, DroneConfig, FlightState},
    systems::FlightModel,
    utils::RngManager,
    DroneSession,
};
use nalgebra::Vector3;
use rand::Rng;

use crate::common::{assert_body_valid, assert_position_eq, control, TestAppBuilder, TEST_TIMESTEP};

#[test]
fn test_idle_drone_stays_grounded() {
    let mut app = TestAppBuilder::new().build();
    app.run_steps(600);

    let body = app.body();
    assert_body_valid(&body, 0.0);
    assert_eq!(body.state, FlightState::Grounded);
    assert_eq!(body.position, Vector3::zeros());
}

#[test]
fn test_takeoff_climb_and_hover() {
    let mut app = TestAppBuilder::new().build();

    // Full thrust until airborne
    let mut ticks = 0;
    while !app.body().is_flying() {
        app.stream(control(1.0, 0.0, 0.0, 0.0), 1);
        ticks += 1;
        assert!(ticks <= 60, "no liftoff after a second of full thrust");
    }
    assert_eq!(app.body().target_altitude, 1.0);

    // Neutral thrust holds whatever setpoint was reached
    app.stream(control(0.5, 0.0, 0.0, 0.0), 1_200);
    let body = app.body();
    assert_body_valid(&body, 0.0);
    assert_eq!(body.state, FlightState::Flying);
    assert_relative_eq!(body.position.y, 1.0, epsilon = 1e-3);
}

#[test]
fn test_full_flight_ends_on_ground() {
    let mut app = TestAppBuilder::new().build();

    app.stream(control(1.0, 0.0, 0.0, 0.0), 90);
    app.stream(control(0.5, -1.0, 0.0, 0.0), 180);
    let cruising = app.body();
    assert!(cruising.is_flying());
    // Heading 0 flies toward -Z
    assert!(cruising.velocity.z < -1.0);
    assert!(cruising.pitch < 0.0);

    app.stream(control(0.0, 0.0, 0.0, 0.0), 600);
    let landed = app.body();
    assert_body_valid(&landed, 0.0);
    assert_eq!(landed.state, FlightState::Grounded);
    assert_eq!(landed.position.y, 0.0);
    assert_eq!(landed.velocity, Vector3::zeros());
    assert!(landed.position.z < -1.0);
}

#[test]
fn test_raised_ground_plane() {
    let mut config = crate::common::create_test_session_config();
    config.drone.ground_height = 12.0;
    let mut app = TestAppBuilder::new()
        .with_config(config)
        .with_spawn_position(Vector3::new(3.0, 0.0, 4.0))
        .build();

    assert_position_eq(&app.body().position, &Vector3::new(3.0, 12.0, 4.0), 1e-12);

    app.stream(control(1.0, 0.0, 0.0, 0.0), 45);
    app.stream(control(0.5, 0.0, 0.0, 0.0), 900);
    let body = app.body();
    assert_body_valid(&body, 12.0);
    assert!(body.position.y > 12.5);
}

#[test]
fn test_seeded_random_flights_keep_invariants() {
    let rng_manager = RngManager::new(2024);
    let configs = [DroneConfig::physics(), DroneConfig::kinematic()];

    for (i, config) in configs.into_iter().enumerate() {
        let mut rng = rng_manager.get_rng(&format!("flight_{i}"));
        let model = FlightModel::new(config);
        let mut body = model.spawn_body(Vector3::zeros());

        for _ in 0..20_000 {
            let input = ControlAxes::new(
                rng.gen_range(-1.0..=1.0),
                rng.gen_range(-1.0..=1.0),
                rng.gen_range(-1.0..=1.0),
                rng.gen_range(-1.0..=1.0),
            );
            model.step(&mut body, &input, rng.gen_range(0.0..0.1));
            assert_body_valid(&body, 0.0);
        }
    }
}

#[test]
fn test_session_harness_matches_plugin() {
    let mut app = TestAppBuilder::new().build();
    let mut session = DroneSession::new(crate::common::create_test_drone_config(), 1.0);

    for tick in 0..240 {
        let axes = if tick < 120 {
            ControlAxes::new(0.0, 0.0, 0.5, 1.0)
        } else {
            ControlAxes::new(0.7, -0.3, 0.0, 0.0)
        };
        // 0.5 thrust in the unipolar convention is vertical 0
        let thrust = (axes.vertical + 1.0) * 0.5;
        app.stream(control(thrust, -axes.forward, axes.right, axes.yaw), 1);
        session.receive(axes);
        session.tick(TEST_TIMESTEP);
    }

    let body = app.body();
    assert_position_eq(&body.position, &session.body().position, 1e-9);
    assert_relative_eq!(body.yaw, session.body().yaw, epsilon = 1e-9);
}
