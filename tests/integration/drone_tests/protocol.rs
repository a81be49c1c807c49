use drone_flyer::{
    components::ControlAxes,
    protocol::{ActionConvention, Command, Response, ThrustRange},
    resources::{SessionConfigBuilder, SessionEndpoint, SessionLink},
};
use serde_json::{json, Value};

use crate::common::{state_frames, TestAppBuilder};

#[test]
fn test_raw_json_messages_drive_session() {
    let mut app = TestAppBuilder::new().build();
    let (link, endpoint) = SessionLink::pair();
    app.app.insert_resource(link);

    endpoint
        .send_json(r#"{"type":"control","thrust":0.5,"pitch":0.0,"roll":0.0,"yaw":-1.0,"timestamp":1}"#)
        .unwrap();
    endpoint.send_json(r#"{"type":"ping","timestamp":5}"#).unwrap();
    app.run_steps(6);

    let controls = *app.query_single::<ControlAxes>().unwrap();
    assert_eq!(controls, ControlAxes::new(0.0, 0.0, -1.0, 0.0));

    let encoded: Vec<Value> = endpoint
        .drain()
        .iter()
        .map(|response| serde_json::from_str(&response.encode().unwrap()).unwrap())
        .collect();
    assert_eq!(encoded[0], json!({"type": "pong", "timestamp": 5}));

    let state = &encoded[1];
    assert_eq!(state["type"], json!("state"));
    assert_eq!(state["isFlying"], json!(false));
    assert_eq!(state["timestamp"], json!(100));
    assert!(state["rotation"]["y"].as_f64().unwrap() > 350.0);
    assert_eq!(state["controls"]["yaw"], json!(-1.0));
    assert!(state.get("angularVelocity").is_some());
}

#[test]
fn test_malformed_json_never_reaches_session() {
    let (_link, endpoint): (SessionLink, SessionEndpoint) = SessionLink::pair();
    assert!(endpoint.send_json("{\"type\":\"control\",").is_err());
    assert!(endpoint.send_json(r#"{"type":"warp","speed":9}"#).is_err());
}

#[test]
fn test_bipolar_convention_from_config() {
    let config = SessionConfigBuilder::from_json(&json!({
        "update_mode": "stepped",
        "convention": { "thrust": "bipolar", "invert_pitch": true }
    }))
    .unwrap()
    .build()
    .unwrap();
    assert_eq!(
        config.convention,
        ActionConvention {
            thrust: ThrustRange::Bipolar,
            invert_pitch: true
        }
    );

    let mut app = TestAppBuilder::new().with_config(config).build();
    app.stream(
        Command::decode(r#"{"type":"control","thrust":1.0,"pitch":0.5,"roll":0.0,"yaw":0.0}"#)
            .unwrap(),
        60,
    );

    let body = app.body();
    assert!(body.is_flying());
    let frames = state_frames(&app.drain_responses());
    let last = frames.last().unwrap();
    assert_eq!(last.controls.thrust, 1.0);
    assert_eq!(last.controls.pitch, 0.5);
    // Positive pitch flies forward with the inverted convention
    assert!(body.velocity.z < 0.0);
}

#[test]
fn test_response_round_trip_through_json() {
    let ack = Response::ConfigAck {
        settings: drone_flyer::protocol::ConfigSettings {
            external_control: true,
        },
    };
    let encoded = ack.encode().unwrap();
    assert_eq!(
        serde_json::from_str::<Value>(&encoded).unwrap(),
        json!({"type": "config_ack", "settings": {"externalControl": true}})
    );
    assert_eq!(Response::decode(&encoded).unwrap(), ack);
}
