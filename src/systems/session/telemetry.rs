use bevy::prelude::*;

use crate::{
    components::{ControlAxes, DroneBody, PlayerController},
    protocol::{Response, ToTelemetry},
    resources::{
        ControlSettings, PhysicsConfig, SessionLink, SimClock, TelemetryConfig, TelemetryState,
    },
};

// Absorbs rounding when the period is a whole number of ticks
const PERIOD_TOLERANCE: f64 = 1e-9;

/// Publishes a state frame of the player drone every telemetry period.
pub fn telemetry_system(
    link: Option<Res<SessionLink>>,
    query: Query<(&DroneBody, &ControlAxes), With<PlayerController>>,
    config: Res<TelemetryConfig>,
    mut state: ResMut<TelemetryState>,
    settings: Res<ControlSettings>,
    physics: Res<PhysicsConfig>,
    clock: Res<SimClock>,
) {
    state.since_last += physics.timestep;

    let period = config.period();
    if state.since_last + PERIOD_TOLERANCE < period {
        return;
    }
    state.since_last = (state.since_last - period).clamp(0.0, period);

    let Some(link) = link else {
        return;
    };
    for (body, controls) in query.iter() {
        let frame = settings
            .convention
            .to_telemetry(body, controls, clock.elapsed_millis());
        link.send(Response::State(frame));
        state.frames_sent += 1;
    }
}
