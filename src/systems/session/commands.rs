use bevy::prelude::*;
use nalgebra::Vector3;

use crate::{
    components::{ControlAxes, DroneBody, PlayerController},
    protocol::{Command, ConfigSettings, ControlMessage, Response, ToControls},
    resources::{ControlLatch, ControlSettings, SessionLink, SimClock},
    systems::flight::FlightModel,
};

/// Applies every command queued on the session link since the last tick.
pub fn handle_commands_system(
    link: Option<Res<SessionLink>>,
    mut latch: ResMut<ControlLatch>,
    mut settings: ResMut<ControlSettings>,
    clock: Res<SimClock>,
    mut query: Query<(&mut DroneBody, &mut ControlAxes, &FlightModel), With<PlayerController>>,
) {
    let Some(link) = link else {
        return;
    };

    for command in link.drain_commands() {
        match command {
            Command::Control(message) => {
                apply_control(&message, &mut latch, &settings, clock.elapsed_seconds());
            }
            Command::Reset {
                position,
                timestamp,
            } => {
                if position.is_some_and(|position| !position.is_finite()) {
                    warn!("Ignoring reset to non-finite position {:?}", position);
                    continue;
                }
                let position: Vector3<f64> = match position {
                    Some(position) => position.into(),
                    None => Vector3::zeros(),
                };
                for (mut body, mut controls, model) in query.iter_mut() {
                    *body = model.spawn_body(position);
                    *controls = ControlAxes::neutral();
                }
                latch.clear();
                info!("Drone reset to {:?}", position);
                link.send(Response::ResetAck {
                    timestamp: timestamp.unwrap_or_else(|| clock.elapsed_millis()),
                });
            }
            Command::Config {
                external_control, ..
            } => {
                if settings.external_control != external_control {
                    info!("External control set to {}", external_control);
                }
                settings.external_control = external_control;
                if !external_control {
                    latch.clear();
                    for (_, mut controls, _) in query.iter_mut() {
                        *controls = ControlAxes::neutral();
                    }
                }
                link.send(Response::ConfigAck {
                    settings: ConfigSettings { external_control },
                });
            }
            Command::Ping { timestamp } => {
                link.send(Response::Pong { timestamp });
            }
        }
    }
}

fn apply_control(
    message: &ControlMessage,
    latch: &mut ControlLatch,
    settings: &ControlSettings,
    now: f64,
) {
    if !settings.external_control {
        debug!("Ignoring control message, external control is off");
        return;
    }
    match settings.convention.to_controls(message) {
        Ok(axes) => {
            latch.latch(axes, now);
        }
        Err(e) => warn!("Rejected control message: {}", e),
    }
}
