use bevy::prelude::*;

use crate::{
    components::{ControlAxes, DroneBody},
    resources::PhysicsConfig,
    systems::flight::FlightModel,
};

/// Advances every drone by one physics tick using the axes currently
/// attached to it.
pub fn drone_flight_system(
    mut query: Query<(&mut DroneBody, &ControlAxes, &FlightModel)>,
    physics: Res<PhysicsConfig>,
) {
    let dt = physics.timestep;

    for (mut body, controls, model) in query.iter_mut() {
        model.step(&mut body, controls, dt);
    }
}
