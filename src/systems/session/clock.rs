use bevy::prelude::*;

use crate::resources::{PhysicsConfig, SimClock};

pub fn advance_clock_system(mut clock: ResMut<SimClock>, physics: Res<PhysicsConfig>) {
    clock.advance(physics.timestep);
}
