use bevy::prelude::*;

use crate::{
    components::{ControlAxes, PlayerController},
    resources::{ControlLatch, ControlSettings, SimClock},
};

/// Feeds the latched remote sample to the player drone while external control
/// is on. A stale latch yields neutral axes.
pub fn external_control_system(
    mut query: Query<(&mut ControlAxes, &PlayerController)>,
    mut latch: ResMut<ControlLatch>,
    settings: Res<ControlSettings>,
    clock: Res<SimClock>,
) {
    if !settings.external_control {
        return;
    }

    let axes = latch.sample(clock.elapsed_seconds());
    for (mut controls, player) in query.iter_mut() {
        if player.active {
            *controls = axes;
        }
    }
}
