use bevy::prelude::*;

use crate::{
    components::{ControlAxes, PlayerController},
    resources::ControlSettings,
};

fn axis(keyboard: &ButtonInput<KeyCode>, positive: KeyCode, negative: KeyCode) -> f64 {
    let mut value = 0.0;
    if keyboard.pressed(positive) {
        value += 1.0;
    }
    if keyboard.pressed(negative) {
        value -= 1.0;
    }
    value
}

/// Full-deflection axes from the held keys.
///
/// W/S fly forward and back, D/A strafe, E/Q turn, Space climbs and left
/// shift descends.
pub fn axes_from_keys(keyboard: &ButtonInput<KeyCode>) -> ControlAxes {
    ControlAxes::new(
        axis(keyboard, KeyCode::KeyW, KeyCode::KeyS),
        axis(keyboard, KeyCode::KeyD, KeyCode::KeyA),
        axis(keyboard, KeyCode::KeyE, KeyCode::KeyQ),
        axis(keyboard, KeyCode::Space, KeyCode::ShiftLeft),
    )
}

/// Drives the player drone from the keyboard while external control is off.
///
/// Headless apps have no input resource, in which case the drone gets neutral
/// axes.
pub fn keyboard_control_system(
    mut query: Query<(&mut ControlAxes, &PlayerController)>,
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    settings: Res<ControlSettings>,
) {
    if settings.external_control {
        return;
    }
    let axes = keyboard
        .map(|keyboard| axes_from_keys(&keyboard))
        .unwrap_or_default();
    for (mut controls, player) in query.iter_mut() {
        if player.active {
            *controls = axes;
        }
    }
}
