use bevy::prelude::*;

/// Marks the drone that local input and session commands act on.
#[derive(Component, Debug, Default)]
pub struct PlayerController {
    pub active: bool,
}

impl PlayerController {
    pub fn new() -> Self {
        Self { active: true }
    }
}
