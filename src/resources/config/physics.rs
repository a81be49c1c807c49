use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::DEFAULT_TIMESTEP;

/// Fixed simulation tick handed to the flight systems.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    pub timestep: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
        }
    }
}
