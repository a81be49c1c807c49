use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::TELEMETRY_RATE_HZ;

/// Cadence of outbound state frames, independent of the tick rate.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub rate_hz: f64,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            rate_hz: TELEMETRY_RATE_HZ,
        }
    }
}

impl TelemetryConfig {
    pub fn period(&self) -> f64 {
        1.0 / self.rate_hz
    }
}

#[derive(Resource, Debug, Default)]
pub struct TelemetryState {
    /// Simulated seconds since the last frame went out
    pub since_last: f64,
    pub frames_sent: u64,
}
