use bevy::prelude::*;

/// Simulated time, advanced one fixed tick at a time.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct SimClock {
    elapsed: f64,
    tick_count: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, dt: f64) {
        self.elapsed += dt;
        self.tick_count += 1;
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    pub fn elapsed_millis(&self) -> u64 {
        (self.elapsed * 1000.0).round() as u64
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
