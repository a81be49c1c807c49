pub const GRAVITY: f64 = 9.81; // m/s^2

pub const MAX_TIMESTEP: f64 = 1.0 / 30.0; // Largest step the flight model will integrate
pub const DEFAULT_TIMESTEP: f64 = 1.0 / 60.0; // Simulation tick

pub const CONTROL_TIMEOUT: f64 = 1.0; // s without a control message before inputs go neutral
pub const TELEMETRY_RATE_HZ: f64 = 10.0;

pub const FULL_TURN_DEG: f64 = 360.0;
