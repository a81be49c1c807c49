pub mod config;
mod control;
mod link;
mod time;

pub use config::{
    ConfigError, PhysicsConfig, SessionConfig, SessionConfigBuilder, TelemetryConfig,
    TelemetryState, UpdateMode,
};
pub use control::{ControlLatch, ControlSettings};
pub use link::{SessionEndpoint, SessionLink};
pub use time::SimClock;
