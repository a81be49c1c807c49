pub mod errors;
pub mod physics;
pub mod session;
pub mod telemetry;

pub use errors::ConfigError;
pub use physics::PhysicsConfig;
pub use session::{SessionConfig, SessionConfigBuilder, UpdateMode};
pub use telemetry::{TelemetryConfig, TelemetryState};
