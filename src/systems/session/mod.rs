mod clock;
mod commands;
mod telemetry;

pub use clock::advance_clock_system;
pub use commands::handle_commands_system;
pub use telemetry::telemetry_system;
