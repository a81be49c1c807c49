mod controller;
pub mod flight;
mod session;

pub use controller::{axes_from_keys, external_control_system, keyboard_control_system};
pub use flight::{drone_flight_system, AltitudeHold, FlightHost, FlightModel};
pub use session::{advance_clock_system, handle_commands_system, telemetry_system};
