pub mod config;
pub mod controls;
pub mod state;

pub use config::{DroneConfig, FlightProfile};
pub use controls::{ControlAxes, ControlSource};
pub use state::{DroneBody, FlightState};
