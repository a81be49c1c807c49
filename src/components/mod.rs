pub mod controller;
pub mod drone;

pub use controller::PlayerController;
pub use drone::{ControlAxes, ControlSource, DroneBody, DroneConfig, FlightProfile, FlightState};
