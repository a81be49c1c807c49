pub mod components;
pub mod plugins;
pub mod protocol;
pub mod resources;
pub mod session;
pub mod systems;
pub mod utils;

pub use components::{ControlAxes, DroneBody, DroneConfig, FlightState};
pub use session::DroneSession;
pub use systems::FlightModel;
