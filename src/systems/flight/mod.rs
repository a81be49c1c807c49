mod altitude;
mod drone;
mod model;

pub use altitude::AltitudeHold;
pub use drone::drone_flight_system;
pub use model::{FlightHost, FlightModel};
