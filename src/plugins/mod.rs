mod drone;

pub use drone::{DronePlugin, DroneSet};
