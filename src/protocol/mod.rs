mod act;
mod errors;
mod obs;
mod structures;

pub use act::{ActionConvention, ThrustRange, ToControls};
pub use errors::ProtocolError;
pub use obs::ToTelemetry;
pub use structures::{
    Command, ConfigSettings, ControlEcho, ControlMessage, Response, TelemetryFrame,
};
