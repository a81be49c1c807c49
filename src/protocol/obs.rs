use crate::{
    components::{ControlAxes, DroneBody},
    protocol::{ActionConvention, TelemetryFrame},
    utils::Xyz,
};

/// Snapshots a drone into an outbound telemetry frame.
pub trait ToTelemetry {
    fn to_telemetry(&self, body: &DroneBody, applied: &ControlAxes, timestamp: u64)
        -> TelemetryFrame;
}

impl ToTelemetry for ActionConvention {
    fn to_telemetry(
        &self,
        body: &DroneBody,
        applied: &ControlAxes,
        timestamp: u64,
    ) -> TelemetryFrame {
        TelemetryFrame {
            position: body.position.into(),
            rotation: Xyz::new(body.pitch, body.yaw, body.roll),
            velocity: body.velocity.into(),
            angular_velocity: body.angular_velocity.into(),
            controls: self.from_axes(applied),
            is_flying: body.is_flying(),
            timestamp,
        }
    }
}
