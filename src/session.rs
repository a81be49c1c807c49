use nalgebra::Vector3;
use std::sync::Arc;

use crate::{
    components::{ControlAxes, ControlSource, DroneBody, DroneConfig},
    protocol::{ControlMessage, ProtocolError, TelemetryFrame, ToControls, ToTelemetry},
    resources::{ControlLatch, SimClock},
    systems::{FlightHost, FlightModel},
};

/// One drone flown without an engine: the caller owns the loop and feeds
/// control samples as they arrive.
///
/// Mirrors the Bevy session order. Each tick advances the clock, samples the
/// latch at the new time, then steps the flight model.
#[derive(Debug, Clone)]
pub struct DroneSession {
    model: Arc<FlightModel>,
    body: DroneBody,
    latch: ControlLatch,
    clock: SimClock,
    applied: ControlAxes,
}

impl DroneSession {
    pub fn new(config: DroneConfig, control_timeout: f64) -> Self {
        let model = FlightModel::new(config);
        let body = model.spawn_body(Vector3::zeros());
        Self {
            model: Arc::new(model),
            body,
            latch: ControlLatch::new(control_timeout),
            clock: SimClock::new(),
            applied: ControlAxes::neutral(),
        }
    }

    /// Latches a sample at the current simulation time.
    pub fn receive(&mut self, axes: ControlAxes) -> bool {
        self.latch.latch(axes, self.clock.elapsed_seconds())
    }

    /// Converts a network message with `convention` and latches it.
    pub fn receive_message<C: ToControls>(
        &mut self,
        message: &ControlMessage,
        convention: &C,
    ) -> Result<bool, ProtocolError> {
        let axes = convention.to_controls(message)?;
        Ok(self.receive(axes))
    }

    pub fn tick(&mut self, dt: f64) {
        if !(dt > 0.0) {
            return;
        }
        self.clock.advance(dt);
        let model = Arc::clone(&self.model);
        model.advance(self, dt);
    }

    pub fn body(&self) -> &DroneBody {
        &self.body
    }

    pub fn model(&self) -> &FlightModel {
        &self.model
    }

    /// Axes used on the most recent tick.
    pub fn applied(&self) -> ControlAxes {
        self.applied
    }

    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed_seconds()
    }

    pub fn is_input_stale(&self) -> bool {
        self.latch.is_stale(self.clock.elapsed_seconds())
    }

    /// Puts the drone back on the ground at `position` and forgets any
    /// latched input. The clock keeps running.
    pub fn reset(&mut self, position: Vector3<f64>) {
        self.body = self.model.spawn_body(position);
        self.latch.clear();
        self.applied = ControlAxes::neutral();
    }

    pub fn telemetry<T: ToTelemetry>(&self, convention: &T) -> TelemetryFrame {
        convention.to_telemetry(&self.body, &self.applied, self.clock.elapsed_millis())
    }
}

impl ControlSource for DroneSession {
    fn control_axes(&mut self) -> ControlAxes {
        self.applied = self.latch.sample(self.clock.elapsed_seconds());
        self.applied
    }
}

impl FlightHost for DroneSession {
    fn body_mut(&mut self) -> &mut DroneBody {
        &mut self.body
    }
}
