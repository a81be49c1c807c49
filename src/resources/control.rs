use bevy::prelude::*;

use crate::components::ControlAxes;
use crate::protocol::ActionConvention;
use crate::utils::CONTROL_TIMEOUT;

#[derive(Debug, Clone, Copy, PartialEq)]
struct LatchedSample {
    axes: ControlAxes,
    received_at: f64,
}

/// Holds the most recent externally supplied control sample.
///
/// Messages arrive out of step with the simulation tick. The last one received
/// is consumed by every tick until it is older than `timeout`, after which the
/// latch reports neutral axes so a dropped link cannot leave the drone running
/// away on a stale command.
#[derive(Resource, Debug, Clone)]
pub struct ControlLatch {
    timeout: f64,
    latest: Option<LatchedSample>,
    stale: bool,
}

impl Default for ControlLatch {
    fn default() -> Self {
        Self::new(CONTROL_TIMEOUT)
    }
}

impl ControlLatch {
    pub fn new(timeout: f64) -> Self {
        Self {
            timeout,
            latest: None,
            stale: false,
        }
    }

    /// Stores a sample received at `now` (seconds). Non-finite samples are
    /// dropped and the previous sample stays latched.
    pub fn latch(&mut self, axes: ControlAxes, now: f64) -> bool {
        if !axes.is_finite() {
            warn!("Dropping non-finite control sample: {:?}", axes);
            return false;
        }
        if self.stale {
            info!("Control input resumed");
        }
        self.latest = Some(LatchedSample {
            axes: axes.clamped(),
            received_at: now,
        });
        self.stale = false;
        true
    }

    /// The sample to apply on a tick at `now`.
    pub fn sample(&mut self, now: f64) -> ControlAxes {
        match self.latest {
            Some(sample) if now - sample.received_at <= self.timeout => sample.axes,
            Some(sample) => {
                if !self.stale {
                    warn!(
                        "No control input for {:.2}s, falling back to neutral",
                        now - sample.received_at
                    );
                    self.stale = true;
                }
                ControlAxes::neutral()
            }
            None => ControlAxes::neutral(),
        }
    }

    pub fn is_stale(&self, now: f64) -> bool {
        self.latest
            .map_or(true, |sample| now - sample.received_at > self.timeout)
    }

    pub fn clear(&mut self) {
        self.latest = None;
        self.stale = false;
    }
}

/// Where the player drone takes its inputs from, and how remote clients
/// express them.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ControlSettings {
    pub external_control: bool,
    pub convention: ActionConvention,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            external_control: true,
            convention: ActionConvention::default(),
        }
    }
}
