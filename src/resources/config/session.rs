use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    components::{DroneConfig, FlightProfile},
    protocol::{ActionConvention, ThrustRange},
    resources::ConfigError,
    utils::{CONTROL_TIMEOUT, DEFAULT_TIMESTEP, TELEMETRY_RATE_HZ},
};

/// How the session systems are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateMode {
    /// Continuous ticking on `FixedUpdate` at the physics timestep.
    #[default]
    RealTime,
    /// One tick per `App::update`, for scripted and test harnesses.
    Stepped,
}

/// Everything needed to stand up one drone session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub timestep: f64,
    pub update_mode: UpdateMode,
    pub drone: DroneConfig,
    /// Seconds a control sample stays valid
    pub control_timeout: f64,
    pub telemetry_rate_hz: f64,
    /// Take inputs from session commands instead of the keyboard
    pub external_control: bool,
    pub convention: ActionConvention,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
            update_mode: UpdateMode::RealTime,
            drone: DroneConfig::default(),
            control_timeout: CONTROL_TIMEOUT,
            telemetry_rate_hz: TELEMETRY_RATE_HZ,
            external_control: true,
            convention: ActionConvention::default(),
        }
    }
}

impl SessionConfig {
    pub fn from_json(json: &Value) -> Result<Self, ConfigError> {
        SessionConfigBuilder::from_json(json)?.build()
    }

    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config: SessionConfig = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(ConfigError::invalid("timestep", self.timestep));
        }
        if !(self.control_timeout.is_finite() && self.control_timeout > 0.0) {
            return Err(ConfigError::invalid(
                "control_timeout",
                self.control_timeout,
            ));
        }
        if !(self.telemetry_rate_hz.is_finite() && self.telemetry_rate_hz > 0.0) {
            return Err(ConfigError::invalid(
                "telemetry_rate_hz",
                self.telemetry_rate_hz,
            ));
        }
        if self.control_timeout < self.timestep {
            return Err(ConfigError::ValidationError(format!(
                "control_timeout {} is shorter than one tick of {}",
                self.control_timeout, self.timestep
            )));
        }
        if self.timestep > self.drone.max_timestep {
            warn!(
                "timestep {} exceeds the flight model limit {}, ticks will be clamped",
                self.timestep, self.drone.max_timestep
            );
        }
        self.drone.validate()
    }
}

#[derive(Default, Debug, Clone)]
pub struct SessionConfigBuilder {
    pub timestep: Option<f64>,
    pub update_mode: Option<UpdateMode>,
    pub profile: Option<FlightProfile>,
    pub drone: Option<Value>,
    pub control_timeout: Option<f64>,
    pub telemetry_rate_hz: Option<f64>,
    pub external_control: Option<bool>,
    pub convention: Option<ActionConvention>,
}

impl SessionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timestep(mut self, dt: f64) -> Self {
        self.timestep = Some(dt);
        self
    }

    pub fn update_mode(mut self, mode: UpdateMode) -> Self {
        self.update_mode = Some(mode);
        self
    }

    pub fn profile(mut self, profile: FlightProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Overrides applied on top of the profile's drone constants.
    pub fn drone_overrides(mut self, overrides: Value) -> Self {
        self.drone = Some(overrides);
        self
    }

    pub fn control_timeout(mut self, timeout: f64) -> Self {
        self.control_timeout = Some(timeout);
        self
    }

    pub fn telemetry_rate_hz(mut self, rate: f64) -> Self {
        self.telemetry_rate_hz = Some(rate);
        self
    }

    pub fn external_control(mut self, enabled: bool) -> Self {
        self.external_control = Some(enabled);
        self
    }

    pub fn convention(mut self, convention: ActionConvention) -> Self {
        self.convention = Some(convention);
        self
    }

    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        let mut builder = Self::new();

        if let Some(timestep) = value.get("timestep").and_then(|v| v.as_f64()) {
            builder = builder.timestep(timestep);
        }

        if let Some(mode) = value.get("update_mode") {
            builder = builder.update_mode(serde_json::from_value(mode.clone())?);
        }

        if let Some(profile) = value.get("profile") {
            builder = builder.profile(serde_json::from_value(profile.clone())?);
        }

        if let Some(drone) = value.get("drone") {
            if !drone.is_object() {
                return Err(ConfigError::invalid("drone", drone));
            }
            builder = builder.drone_overrides(drone.clone());
        }

        if let Some(timeout) = value.get("control_timeout").and_then(|v| v.as_f64()) {
            builder = builder.control_timeout(timeout);
        }

        if let Some(rate) = value.get("telemetry_rate_hz").and_then(|v| v.as_f64()) {
            builder = builder.telemetry_rate_hz(rate);
        }

        if let Some(external) = value.get("external_control").and_then(|v| v.as_bool()) {
            builder = builder.external_control(external);
        }

        if let Some(convention) = value.get("convention") {
            let mut parsed = ActionConvention::default();
            if let Some(thrust) = convention.get("thrust") {
                parsed.thrust = serde_json::from_value::<ThrustRange>(thrust.clone())?;
            }
            if let Some(invert) = convention.get("invert_pitch").and_then(|v| v.as_bool()) {
                parsed.invert_pitch = invert;
            }
            builder = builder.convention(parsed);
        }

        Ok(builder)
    }

    pub fn build(self) -> Result<SessionConfig, ConfigError> {
        let mut config = SessionConfig::default();

        if let Some(timestep) = self.timestep {
            config.timestep = timestep;
        }
        if let Some(mode) = self.update_mode {
            config.update_mode = mode;
        }

        let base = DroneConfig::with_profile(self.profile.unwrap_or_default());
        config.drone = match self.drone {
            Some(overrides) => merge_drone_overrides(base, overrides)?,
            None => base,
        };

        if let Some(timeout) = self.control_timeout {
            config.control_timeout = timeout;
        }
        if let Some(rate) = self.telemetry_rate_hz {
            config.telemetry_rate_hz = rate;
        }
        if let Some(external) = self.external_control {
            config.external_control = external;
        }
        if let Some(convention) = self.convention {
            config.convention = convention;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Lays the override object over the serialized base so unspecified fields keep
/// the profile's values.
fn merge_drone_overrides(base: DroneConfig, overrides: Value) -> Result<DroneConfig, ConfigError> {
    let mut merged = serde_json::to_value(base)?;
    if let (Some(target), Value::Object(fields)) = (merged.as_object_mut(), overrides) {
        for (key, value) in fields {
            target.insert(key, value);
        }
    }
    Ok(serde_json::from_value(merged)?)
}
