//! Builder pattern for GaugeMotor.

use crate::config::{
    GaugeConfig, SystemConfig, DEFAULT_MAX_STEPS, DEFAULT_STEPS_PER_DEGREE,
    DEFAULT_ZERO_DELAY_US,
};
use crate::error::{ConfigError, Error, MotorError, Result};
use crate::motion::{AccelStep, AccelerationProfile, DEFAULT_ACCEL_TABLE};
use crate::port::PulsePort;

use super::driver::GaugeMotor;
use super::pulse::StepPulser;

/// Builder for creating GaugeMotor instances.
pub struct GaugeMotorBuilder<'a, P: PulsePort> {
    port: Option<P>,
    name: Option<heapless::String<32>>,
    max_steps: u16,
    steps_per_degree: f32,
    invert_direction: bool,
    zero_delay_us: u32,
    zero_estimate: Option<u16>,
    profile: &'a [AccelStep],
}

impl<'a, P: PulsePort> Default for GaugeMotorBuilder<'a, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, P: PulsePort> GaugeMotorBuilder<'a, P> {
    /// Create a new builder with VID6608 defaults.
    pub fn new() -> Self {
        Self {
            port: None,
            name: None,
            max_steps: DEFAULT_MAX_STEPS,
            steps_per_degree: DEFAULT_STEPS_PER_DEGREE,
            invert_direction: false,
            zero_delay_us: DEFAULT_ZERO_DELAY_US,
            zero_estimate: None,
            profile: &DEFAULT_ACCEL_TABLE,
        }
    }

    /// Set the pulse port.
    pub fn port(mut self, port: P) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the motor name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set the full sweep in steps.
    pub fn max_steps(mut self, steps: u16) -> Self {
        self.max_steps = steps;
        self
    }

    /// Set steps per degree for the degree API.
    pub fn steps_per_degree(mut self, ratio: f32) -> Self {
        self.steps_per_degree = ratio;
        self
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Set the step delay used by `zero_default`.
    pub fn zero_delay_us(mut self, delay_us: u32) -> Self {
        self.zero_delay_us = delay_us;
        self
    }

    /// Set the power-up position estimate used by zeroing.
    pub fn zero_start_estimate(mut self, steps: u16) -> Self {
        self.zero_estimate = Some(steps);
        self
    }

    /// Set the acceleration table (not validated).
    pub fn profile(mut self, table: &'a [AccelStep]) -> Self {
        self.profile = table;
        self
    }

    /// Configure from a GaugeConfig.
    ///
    /// The profile reference is resolved by [`from_config`](Self::from_config).
    pub fn from_gauge_config(mut self, config: &GaugeConfig) -> Self {
        if !config.name.is_empty() {
            self.name = Some(config.name.clone());
        }
        self.max_steps = config.max_steps;
        self.steps_per_degree = config.steps_per_degree;
        self.invert_direction = config.invert_direction;
        self.zero_delay_us = config.zero_delay_us;
        self.zero_estimate = config.zero_start_estimate;
        self
    }

    /// Configure from SystemConfig by gauge name, including its profile.
    pub fn from_config(mut self, config: &'a SystemConfig, gauge_name: &str) -> Result<Self> {
        let gauge = config.gauge(gauge_name).ok_or_else(|| {
            Error::Config(ConfigError::GaugeNotFound(
                heapless::String::try_from(gauge_name).unwrap_or_default(),
            ))
        })?;

        if gauge.name.is_empty() {
            self.name = heapless::String::try_from(gauge_name).ok();
        }

        if let Some(ref profile_name) = gauge.profile {
            let profile = config.profile(profile_name.as_str()).ok_or_else(|| {
                Error::Config(ConfigError::ProfileNotFound {
                    gauge: heapless::String::try_from(gauge_name).unwrap_or_default(),
                    profile: profile_name.clone(),
                })
            })?;
            self.profile = profile.table();
        }

        Ok(self.from_gauge_config(gauge))
    }

    /// Build the GaugeMotor and drive both lines low.
    ///
    /// # Errors
    ///
    /// Returns an error if no port was given or a pin write fails.
    pub fn build(self) -> Result<GaugeMotor<'a, P>> {
        let port = self.port.ok_or(Error::Motor(MotorError::MissingPort))?;

        let mut pulser = StepPulser::new(port, self.invert_direction);
        pulser.reset_lines()?;

        let mut motor = GaugeMotor::from_parts(
            pulser,
            AccelerationProfile::new(self.profile),
            self.max_steps,
        );
        motor.steps_per_degree = self.steps_per_degree;
        motor.zero_delay_us = self.zero_delay_us;
        motor.zero_estimate = self.zero_estimate;
        if let Some(name) = self.name {
            motor.name = name;
        }
        Ok(motor)
    }
}
