//! Gauge configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::units::Degrees;

/// Full mechanical sweep of a VID6608 / X27.168 in steps (320° at 12 steps/°).
pub const DEFAULT_MAX_STEPS: u16 = 320 * 12;

/// Steps per degree of needle travel for VID6608 / X27.168 motors.
pub const DEFAULT_STEPS_PER_DEGREE: f32 = 12.0;

/// Step delay used while zeroing, in microseconds.
pub const DEFAULT_ZERO_DELAY_US: u32 = 600;

/// Complete gauge configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct GaugeConfig {
    /// Human-readable name (max 32 chars). Empty means "use the table key".
    #[serde(default)]
    pub name: String<32>,

    /// Full mechanical sweep in steps.
    #[serde(default = "default_max_steps")]
    pub max_steps: u16,

    /// Steps per degree of needle travel.
    #[serde(default = "default_steps_per_degree")]
    pub steps_per_degree: f32,

    /// Constant step delay while zeroing, in microseconds.
    #[serde(default = "default_zero_delay_us")]
    pub zero_delay_us: u32,

    /// Best guess of the needle position at power-up, used by zeroing.
    ///
    /// Defaults to half the sweep.
    #[serde(default)]
    pub zero_start_estimate: Option<u16>,

    /// Invert direction pin logic.
    #[serde(default)]
    pub invert_direction: bool,

    /// Name of an entry under `[profiles]`; the built-in table when absent.
    #[serde(default)]
    pub profile: Option<String<32>>,
}

fn default_max_steps() -> u16 {
    DEFAULT_MAX_STEPS
}

fn default_steps_per_degree() -> f32 {
    DEFAULT_STEPS_PER_DEGREE
}

fn default_zero_delay_us() -> u32 {
    DEFAULT_ZERO_DELAY_US
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            max_steps: DEFAULT_MAX_STEPS,
            steps_per_degree: DEFAULT_STEPS_PER_DEGREE,
            zero_delay_us: DEFAULT_ZERO_DELAY_US,
            zero_start_estimate: None,
            invert_direction: false,
            profile: None,
        }
    }
}

impl GaugeConfig {
    /// Full sweep expressed in degrees.
    pub fn sweep_degrees(&self) -> Degrees {
        Degrees::from_steps(self.max_steps, self.steps_per_degree)
    }

    /// Power-up position estimate used by zeroing.
    pub fn zero_estimate(&self) -> u16 {
        self.zero_start_estimate.unwrap_or(self.max_steps / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sweep() {
        let config = GaugeConfig::default();
        assert_eq!(config.max_steps, 3840);
        assert!((config.sweep_degrees().value() - 320.0).abs() < 0.001);
        assert_eq!(config.zero_estimate(), 1920);
    }

    #[test]
    fn test_explicit_zero_estimate() {
        let config = GaugeConfig {
            zero_start_estimate: Some(100),
            ..GaugeConfig::default()
        };
        assert_eq!(config.zero_estimate(), 100);
    }
}
