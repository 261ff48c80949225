//! Configuration validation.

use crate::error::{ConfigError, Error, Result};
use crate::motion::first_unsorted_row;

use super::{GaugeConfig, ProfileConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Gauges have a non-zero sweep, zero delay and steps-per-degree
/// - Gauge profile references exist
/// - Profile tables are non-empty and strictly increasing in distance
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    // Validate gauges
    for (name, gauge) in config.gauges.iter() {
        validate_gauge(name.as_str(), gauge, config)?;
    }

    // Validate profiles
    for (name, profile) in config.profiles.iter() {
        validate_profile(name.as_str(), profile)?;
    }

    Ok(())
}

fn validate_gauge(name: &str, gauge: &GaugeConfig, config: &SystemConfig) -> Result<()> {
    if gauge.max_steps == 0 {
        return Err(Error::Config(ConfigError::InvalidMaxSteps(gauge.max_steps)));
    }

    if gauge.zero_delay_us == 0 {
        return Err(Error::Config(ConfigError::InvalidZeroDelay(
            gauge.zero_delay_us,
        )));
    }

    // NaN fails this comparison too
    if !(gauge.steps_per_degree > 0.0) {
        return Err(Error::Config(ConfigError::InvalidStepsPerDegree(
            gauge.steps_per_degree,
        )));
    }

    // Profile must exist
    if let Some(ref profile) = gauge.profile {
        if config.profile(profile.as_str()).is_none() {
            return Err(Error::Config(ConfigError::ProfileNotFound {
                gauge: heapless::String::try_from(name).unwrap_or_default(),
                profile: profile.clone(),
            }));
        }
    }

    Ok(())
}

fn validate_profile(name: &str, profile: &ProfileConfig) -> Result<()> {
    let name_str =
        || -> heapless::String<32> { heapless::String::try_from(name).unwrap_or_default() };

    if profile.table().is_empty() {
        return Err(Error::Config(ConfigError::EmptyProfile(name_str())));
    }

    if let Some(index) = first_unsorted_row(profile.table()) {
        return Err(Error::Config(ConfigError::UnsortedProfile {
            profile: name_str(),
            index,
        }));
    }

    Ok(())
}
