//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use gauge_stepper::load_config;
///
/// let config = load_config("gauges.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        Error::Config(ConfigError::IoError(bounded_message(&e.to_string())))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        Error::Config(ConfigError::ParseError(bounded_message(e.message())))
    })?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

/// Copy a message into an error payload, cut to fit.
fn bounded_message(msg: &str) -> heapless::String<128> {
    heapless::String::try_from(truncate(msg, 128)).unwrap_or_default()
}

/// Cut a message to at most `max` bytes on a char boundary.
fn truncate(msg: &str, max: usize) -> &str {
    if msg.len() <= max {
        return msg;
    }
    let mut end = max;
    while !msg.is_char_boundary(end) {
        end -= 1;
    }
    &msg[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[gauges.speedo]
name = "Speedometer"
"#;

        let config = parse_config(toml).unwrap();
        let gauge = config.gauge("speedo").unwrap();
        assert_eq!(gauge.max_steps, 3840);
        assert_eq!(gauge.zero_delay_us, 600);
    }

    #[test]
    fn test_parse_with_profile() {
        let toml = r#"
[gauges.tacho]
max_steps = 3780
profile = "quick"

[profiles.quick]
table = [
    { distance = 20, delay_us = 1500 },
    { distance = 200, delay_us = 250 },
]
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.profile("quick").unwrap().table().len(), 2);
    }

    #[test]
    fn test_unknown_profile_fails_validation() {
        let toml = r#"
[gauges.tacho]
profile = "missing"
"#;

        let result = parse_config(toml);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::ProfileNotFound { .. }))
        ));
    }

    #[test]
    fn test_both_profile_sources_is_parse_error() {
        let toml = r#"
[profiles.confused]
table = [{ distance = 20, delay_us = 1500 }]
ramp = { distance = 600, start_delay_us = 2500, cruise_delay_us = 400 }
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_long_message_is_cut_not_dropped() {
        let long = "x".repeat(300);
        let msg = bounded_message(&long);
        assert_eq!(msg.len(), 128);
        assert!(long.starts_with(msg.as_str()));

        let accented = "é".repeat(100);
        assert_eq!(bounded_message(&accented).len(), 128);
    }

    #[test]
    fn test_truncate_on_char_boundary() {
        assert_eq!(truncate("abc", 10), "abc");
        assert_eq!(truncate("aé", 2), "a");
    }
}
