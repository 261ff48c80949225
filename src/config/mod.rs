//! Configuration module for gauge-stepper.
//!
//! Provides types for loading and validating gauge and acceleration profile
//! configurations from TOML files (with `std` feature) or pre-parsed data.

mod gauge;
#[cfg(feature = "std")]
mod loader;
mod profile;
mod system;
pub mod units;
mod validation;

pub use gauge::{GaugeConfig, DEFAULT_MAX_STEPS, DEFAULT_STEPS_PER_DEGREE, DEFAULT_ZERO_DELAY_US};
pub use profile::{ProfileConfig, RampConfig};
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::Degrees;
