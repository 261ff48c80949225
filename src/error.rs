//! Error types for gauge-stepper.
//!
//! Motion itself never fails: out-of-range targets are clamped and duplicate
//! requests are ignored. What remains are pin I/O failures and configuration
//! problems.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all gauge-stepper operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motor operation error
    Motor(MotorError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Gauge name not found in configuration
    GaugeNotFound(heapless::String<32>),
    /// Gauge references an acceleration profile that does not exist
    ProfileNotFound {
        /// Gauge name
        gauge: heapless::String<32>,
        /// Referenced profile name
        profile: heapless::String<32>,
    },
    /// Sweep length must be at least one step
    InvalidMaxSteps(u16),
    /// Calibration step delay must be > 0
    InvalidZeroDelay(u32),
    /// Steps per degree must be > 0
    InvalidStepsPerDegree(f32),
    /// Acceleration table has no rows
    EmptyProfile(heapless::String<32>),
    /// Acceleration table distances are not strictly increasing
    UnsortedProfile {
        /// Profile name
        profile: heapless::String<32>,
        /// Index of the first row that does not exceed its predecessor
        index: usize,
    },
    /// Profile must define exactly one of `table` or `ramp`
    InvalidProfileSource,
    /// Ramp parameters cannot produce a usable table
    InvalidRamp,
    /// Acceleration table exceeds the row capacity
    TableTooLong(usize),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motor operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// Pin operation failed
    PinError,
    /// Builder was finished without a pulse port
    MissingPort,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::GaugeNotFound(name) => write!(f, "Gauge '{}' not found", name),
            ConfigError::ProfileNotFound { gauge, profile } => {
                write!(f, "Gauge '{}' references unknown profile '{}'", gauge, profile)
            }
            ConfigError::InvalidMaxSteps(v) => write!(f, "Invalid max steps: {}. Must be >= 1", v),
            ConfigError::InvalidZeroDelay(v) => write!(f, "Invalid zero delay: {} us. Must be > 0", v),
            ConfigError::InvalidStepsPerDegree(v) => {
                write!(f, "Invalid steps per degree: {}. Must be > 0", v)
            }
            ConfigError::EmptyProfile(name) => write!(f, "Profile '{}' has no rows", name),
            ConfigError::UnsortedProfile { profile, index } => write!(
                f,
                "Profile '{}' row {} does not increase in distance",
                profile, index
            ),
            ConfigError::InvalidProfileSource => {
                write!(f, "Profile must define exactly one of 'table' or 'ramp'")
            }
            ConfigError::InvalidRamp => write!(
                f,
                "Invalid ramp: distance and rows must be > 0 and start delay >= cruise delay"
            ),
            ConfigError::TableTooLong(len) => write!(
                f,
                "Acceleration table has {} rows (max {})",
                len,
                crate::motion::MAX_TABLE_ROWS
            ),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
            MotorError::MissingPort => write!(f, "Pulse port is required"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}
