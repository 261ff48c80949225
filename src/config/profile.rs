//! Acceleration profile configuration.
//!
//! A profile is given either as an explicit table or as ramp parameters that
//! are expanded into a table while parsing, so every parsed profile can lend
//! a plain `&[AccelStep]` to a motor.

use serde::{Deserialize, Deserializer};

use crate::error::ConfigError;
use crate::motion::{cosine_ramp, AccelStep, AccelTable, MAX_TABLE_ROWS};

/// Parameters for a generated half-cosine ramp.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RampConfig {
    /// Distance in steps at which cruise speed is reached.
    pub distance: u16,
    /// Delay of the first step of a move, in microseconds.
    pub start_delay_us: u32,
    /// Delay on the cruise plateau, in microseconds.
    pub cruise_delay_us: u32,
    /// Number of table rows to generate.
    #[serde(default = "default_ramp_rows")]
    pub rows: usize,
}

fn default_ramp_rows() -> usize {
    16
}

/// A named acceleration profile, resolved to a table.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileConfig {
    table: AccelTable,
    ramp: Option<RampConfig>,
}

impl ProfileConfig {
    /// Build from explicit rows.
    ///
    /// Ordering is not checked here; see [`crate::config::validate_config`].
    pub fn from_table(rows: &[AccelStep]) -> Result<Self, ConfigError> {
        let table =
            AccelTable::from_slice(rows).map_err(|_| ConfigError::TableTooLong(rows.len()))?;
        Ok(Self { table, ramp: None })
    }

    /// Build by expanding ramp parameters.
    pub fn from_ramp(ramp: RampConfig) -> Result<Self, ConfigError> {
        if ramp.distance == 0 || ramp.rows == 0 || ramp.start_delay_us < ramp.cruise_delay_us {
            return Err(ConfigError::InvalidRamp);
        }
        if ramp.rows > MAX_TABLE_ROWS {
            return Err(ConfigError::TableTooLong(ramp.rows));
        }
        let table = cosine_ramp(
            ramp.distance,
            ramp.start_delay_us,
            ramp.cruise_delay_us,
            ramp.rows,
        );
        Ok(Self {
            table,
            ramp: Some(ramp),
        })
    }

    /// The resolved table.
    #[inline]
    pub fn table(&self) -> &[AccelStep] {
        &self.table
    }

    /// Ramp parameters, if the table was generated.
    #[inline]
    pub fn ramp(&self) -> Option<&RampConfig> {
        self.ramp.as_ref()
    }
}

/// Profile as written in TOML, before resolution.
#[derive(Deserialize)]
struct RawProfileConfig {
    #[serde(default)]
    table: Option<AccelTable>,
    #[serde(default)]
    ramp: Option<RampConfig>,
}

impl<'de> Deserialize<'de> for ProfileConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use core::fmt::Write;
        let raw = RawProfileConfig::deserialize(deserializer)?;
        let resolved = match (raw.table, raw.ramp) {
            (Some(table), None) => Ok(Self { table, ramp: None }),
            (None, Some(ramp)) => Self::from_ramp(ramp),
            _ => Err(ConfigError::InvalidProfileSource),
        };
        resolved.map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}
