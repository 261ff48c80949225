//! # gauge-stepper
//!
//! Non-blocking positioning of VID6608 / X27.168 instrument-gauge stepper
//! motors with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Cooperative**: [`GaugeMotor::update`] emits at most one step per call
//! - **Distance-based acceleration**: step delay looked up from the distance
//!   to the nearer end of the move, so ramps are symmetric
//! - **End-stop zeroing**: no position sensor required
//! - **embedded-hal 1.0**: Uses `OutputPin` for STEP/DIR, `DelayNs` for timing
//! - **no_std compatible**: Core library works without standard library
//! - **Configuration-driven**: Define gauges and acceleration tables in TOML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gauge_stepper::{GaugeMotor, PinPort};
//!
//! let port = PinPort::new(step_pin, dir_pin, delay);
//! let mut gauge = GaugeMotor::builder().port(port).build()?;
//!
//! // Find the end-stop once after power-up
//! gauge.zero_default()?;
//!
//! gauge.schedule_move(1200);
//! loop {
//!     gauge.update()?;
//!     // ... other cooperative work
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod motion;
pub mod motor;
pub mod port;

// Re-exports for ergonomic API
pub use config::{validate_config, GaugeConfig, ProfileConfig, SystemConfig};
pub use error::{Error, Result};
pub use motion::{AccelStep, AccelerationProfile, Direction, DEFAULT_ACCEL_TABLE};
pub use motor::{GaugeMotor, GaugeMotorBuilder, MotionState, ZeroPlan};
pub use port::{PinPort, PulsePort};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Degrees, UnitExt};
