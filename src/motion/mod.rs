//! Motion module for gauge-stepper.
//!
//! Provides the acceleration profile lookup and per-move step bookkeeping.

mod executor;
mod profile;

pub use executor::{Direction, MotionExecutor, MoveProgress};
pub use profile::{
    cosine_ramp, first_unsorted_row, AccelStep, AccelTable, AccelerationProfile,
    DEFAULT_ACCEL_TABLE, MAX_TABLE_ROWS,
};
