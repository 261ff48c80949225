//! Motor module for gauge-stepper.
//!
//! Provides the gauge motor controller, its builder, pulse generation and
//! end-stop zeroing.

mod builder;
mod calibration;
mod driver;
mod pulse;
mod state;

pub use builder::GaugeMotorBuilder;
pub use calibration::ZeroPlan;
pub use driver::GaugeMotor;
pub use pulse::{StepPulser, DIRECTION_SETUP_US, STEP_LOW_HOLD_US};
pub use state::MotionState;
