//! Hardware boundary: two output lines, a microsecond delay and a yield hook.
//!
//! The motion core only talks to [`PulsePort`]. [`PinPort`] implements it on
//! top of embedded-hal 1.0 `OutputPin` and `DelayNs`; hosts with other timing
//! or scheduling primitives can implement the trait directly.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use crate::error::{MotorError, Result};

/// Output lines and timing primitives consumed by the motion core.
pub trait PulsePort {
    /// Drive the STEP line.
    fn write_step(&mut self, state: PinState) -> Result<()>;

    /// Drive the DIR line.
    fn write_direction(&mut self, state: PinState) -> Result<()>;

    /// Block for `us` microseconds.
    fn delay_us(&mut self, us: u32);

    /// Hand control to other cooperative work after each step pulse.
    ///
    /// Must return promptly. The default does nothing.
    fn yield_now(&mut self) {}
}

impl<P: PulsePort + ?Sized> PulsePort for &mut P {
    fn write_step(&mut self, state: PinState) -> Result<()> {
        (**self).write_step(state)
    }

    fn write_direction(&mut self, state: PinState) -> Result<()> {
        (**self).write_direction(state)
    }

    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us)
    }

    fn yield_now(&mut self) {
        (**self).yield_now()
    }
}

/// Cooperative yield hook used by [`PinPort`].
pub trait Yield {
    /// Let other pending work run.
    fn yield_now(&mut self);
}

/// Yield hook for bare loops with nothing else to run.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoYield;

impl Yield for NoYield {
    #[inline]
    fn yield_now(&mut self) {}
}

/// Adapts a closure into a [`Yield`] hook.
#[derive(Debug, Clone, Copy)]
pub struct YieldFn<F>(pub F);

impl<F: FnMut()> Yield for YieldFn<F> {
    #[inline]
    fn yield_now(&mut self) {
        (self.0)()
    }
}

/// [`PulsePort`] over embedded-hal pins and delay.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
/// - `Y`: Cooperative yield hook (defaults to [`NoYield`])
pub struct PinPort<STEP, DIR, DELAY, Y = NoYield> {
    step_pin: STEP,
    dir_pin: DIR,
    delay: DELAY,
    yielder: Y,
}

impl<STEP, DIR, DELAY> PinPort<STEP, DIR, DELAY, NoYield>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Create a port that never yields.
    pub fn new(step_pin: STEP, dir_pin: DIR, delay: DELAY) -> Self {
        Self {
            step_pin,
            dir_pin,
            delay,
            yielder: NoYield,
        }
    }
}

impl<STEP, DIR, DELAY, Y> PinPort<STEP, DIR, DELAY, Y>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    Y: Yield,
{
    /// Replace the yield hook.
    pub fn with_yield<Y2: Yield>(self, yielder: Y2) -> PinPort<STEP, DIR, DELAY, Y2> {
        PinPort {
            step_pin: self.step_pin,
            dir_pin: self.dir_pin,
            delay: self.delay,
            yielder,
        }
    }

    /// Give the pins and delay back.
    pub fn release(self) -> (STEP, DIR, DELAY) {
        (self.step_pin, self.dir_pin, self.delay)
    }
}

impl<STEP, DIR, DELAY, Y> PulsePort for PinPort<STEP, DIR, DELAY, Y>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    Y: Yield,
{
    fn write_step(&mut self, state: PinState) -> Result<()> {
        self.step_pin
            .set_state(state)
            .map_err(|_| MotorError::PinError.into())
    }

    fn write_direction(&mut self, state: PinState) -> Result<()> {
        self.dir_pin
            .set_state(state)
            .map_err(|_| MotorError::PinError.into())
    }

    #[inline]
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    #[inline]
    fn yield_now(&mut self) {
        self.yielder.yield_now();
    }
}
