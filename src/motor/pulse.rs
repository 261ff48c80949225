//! Single step pulse generation.

use embedded_hal::digital::PinState;

use crate::error::Result;
use crate::motion::Direction;
use crate::port::PulsePort;

/// DIR setup hold before the first STEP edge after a direction change.
///
/// The driver needs > 100 ns; one millisecond leaves ample margin and only
/// happens on reversals.
pub const DIRECTION_SETUP_US: u32 = 1_000;

/// STEP low hold after the falling edge (driver minimum is 100 ns).
pub const STEP_LOW_HOLD_US: u32 = 1;

/// Emits step pulses over a [`PulsePort`] and caches the driven direction.
#[derive(Debug)]
pub struct StepPulser<P> {
    port: P,
    /// DIR level last written; `None` until the first pulse.
    last_driven: Option<Direction>,
    invert_direction: bool,
}

impl<P: PulsePort> StepPulser<P> {
    /// Wrap a port. The first pulse always writes the DIR line.
    pub fn new(port: P, invert_direction: bool) -> Self {
        Self {
            port,
            last_driven: None,
            invert_direction,
        }
    }

    /// Emit one step in `direction`, holding STEP high for `delay_us`.
    ///
    /// The DIR line is written only when the direction differs from the one
    /// last driven. Ends with a cooperative yield.
    pub fn pulse(&mut self, direction: Direction, delay_us: u32) -> Result<()> {
        if self.last_driven != Some(direction) {
            self.port
                .write_direction(direction.pin_state(self.invert_direction))?;
            self.last_driven = Some(direction);
            self.port.delay_us(DIRECTION_SETUP_US);
        }

        self.port.write_step(PinState::High)?;
        self.port.delay_us(delay_us);
        // The driver latches on the rising edge, so the low phase can be short.
        self.port.write_step(PinState::Low)?;
        self.port.delay_us(STEP_LOW_HOLD_US);

        self.port.yield_now();
        Ok(())
    }

    /// Drive both lines low, as after power-on, and forget the cached direction.
    pub fn reset_lines(&mut self) -> Result<()> {
        self.last_driven = None;
        self.port.write_step(PinState::Low)?;
        self.port.write_direction(PinState::Low)
    }

    /// Direction last written to the DIR line.
    #[inline]
    pub fn last_driven(&self) -> Option<Direction> {
        self.last_driven
    }

    /// Borrow the port.
    #[inline]
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Mutably borrow the port.
    #[inline]
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Give the port back.
    pub fn into_port(self) -> P {
        self.port
    }
}
