//! Zeroing against the mechanical end-stops.
//!
//! The gauge has no position sensor. Zeroing drives the needle forward by the
//! distance it could still travel from its estimated position, then backward
//! by a full sweep. The backward stop is reached whatever the real starting
//! point was, and the needle hits it once instead of chattering against it
//! for most of the sweep.

use crate::error::Result;
use crate::motion::Direction;
use crate::port::PulsePort;

use super::driver::GaugeMotor;

/// Step counts for one zeroing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZeroPlan {
    /// Raw forward steps of the first phase.
    pub forward_steps: u16,
    /// Raw backward steps of the second phase (always the full sweep).
    pub backward_steps: u16,
}

impl ZeroPlan {
    /// Plan zeroing for a sweep of `max_steps` from an estimated position.
    ///
    /// The estimate is clamped to `max_steps - 1`.
    pub fn new(max_steps: u16, initial_estimate: u16) -> Self {
        let max_steps = max_steps.max(1);
        let estimate = initial_estimate.min(max_steps - 1);
        Self {
            forward_steps: max_steps - estimate,
            backward_steps: max_steps,
        }
    }

    /// Total pulses emitted by the run.
    #[inline]
    pub fn total_steps(&self) -> u32 {
        u32::from(self.forward_steps) + u32::from(self.backward_steps)
    }
}

impl<'a, P: PulsePort> GaugeMotor<'a, P> {
    /// Zero from the configured position estimate (blocking).
    ///
    /// See [`zero_from`](Self::zero_from).
    pub fn zero(&mut self, step_delay_us: u32) -> Result<()> {
        self.zero_from(self.zero_estimate(), step_delay_us)
    }

    /// Zero with the configured estimate and step delay (blocking).
    pub fn zero_default(&mut self) -> Result<()> {
        self.zero(self.zero_delay_us)
    }

    /// Drive against the backward end-stop and reset the position to 0.
    ///
    /// Blocks for the whole run: every step uses the constant
    /// `step_delay_us`, bypassing the acceleration profile. Any move in
    /// progress or pending is discarded. Open-loop: a stalled needle is not
    /// detected.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin write fails. Position bookkeeping is then
    /// left as it was before the call.
    pub fn zero_from(&mut self, initial_estimate: u16, step_delay_us: u32) -> Result<()> {
        let plan = ZeroPlan::new(self.max_steps, initial_estimate);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "{}: zeroing, {} forward + {} backward steps at {} us",
            self.name,
            plan.forward_steps,
            plan.backward_steps,
            step_delay_us
        );

        for _ in 0..plan.forward_steps {
            self.pulser.pulse(Direction::Forward, step_delay_us)?;
        }
        for _ in 0..plan.backward_steps {
            self.pulser.pulse(Direction::Backward, step_delay_us)?;
        }

        self.position = 0;
        self.target = 0;
        self.pending = 0;
        self.executor = None;

        #[cfg(feature = "defmt")]
        defmt::info!("{}: zeroed", self.name);

        Ok(())
    }

    /// Power-up position estimate used by [`zero`](Self::zero).
    ///
    /// Half the sweep unless configured otherwise.
    #[inline]
    pub fn zero_estimate(&self) -> u16 {
        self.zero_estimate.unwrap_or(self.max_steps / 2)
    }

    /// Step delay used by [`zero_default`](Self::zero_default).
    #[inline]
    pub fn zero_delay_us(&self) -> u32 {
        self.zero_delay_us
    }
}
