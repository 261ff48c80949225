//! Gauge motor controller.
//!
//! Cooperative, non-blocking positioning: [`GaugeMotor::update`] emits at most
//! one step per call, so the host loop regains control after every step.

use crate::config::units::Degrees;
use crate::config::{DEFAULT_MAX_STEPS, DEFAULT_STEPS_PER_DEGREE, DEFAULT_ZERO_DELAY_US};
use crate::error::Result;
use crate::motion::{AccelStep, AccelerationProfile, Direction, MotionExecutor, MoveProgress};
use crate::port::PulsePort;

use super::builder::GaugeMotorBuilder;
use super::pulse::StepPulser;
use super::state::MotionState;

/// Step/direction gauge motor with a distance-based acceleration profile.
///
/// Positions are absolute steps in `0..max_steps`, counted open-loop from the
/// last [`zero`](GaugeMotor::zero). The acceleration table is borrowed for
/// `'a`; the built-in table is `'static`.
pub struct GaugeMotor<'a, P: PulsePort> {
    /// Step pulse generator and DIR cache.
    pub(super) pulser: StepPulser<P>,

    /// Current acceleration table.
    pub(super) profile: AccelerationProfile<'a>,

    /// Full sweep in steps.
    pub(super) max_steps: u16,

    /// Physical position, updated one step at a time.
    pub(super) position: u16,

    /// Target of the move in progress (or of the last move).
    pub(super) target: u16,

    /// Last requested target, latched only while idle.
    pub(super) pending: u16,

    /// Active move; `Some` exactly while moving.
    pub(super) executor: Option<MotionExecutor>,

    /// Conversion factor for the degree API.
    pub(super) steps_per_degree: f32,

    /// Step delay used by [`GaugeMotor::zero_default`].
    pub(super) zero_delay_us: u32,

    /// Power-up position estimate used by zeroing.
    pub(super) zero_estimate: Option<u16>,

    /// Motor name for logging/debugging.
    pub(super) name: heapless::String<32>,
}

impl<P: PulsePort> GaugeMotor<'static, P> {
    /// Create a motor with the default sweep and built-in acceleration table.
    ///
    /// The lines are not touched until the first step.
    pub fn new(port: P) -> Self {
        Self::with_max_steps(port, DEFAULT_MAX_STEPS)
    }

    /// Create a motor with a custom sweep length (at least one step).
    pub fn with_max_steps(port: P, max_steps: u16) -> Self {
        Self::from_parts(
            StepPulser::new(port, false),
            AccelerationProfile::default(),
            max_steps,
        )
    }
}

impl<'a, P: PulsePort> GaugeMotor<'a, P> {
    pub(super) fn from_parts(
        pulser: StepPulser<P>,
        profile: AccelerationProfile<'a>,
        max_steps: u16,
    ) -> Self {
        Self {
            pulser,
            profile,
            max_steps: max_steps.max(1),
            position: 0,
            target: 0,
            pending: 0,
            executor: None,
            steps_per_degree: DEFAULT_STEPS_PER_DEGREE,
            zero_delay_us: DEFAULT_ZERO_DELAY_US,
            zero_estimate: None,
            name: heapless::String::try_from("gauge").unwrap_or_default(),
        }
    }

    /// Create a builder for configuring a motor.
    pub fn builder() -> GaugeMotorBuilder<'a, P> {
        GaugeMotorBuilder::new()
    }

    /// Get the motor name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Full sweep in steps.
    #[inline]
    pub fn max_steps(&self) -> u16 {
        self.max_steps
    }

    /// Current position in steps.
    #[inline]
    pub fn position(&self) -> u16 {
        self.position
    }

    /// Current position in degrees.
    #[inline]
    pub fn position_degrees(&self) -> Degrees {
        Degrees::from_steps(self.position, self.steps_per_degree)
    }

    /// Target of the move in progress, or of the last completed move.
    #[inline]
    pub fn target(&self) -> u16 {
        self.target
    }

    /// Most recently requested target.
    #[inline]
    pub fn pending_target(&self) -> u16 {
        self.pending
    }

    /// Current motion state.
    #[inline]
    pub fn state(&self) -> MotionState {
        if self.executor.is_some() {
            MotionState::Moving
        } else {
            MotionState::Idle
        }
    }

    /// Check if a move is in progress.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.state() == MotionState::Moving
    }

    /// Check if the motor is at rest.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        !self.is_moving()
    }

    /// Direction of the move in progress.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.executor.as_ref().map(MotionExecutor::direction)
    }

    /// Step counters of the move in progress.
    #[inline]
    pub fn progress(&self) -> Option<MoveProgress> {
        self.executor.as_ref().map(MotionExecutor::progress)
    }

    /// Direction last written to the DIR line.
    #[inline]
    pub fn last_driven_direction(&self) -> Option<Direction> {
        self.pulser.last_driven()
    }

    /// The active acceleration profile.
    #[inline]
    pub fn profile(&self) -> &AccelerationProfile<'a> {
        &self.profile
    }

    /// Steps per degree used by the degree API.
    #[inline]
    pub fn steps_per_degree(&self) -> f32 {
        self.steps_per_degree
    }

    /// Borrow the pulse port.
    #[inline]
    pub fn port(&self) -> &P {
        self.pulser.port()
    }

    /// Mutably borrow the pulse port.
    #[inline]
    pub fn port_mut(&mut self) -> &mut P {
        self.pulser.port_mut()
    }

    /// Give the pulse port back.
    pub fn into_port(self) -> P {
        self.pulser.into_port()
    }

    /// Replace the acceleration table.
    ///
    /// Applies from the next step on. The table is not validated: it must be
    /// non-empty and strictly ascending in distance, otherwise step delays are
    /// unspecified.
    pub fn set_acceleration_profile(&mut self, table: &'a [AccelStep]) {
        self.profile = AccelerationProfile::new(table);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "{}: profile set, {} rows, cruise {} us from {} steps",
            self.name,
            table.len(),
            self.profile.cruise_delay_us(),
            self.profile.max_distance()
        );
    }

    /// Request a move to an absolute step position.
    ///
    /// The position is clamped to the sweep. Requesting the already pending
    /// position again is a no-op. Nothing moves until [`update`](Self::update)
    /// runs while idle; a move in progress always finishes first.
    pub fn schedule_move(&mut self, position: i32) {
        let position = position.clamp(0, i32::from(self.max_steps) - 1) as u16;
        if position == self.pending {
            return;
        }
        self.pending = position;
    }

    /// Request a move to a needle angle, rounded to the nearest step.
    pub fn schedule_move_degrees(&mut self, angle: Degrees) {
        self.schedule_move(angle.to_steps(self.steps_per_degree));
    }

    /// Advance the motion state machine by at most one step.
    ///
    /// Must be called on every iteration of the host loop. While idle, a
    /// pending target different from the current one starts a new move.
    /// While moving, one pulse is emitted with the delay the profile gives
    /// for the distance to the nearer move endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin write fails; the step is then not counted.
    pub fn update(&mut self) -> Result<()> {
        if self.executor.is_none() && self.pending != self.target {
            self.target = self.pending;
            self.executor = MotionExecutor::new(self.position, self.target);

            #[cfg(feature = "defmt")]
            if self.executor.is_some() {
                defmt::debug!(
                    "{}: move {} -> {}",
                    self.name,
                    self.position,
                    self.target
                );
            }
        }

        let Some(executor) = self.executor.as_mut() else {
            return Ok(());
        };

        let direction = executor.direction();
        let delay_us = self.profile.delay_for(executor.accel_distance());
        self.pulser.pulse(direction, delay_us)?;

        executor.advance();
        self.position = match direction {
            Direction::Forward => self.position + 1,
            Direction::Backward => self.position - 1,
        };

        if self.position == self.target {
            self.executor = None;

            #[cfg(feature = "defmt")]
            defmt::debug!("{}: reached {}", self.name, self.position);
        }

        Ok(())
    }

    /// Call [`update`](Self::update) until idle with nothing pending (blocking).
    pub fn run_to_target(&mut self) -> Result<()> {
        while self.is_moving() || self.pending != self.target {
            self.update()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::PinState;

    /// Counts pulses and DIR writes without timing.
    #[derive(Default)]
    struct CountingPort {
        rising_edges: u32,
        dir_writes: u32,
        delays: u32,
    }

    impl PulsePort for CountingPort {
        fn write_step(&mut self, state: PinState) -> Result<()> {
            if state == PinState::High {
                self.rising_edges += 1;
            }
            Ok(())
        }

        fn write_direction(&mut self, _state: PinState) -> Result<()> {
            self.dir_writes += 1;
            Ok(())
        }

        fn delay_us(&mut self, _us: u32) {
            self.delays += 1;
        }
    }

    #[test]
    fn test_new_motor_is_idle_at_zero() {
        let motor = GaugeMotor::new(CountingPort::default());
        assert_eq!(motor.position(), 0);
        assert_eq!(motor.max_steps(), 3840);
        assert!(motor.is_stopped());
        assert_eq!(motor.last_driven_direction(), None);
    }

    #[test]
    fn test_schedule_does_not_move() {
        let mut motor = GaugeMotor::new(CountingPort::default());
        motor.schedule_move(10);
        assert!(motor.is_stopped());
        assert_eq!(motor.pending_target(), 10);
        assert_eq!(motor.port().rising_edges, 0);
    }

    #[test]
    fn test_one_step_per_update() {
        let mut motor = GaugeMotor::new(CountingPort::default());
        motor.schedule_move(3);

        motor.update().unwrap();
        assert!(motor.is_moving());
        assert_eq!(motor.position(), 1);
        assert_eq!(motor.port().rising_edges, 1);

        motor.update().unwrap();
        motor.update().unwrap();
        assert_eq!(motor.position(), 3);
        assert!(motor.is_stopped());

        // Nothing pending: no further pulses
        motor.update().unwrap();
        assert_eq!(motor.port().rising_edges, 3);
        assert_eq!(motor.port().dir_writes, 1);
    }

    #[test]
    fn test_clamps_both_ends() {
        let mut motor = GaugeMotor::with_max_steps(CountingPort::default(), 100);
        motor.schedule_move(5000);
        assert_eq!(motor.pending_target(), 99);
        motor.schedule_move(-7);
        assert_eq!(motor.pending_target(), 0);
    }

    #[test]
    fn test_degree_api() {
        let mut motor = GaugeMotor::new(CountingPort::default());
        motor.schedule_move_degrees(Degrees(1.0));
        assert_eq!(motor.pending_target(), 12);
        motor.run_to_target().unwrap();
        assert!((motor.position_degrees().value() - 1.0).abs() < 0.001);
    }

    #[cfg(feature = "defmt")]
    #[test]
    fn test_name_is_loggable() {
        fn assert_format<T: defmt::Format>(_: &T) {}
        let motor = GaugeMotor::new(CountingPort::default());
        assert_format(&motor.name);
    }

    #[test]
    fn test_progress_tracks_counters() {
        let mut motor = GaugeMotor::new(CountingPort::default());
        motor.schedule_move(10);
        motor.update().unwrap();
        let progress = motor.progress().unwrap();
        assert_eq!(progress.steps_taken, 1);
        assert_eq!(progress.steps_remaining, 9);
        assert_eq!(motor.direction(), Some(Direction::Forward));
    }
}
