//! Per-move step bookkeeping.

use embedded_hal::digital::PinState;

/// Direction of gauge needle motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Toward higher positions.
    Forward,
    /// Toward position zero.
    Backward,
}

impl Direction {
    /// Direction needed to travel from `origin` to `target`.
    ///
    /// Equal positions resolve to `Backward`.
    #[inline]
    pub fn between(origin: u16, target: u16) -> Self {
        if target > origin {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// DIR line level for this direction (forward drives the line low).
    #[inline]
    pub fn pin_state(self, inverted: bool) -> PinState {
        match (self, inverted) {
            (Direction::Forward, false) | (Direction::Backward, true) => PinState::Low,
            (Direction::Backward, false) | (Direction::Forward, true) => PinState::High,
        }
    }
}

/// Snapshot of a move in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoveProgress {
    /// Steps completed so far.
    pub steps_taken: u16,
    /// Steps left until the target.
    pub steps_remaining: u16,
}

impl MoveProgress {
    /// Total length of the move.
    #[inline]
    pub fn total(&self) -> u16 {
        self.steps_taken + self.steps_remaining
    }
}

/// Runtime state of a single move.
#[derive(Debug, Clone)]
pub struct MotionExecutor {
    direction: Direction,
    steps_taken: u16,
    steps_remaining: u16,
}

impl MotionExecutor {
    /// Plan a move between two positions.
    ///
    /// Returns `None` when the positions are equal.
    pub fn new(origin: u16, target: u16) -> Option<Self> {
        let length = origin.abs_diff(target);
        if length == 0 {
            return None;
        }
        Some(Self {
            direction: Direction::between(origin, target),
            steps_taken: 0,
            steps_remaining: length,
        })
    }

    /// Direction of the move.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Distance from whichever move endpoint is closer.
    ///
    /// This is the acceleration profile lookup key for the next step.
    #[inline]
    pub fn accel_distance(&self) -> u16 {
        self.steps_taken.min(self.steps_remaining)
    }

    /// Check if motion is complete.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.steps_remaining == 0
    }

    /// Record one completed step.
    ///
    /// Returns `true` while steps remain.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.steps_taken += 1;
        self.steps_remaining -= 1;
        !self.is_complete()
    }

    /// Current counters.
    #[inline]
    pub fn progress(&self) -> MoveProgress {
        MoveProgress {
            steps_taken: self.steps_taken,
            steps_remaining: self.steps_remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_length_move() {
        assert!(MotionExecutor::new(42, 42).is_none());
    }

    #[test]
    fn test_direction_and_length() {
        let fwd = MotionExecutor::new(10, 110).unwrap();
        assert_eq!(fwd.direction(), Direction::Forward);
        assert_eq!(fwd.progress().total(), 100);

        let back = MotionExecutor::new(110, 10).unwrap();
        assert_eq!(back.direction(), Direction::Backward);
        assert_eq!(back.progress().steps_remaining, 100);
    }

    #[test]
    fn test_accel_distance_is_symmetric() {
        let mut executor = MotionExecutor::new(0, 10).unwrap();
        let mut distances = [0u16; 10];
        for slot in distances.iter_mut() {
            *slot = executor.accel_distance();
            executor.advance();
        }
        assert_eq!(distances, [0, 1, 2, 3, 4, 5, 4, 3, 2, 1]);
        assert!(executor.is_complete());
        assert!(!executor.advance());
        assert_eq!(executor.progress().steps_taken, 10);
    }

    #[test]
    fn test_pin_state_mapping() {
        assert_eq!(Direction::Forward.pin_state(false), PinState::Low);
        assert_eq!(Direction::Backward.pin_state(false), PinState::High);
        assert_eq!(Direction::Forward.pin_state(true), PinState::High);
        assert_eq!(Direction::Backward.pin_state(true), PinState::Low);
    }
}
