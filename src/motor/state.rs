//! Motion state of a gauge motor.

/// Two-state motion machine.
///
/// A move runs from `Moving` to `Idle` only by reaching its target; there is
/// no abort transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionState {
    /// At rest on the latched target, ready to accept the pending one.
    #[default]
    Idle,
    /// Stepping toward the latched target.
    Moving,
}
