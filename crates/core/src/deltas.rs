//! Motion and wheel accumulators.
//!
//! Deltas are summed on arrival; only the aggregate is observable.
//!
//! # Wheel notch policy
//!
//! Commit and [`Deltas::take_wheel_notches`] share one rule: report
//! `raw / WHEEL_DELTA` whole notches (truncated toward zero) and subtract exactly
//! what was reported. The sub-notch remainder, which keeps the sign of the raw
//! delta, carries over until more wheel input completes a notch or the
//! accumulator is cleared with [`Deltas::clear`].

use crate::types::{Motion, WHEEL_DELTA};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deltas {
    motion: Motion,
    wheel: i32,
}

impl Deltas {
    pub const fn new() -> Self {
        Self {
            motion: Motion::ZERO,
            wheel: 0,
        }
    }

    pub fn add_motion(&mut self, dx: i32, dy: i32) {
        self.motion.accumulate(dx, dy);
    }

    pub fn add_wheel(&mut self, delta: i32) {
        self.wheel = self.wheel.saturating_add(delta);
    }

    /// Accumulated motion, without resetting it.
    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn take_motion(&mut self) -> Motion {
        std::mem::take(&mut self.motion)
    }

    /// Raw wheel units not yet reported as notches.
    pub fn wheel_units(&self) -> i32 {
        self.wheel
    }

    /// Report whole notches and keep the remainder.
    pub fn take_wheel_notches(&mut self) -> i32 {
        let notches = self.wheel / WHEEL_DELTA;
        self.wheel -= notches * WHEEL_DELTA;
        notches
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_sums_until_taken() {
        let mut d = Deltas::new();
        d.add_motion(3, -2);
        d.add_motion(1, 1);
        assert_eq!(d.motion(), Motion::new(4, -1));

        assert_eq!(d.take_motion(), Motion::new(4, -1));
        assert_eq!(d.take_motion(), Motion::ZERO);
    }

    #[test]
    fn test_whole_notches_reset_to_zero() {
        let mut d = Deltas::new();
        d.add_wheel(240);
        assert_eq!(d.take_wheel_notches(), 2);
        assert_eq!(d.wheel_units(), 0);
    }

    #[test]
    fn test_sub_notch_remainder_is_preserved() {
        let mut d = Deltas::new();
        d.add_wheel(60);
        assert_eq!(d.take_wheel_notches(), 0);
        assert_eq!(d.wheel_units(), 60);

        d.add_wheel(200);
        assert_eq!(d.take_wheel_notches(), 2);
        assert_eq!(d.wheel_units(), 20);
    }

    #[test]
    fn test_negative_remainder_truncates_toward_zero() {
        let mut d = Deltas::new();
        d.add_wheel(-300);
        assert_eq!(d.take_wheel_notches(), -2);
        assert_eq!(d.wheel_units(), -60);
    }

    #[test]
    fn test_clear_discards_remainder() {
        let mut d = Deltas::new();
        d.add_wheel(90);
        d.add_motion(5, 5);
        d.clear();
        assert_eq!(d, Deltas::new());
    }
}
