//! Scoring module - score-to-speed policy
//!
//! Scoring itself is one point per removed row; the only derived quantity is
//! the gravity tick interval, a pure function of the score. The curve is a
//! tunable policy: any monotonically non-increasing mapping bounded below by
//! `MIN_SECS_PER_TICK` would do. Here it is a linear ramp.

use crate::types::{MAX_SECS_PER_TICK, MIN_SECS_PER_TICK, SECS_PER_TICK_STEP};

/// Seconds per gravity tick for a given score.
///
/// Starts at `MAX_SECS_PER_TICK` for score 0 and shrinks by
/// `SECS_PER_TICK_STEP` per point, clamped at `MIN_SECS_PER_TICK` so the
/// interval never reaches zero.
pub fn secs_per_tick_for_score(score: u32) -> f32 {
    let ramp = MAX_SECS_PER_TICK - score as f32 * SECS_PER_TICK_STEP;
    ramp.max(MIN_SECS_PER_TICK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_zero_is_slowest() {
        assert_eq!(secs_per_tick_for_score(0), MAX_SECS_PER_TICK);
    }

    #[test]
    fn test_interval_is_monotonically_non_increasing() {
        let mut previous = secs_per_tick_for_score(0);
        for score in 1..200 {
            let interval = secs_per_tick_for_score(score);
            assert!(interval <= previous);
            previous = interval;
        }
    }

    #[test]
    fn test_interval_is_bounded_below() {
        for score in [0, 10, 100, 1_000, u32::MAX] {
            let interval = secs_per_tick_for_score(score);
            assert!(interval >= MIN_SECS_PER_TICK);
            assert!(interval > 0.0);
        }
    }
}
