//! Difficulty curve: scroll speed from score, spawn pacing from speed
//!
//! Both are plain functions of their inputs. Speed is never stored anywhere
//! except as a cache of `speed_for_score` for the current tick.

use rand::Rng;

use crate::tuning::Tuning;

/// Scroll speed (px/tick) for a cumulative score
///
/// One step per `score_per_speed` points, capped so the base curve never
/// passes `max_speed`. Past `bonus_threshold`, an extra step accrues per
/// `score_per_bonus` points, still bounded by `max_speed`.
pub fn speed_for_score(score: u32, tuning: &Tuning) -> u32 {
    let headroom = tuning.max_speed.saturating_sub(tuning.start_speed);
    let gain = (score / tuning.score_per_speed.max(1)).min(headroom);
    let speed = tuning.start_speed + gain;
    if score > tuning.bonus_threshold {
        let bonus = (score - tuning.bonus_threshold) / tuning.score_per_bonus.max(1);
        speed.saturating_add(bonus).min(tuning.max_speed.max(speed))
    } else {
        speed
    }
}

/// Ticks until the next spawn for a given speed and jitter
pub fn spawn_interval(speed: u32, jitter: i32, tuning: &Tuning) -> i32 {
    let over = speed as i32 - tuning.start_speed as i32;
    let interval = tuning.base_spawn_interval - over * tuning.spawn_reduction_per_speed;
    (interval + jitter).max(tuning.min_spawn_interval)
}

/// Draw a jitter from `[-span/2, span/2)`
pub fn roll_jitter<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> i32 {
    let span = tuning.spawn_jitter_span.max(1);
    rng.random_range(0..span) - span / 2
}

/// Spawn interval with a freshly drawn jitter
pub fn roll_spawn_interval<R: Rng + ?Sized>(rng: &mut R, speed: u32, tuning: &Tuning) -> i32 {
    let jitter = roll_jitter(rng, tuning);
    spawn_interval(speed, jitter, tuning)
}
