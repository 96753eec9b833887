//! Obstacle generation on a countdown
//!
//! Each spawn places one obstacle just past the right edge of the viewport,
//! sometimes lifted off the ground, and sometimes followed by a second one
//! at the same height.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::difficulty::roll_spawn_interval;
use super::state::Viewport;
use crate::tuning::Tuning;

/// Vertical placement of a spawned obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lift {
    /// Sitting on the ground; must be jumped
    Ground,
    /// Raised a little; crouch underneath
    Low,
    /// Raised further; rare
    High,
}

impl Lift {
    /// Distance above the ground-resting obstacle position (px)
    pub fn offset(self, tuning: &Tuning) -> f32 {
        match self {
            Lift::Ground => 0.0,
            Lift::Low => tuning.low_lift,
            Lift::High => tuning.high_lift,
        }
    }
}

/// Obstacles produced by one spawn event
#[derive(Debug, Clone, PartialEq)]
pub struct Spawn {
    pub lift: Lift,
    pub lead: Rect,
    /// Optional second obstacle at the same height
    pub trailer: Option<Rect>,
}

impl Spawn {
    /// Rects in spawn order
    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        std::iter::once(self.lead).chain(self.trailer)
    }
}

/// Draw the lift: rare high, otherwise an independent chance of low
pub fn roll_lift<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> Lift {
    if rng.random::<f64>() < tuning.high_lift_chance {
        Lift::High
    } else if rng.random::<f64>() < tuning.low_lift_chance {
        Lift::Low
    } else {
        Lift::Ground
    }
}

/// Generate the obstacles for one spawn event
pub fn roll_spawn<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning, viewport: &Viewport) -> Spawn {
    let lift = roll_lift(rng, tuning);
    let ground_y = viewport.ground_y(tuning);
    let y = ground_y - tuning.obstacle_height - lift.offset(tuning);
    let x = viewport.width + tuning.spawn_margin;
    let lead = Rect::new(x, y, tuning.obstacle_width, tuning.obstacle_height);

    let trailer = if rng.random::<f64>() < tuning.pair_chance {
        let span = (tuning.pair_gap_max - tuning.pair_gap_min).max(0.0);
        let gap = tuning.pair_gap_min + rng.random::<f32>() * span;
        Some(Rect { x: x + gap, ..lead })
    } else {
        None
    };

    Spawn {
        lift,
        lead,
        trailer,
    }
}

/// Countdown to the next spawn event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    /// Ticks remaining; fires on the tick it is seen at or below zero
    pub countdown: i32,
}

impl Spawner {
    /// A spawner primed with a fresh interval for `speed`
    pub fn new<R: Rng + ?Sized>(rng: &mut R, speed: u32, tuning: &Tuning) -> Self {
        Self {
            countdown: roll_spawn_interval(rng, speed, tuning),
        }
    }

    /// Advance one tick; returns the spawn if the countdown fired
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        speed: u32,
        tuning: &Tuning,
        viewport: &Viewport,
    ) -> Option<Spawn> {
        if self.countdown > 0 {
            self.countdown -= 1;
            return None;
        }
        let spawn = roll_spawn(rng, tuning, viewport);
        self.countdown = roll_spawn_interval(rng, speed, tuning);
        Some(spawn)
    }
}
