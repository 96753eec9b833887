//! Player motion: gravity, ground clamping, jump and timed crouch
//!
//! Positions are in screen pixels with y growing downward; velocities are in
//! pixels per tick. The crouch timer is wall-clock seconds so it is driven by
//! `dt` rather than by tick count.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// The player's inverted trapezoid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Left edge of the wide top side (fixed)
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Vertical velocity (negative is up)
    pub dy: f32,
    pub top_width: f32,
    pub bottom_width: f32,
    /// Current height (standing or crouching)
    pub height: f32,
    /// Seconds until an active crouch reverts; `None` when standing
    pub crouch_remaining: Option<f32>,
}

impl Player {
    /// A standing player at rest on the ground
    pub fn new(tuning: &Tuning, ground_y: f32) -> Self {
        let mut player = Self {
            x: tuning.player_x,
            y: 0.0,
            dy: 0.0,
            top_width: tuning.player_top_width,
            bottom_width: tuning.player_bottom_width,
            height: tuning.standing_height,
            crouch_remaining: None,
        };
        player.seat(ground_y);
        player
    }

    /// y at which the bottom edge exactly touches the ground
    #[inline]
    pub fn resting_y(&self, ground_y: f32) -> f32 {
        ground_y - self.height
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn is_crouching(&self) -> bool {
        self.crouch_remaining.is_some()
    }

    /// At rest on the ground (within `epsilon` of the resting y)
    pub fn is_grounded(&self, ground_y: f32, epsilon: f32) -> bool {
        self.y >= self.resting_y(ground_y) - epsilon
    }

    /// Put the player on the ground with no vertical motion
    pub fn seat(&mut self, ground_y: f32) {
        self.y = self.resting_y(ground_y);
        self.dy = 0.0;
    }

    /// Vertices: top-left, top-right, bottom-right, bottom-left
    pub fn polygon(&self) -> [Vec2; 4] {
        let inset = (self.top_width - self.bottom_width) / 2.0;
        let bottom = self.bottom();
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.top_width, self.y),
            Vec2::new(self.x + self.top_width - inset, bottom),
            Vec2::new(self.x + inset, bottom),
        ]
    }

    /// Start a jump if resting on the ground. Returns whether it was applied.
    pub fn try_jump(&mut self, tuning: &Tuning, ground_y: f32) -> bool {
        if !self.is_grounded(ground_y, tuning.jump_epsilon) {
            return false;
        }
        self.dy = tuning.jump_impulse;
        true
    }

    /// Shrink to crouch height, anchored to the ground. No-op while crouching.
    ///
    /// Vertical velocity is left alone, so a jump started in the same tick
    /// still lifts off from the crouched position.
    pub fn try_crouch(&mut self, tuning: &Tuning, ground_y: f32) -> bool {
        if self.is_crouching() {
            return false;
        }
        self.height = tuning.crouch_height;
        self.y = self.resting_y(ground_y);
        self.crouch_remaining = Some(tuning.crouch_duration);
        true
    }

    /// Count down an active crouch; on expiry stand back up on the ground.
    /// Velocity is kept, so an airborne player continues its arc from there.
    pub fn update_crouch(&mut self, tuning: &Tuning, ground_y: f32, dt: f32) {
        let Some(remaining) = self.crouch_remaining else {
            return;
        };
        let remaining = remaining - dt;
        if remaining > 0.0 {
            self.crouch_remaining = Some(remaining);
            return;
        }
        self.height = tuning.standing_height;
        self.y = self.resting_y(ground_y);
        self.crouch_remaining = None;
    }

    /// Semi-implicit Euler step with ground clamping
    pub fn integrate(&mut self, gravity: f32, ground_y: f32) {
        self.dy += gravity;
        self.y += self.dy;
        if self.bottom() > ground_y {
            self.seat(ground_y);
        }
    }
}
