//! Game balance constants
//!
//! Every number the simulation depends on lives in [`Tuning`]. The defaults
//! reproduce the classic feel; a JSON file can override any subset of them.

use serde::{Deserialize, Serialize};

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    /// Height of the ground strip at the bottom of the viewport (px)
    pub ground_height: f32,

    // === Player ===
    /// Fixed horizontal position of the player's left edge (px)
    pub player_x: f32,
    /// Width of the wide (top) side of the trapezoid
    pub player_top_width: f32,
    /// Width of the narrow (bottom) side of the trapezoid
    pub player_bottom_width: f32,
    pub standing_height: f32,
    pub crouch_height: f32,
    /// Downward acceleration (px/tick²)
    pub gravity: f32,
    /// Vertical velocity applied on jump (px/tick, negative is up)
    pub jump_impulse: f32,
    /// How close to the resting y the player must be to jump
    pub jump_epsilon: f32,
    /// Crouch duration in seconds of wall-clock time
    pub crouch_duration: f32,

    // === Speed ===
    pub start_speed: u32,
    pub max_speed: u32,
    /// Points needed for each +1 speed step
    pub score_per_speed: u32,
    /// Score above which the bonus speed starts accruing
    pub bonus_threshold: u32,
    /// Points past the threshold for each +1 bonus
    pub score_per_bonus: u32,

    // === Spawning ===
    /// Ticks between spawns at start speed
    pub base_spawn_interval: i32,
    /// Ticks removed from the interval per unit of speed above start
    pub spawn_reduction_per_speed: i32,
    /// Width of the jitter window; jitter is drawn from `[-span/2, span/2)`
    pub spawn_jitter_span: i32,
    pub min_spawn_interval: i32,
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    /// Lift above the ground for "low lifted" obstacles (px)
    pub low_lift: f32,
    /// Lift above the ground for "very high" obstacles (px)
    pub high_lift: f32,
    pub high_lift_chance: f64,
    pub low_lift_chance: f64,
    /// Chance of a second obstacle right behind the first
    pub pair_chance: f64,
    pub pair_gap_min: f32,
    pub pair_gap_max: f32,
    /// Spawn distance past the right edge of the viewport (px)
    pub spawn_margin: f32,
    /// Obstacles are dropped once their trailing edge is this far left of x = 0
    pub despawn_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ground_height: 100.0,

            player_x: 150.0,
            player_top_width: 60.0,
            player_bottom_width: 30.0,
            standing_height: 50.0,
            crouch_height: 35.0,
            gravity: 2.2,
            jump_impulse: -25.0,
            jump_epsilon: 0.5,
            crouch_duration: 0.6,

            start_speed: 10,
            max_speed: 22,
            score_per_speed: 3,
            bonus_threshold: 30,
            score_per_bonus: 10,

            base_spawn_interval: 90,
            spawn_reduction_per_speed: 6,
            spawn_jitter_span: 20,
            min_spawn_interval: 19,
            obstacle_width: 50.0,
            obstacle_height: 50.0,
            low_lift: 40.0,
            high_lift: 50.0,
            high_lift_chance: 0.05,
            low_lift_chance: 0.20,
            pair_chance: 0.15,
            pair_gap_min: 15.0,
            pair_gap_max: 55.0,
            spawn_margin: 10.0,
            despawn_margin: 120.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty JSON (handy as a template for custom tuning files)
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 3.0, "max_speed": 30 }"#).unwrap();
        assert_eq!(tuning.gravity, 3.0);
        assert_eq!(tuning.max_speed, 30);
        assert_eq!(tuning.start_speed, Tuning::default().start_speed);
        assert_eq!(tuning.crouch_height, Tuning::default().crouch_height);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Tuning::from_json("{ gravity: oops }").is_err());
        assert!(Tuning::from_json(r#"{ "max_speed": "fast" }"#).is_err());
    }

    #[test]
    fn test_json_template_parses_back() {
        let json = Tuning::default().to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), Tuning::default());
    }
}
