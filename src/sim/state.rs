//! Game session state
//!
//! Everything a run needs lives in [`GameState`]: the player, live
//! obstacles, score, spawn countdown and the RNG stream. Reset rebuilds the
//! run in place while keeping the seed stream, tuning and viewport.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::difficulty::speed_for_score;
use super::player::Player;
use super::spawner::Spawner;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Scrolling, spawning and scoring
    Running,
    /// Run ended; the next jump/crouch request starts a new one
    GameOver,
}

/// Drawable area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// y of the ground line (top of the ground strip)
    #[inline]
    pub fn ground_y(&self, tuning: &Tuning) -> f32 {
        self.height - tuning.ground_height
    }
}

/// An obstacle scrolling toward the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub rect: Rect,
    /// Set once the trailing edge is behind the player; scores exactly once
    pub passed: bool,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG stream; continues across resets so each run differs
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub phase: GamePhase,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Scroll speed for the current tick, derived from `score`
    pub speed: u32,
    pub spawner: Spawner,
    /// Ticks simulated since the last reset
    pub time_ticks: u64,
    /// Next obstacle ID
    next_id: u32,
}

impl GameState {
    /// Create a new running session
    pub fn new(seed: u64, tuning: Tuning, viewport: Viewport) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let speed = speed_for_score(0, &tuning);
        let spawner = Spawner::new(&mut rng, speed, &tuning);
        let player = Player::new(&tuning, viewport.ground_y(&tuning));
        Self {
            seed,
            rng,
            tuning,
            viewport,
            phase: GamePhase::Running,
            player,
            obstacles: Vec::new(),
            score: 0,
            speed,
            spawner,
            time_ticks: 0,
            next_id: 1,
        }
    }

    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.viewport.ground_y(&self.tuning)
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Start a fresh run. Any pending crouch revert goes with the old player.
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.score = 0;
        self.speed = speed_for_score(0, &self.tuning);
        self.spawner = Spawner::new(&mut self.rng, self.speed, &self.tuning);
        self.player = Player::new(&self.tuning, self.ground_y());
        self.phase = GamePhase::Running;
        self.time_ticks = 0;
        self.next_id = 1;
        log::info!("Run reset");
    }

    /// Jump request: restarts after game over, otherwise jumps if grounded
    pub fn request_jump(&mut self) {
        if self.is_game_over() {
            self.reset();
            return;
        }
        let ground_y = self.ground_y();
        self.player.try_jump(&self.tuning, ground_y);
    }

    /// Crouch request: restarts after game over, otherwise crouches if standing
    pub fn request_crouch(&mut self) {
        if self.is_game_over() {
            self.reset();
            return;
        }
        let ground_y = self.ground_y();
        self.player.try_crouch(&self.tuning, ground_y);
    }

    /// Viewport changed: move the player onto the new ground line.
    /// Velocity is kept, so a jump in progress carries on.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        let ground_y = self.ground_y();
        self.player.y = self.player.resting_y(ground_y);
        log::info!("Viewport resized to {}x{}", width, height);
    }

    /// Add an obstacle at the back of the live set
    pub fn push_obstacle(&mut self, rect: Rect) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.obstacles.push(Obstacle {
            id,
            rect,
            passed: false,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameState {
        GameState::new(12345, Tuning::default(), Viewport::new(800.0, 600.0))
    }

    #[test]
    fn test_new_session() {
        let state = session();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, 10);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.ground_y(), 500.0);
        assert_eq!(state.player.y, 450.0);
        assert!(state.spawner.countdown >= 19);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = session();
        state.push_obstacle(Rect::new(300.0, 450.0, 50.0, 50.0));
        state.score = 17;
        state.speed = 15;
        state.phase = GamePhase::GameOver;
        state.player.y = 200.0;
        state.player.dy = -12.0;
        state.player.height = 35.0;
        state.player.crouch_remaining = Some(0.4);

        state.reset();

        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, 10);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.height, 50.0);
        assert_eq!(state.player.y, 450.0);
        assert_eq!(state.player.dy, 0.0);
        assert!(!state.player.is_crouching());
    }

    #[test]
    fn test_requests_restart_after_game_over() {
        let mut state = session();
        state.phase = GamePhase::GameOver;
        state.score = 4;
        state.request_crouch();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        // The restarting request does not also crouch
        assert!(!state.player.is_crouching());

        state.phase = GamePhase::GameOver;
        state.request_jump();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.dy, 0.0);
    }

    #[test]
    fn test_resize_moves_player_to_new_ground() {
        let mut state = session();
        state.request_jump();
        state.resize(1024.0, 768.0);
        assert_eq!(state.ground_y(), 668.0);
        assert_eq!(state.player.y, 618.0);
        assert_eq!(state.player.dy, -25.0);
    }

    #[test]
    fn test_obstacle_ids_follow_spawn_order() {
        let mut state = session();
        let a = state.push_obstacle(Rect::new(810.0, 450.0, 50.0, 50.0));
        let b = state.push_obstacle(Rect::new(830.0, 450.0, 50.0, 50.0));
        assert!(a < b);
        assert_eq!(state.obstacles[0].id, a);
        assert!(!state.obstacles[1].passed);
    }

    #[test]
    fn test_state_serializes() {
        let state = session();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.player, state.player);
        assert_eq!(back.spawner, state.spawner);
    }
}
