//! Fixed timestep simulation tick
//!
//! Core game loop that advances a run deterministically: speed, spawning,
//! player physics, then scrolling/collision/scoring for every obstacle.

use super::collision::polygon_rect_collision;
use super::difficulty::speed_for_score;
use super::state::{GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump (W / up arrow / swipe up)
    pub jump: bool,
    /// Crouch (S / down arrow / swipe down)
    pub crouch: bool,
}

impl TickInput {
    pub fn any(&self) -> bool {
        self.jump || self.crouch
    }
}

/// Advance the game state by one fixed timestep
///
/// `dt` is the wall-clock length of the tick in seconds; only the crouch
/// timer consumes it; motion and spawning are counted per tick.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.is_game_over() {
        if input.any() {
            state.reset();
        }
        return;
    }

    if input.jump {
        state.request_jump();
    }
    if input.crouch {
        state.request_crouch();
    }

    state.time_ticks += 1;
    state.speed = speed_for_score(state.score, &state.tuning);

    if let Some(spawn) = state
        .spawner
        .tick(&mut state.rng, state.speed, &state.tuning, &state.viewport)
    {
        log::debug!(
            "Spawn at tick {}: {:?}{}",
            state.time_ticks,
            spawn.lift,
            if spawn.trailer.is_some() { " (pair)" } else { "" }
        );
        for rect in spawn.rects() {
            state.push_obstacle(rect);
        }
    }

    let ground_y = state.ground_y();
    state.player.update_crouch(&state.tuning, ground_y, dt);
    state.player.integrate(state.tuning.gravity, ground_y);

    let polygon = state.player.polygon();
    let scroll = state.speed as f32;
    let mut hit = false;
    for obstacle in &mut state.obstacles {
        obstacle.rect.x -= scroll;

        if polygon_rect_collision(&polygon, &obstacle.rect) {
            hit = true;
        }

        if !obstacle.passed && obstacle.rect.right() < state.player.x {
            obstacle.passed = true;
            state.score += 1;
        }
    }

    let despawn_x = -state.tuning.despawn_margin;
    state.obstacles.retain(|o| o.rect.right() >= despawn_x);

    if hit {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {} ticks: score {}, speed {}",
            state.time_ticks,
            state.score,
            state.speed
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::collision::Rect;
    use crate::sim::state::Viewport;
    use crate::tuning::Tuning;

    fn session() -> GameState {
        GameState::new(12345, Tuning::default(), Viewport::new(800.0, 600.0))
    }

    /// A session that never spawns on its own
    fn quiet_session() -> GameState {
        let mut state = session();
        state.spawner.countdown = i32::MAX;
        state
    }

    #[test]
    fn test_idle_ticks_spawn_obstacles() {
        let mut state = session();
        let input = TickInput::default();
        let mut spawned = false;
        for _ in 0..120 {
            tick(&mut state, &input, SIM_DT);
            if !state.obstacles.is_empty() {
                spawned = true;
                break;
            }
        }
        assert!(spawned);
        let first = &state.obstacles[0];
        assert!(first.rect.x > 700.0);
    }

    #[test]
    fn test_obstacle_overlapping_player_ends_run() {
        let mut state = quiet_session();
        let p = state.player.clone();
        // At x = player.x + 5 after one scroll of 10
        state.push_obstacle(Rect::new(p.x + 15.0, p.y, 50.0, 50.0));

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.obstacles[0].rect.x, p.x + 5.0);
    }

    #[test]
    fn test_game_over_freezes_simulation() {
        let mut state = quiet_session();
        state.push_obstacle(Rect::new(400.0, 450.0, 50.0, 50.0));
        state.phase = GamePhase::GameOver;
        let before_x = state.obstacles[0].rect.x;
        let before_ticks = state.time_ticks;

        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.obstacles[0].rect.x, before_x);
        assert_eq!(state.time_ticks, before_ticks);
    }

    #[test]
    fn test_input_after_game_over_resets() {
        let mut state = quiet_session();
        state.request_jump();
        tick(&mut state, &TickInput::default(), SIM_DT);
        state.push_obstacle(Rect::new(400.0, 450.0, 50.0, 50.0));
        state.score = 8;
        state.phase = GamePhase::GameOver;

        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump, SIM_DT);

        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, 10);
        assert_eq!(state.player.y, 450.0);
        assert_eq!(state.player.dy, 0.0);
        assert_eq!(state.player.height, 50.0);
    }

    #[test]
    fn test_jump_clears_ground_obstacle() {
        let mut state = quiet_session();
        state.push_obstacle(Rect::new(330.0, 450.0, 50.0, 50.0));
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        let idle = TickInput::default();

        // Obstacle reaches the player around tick 12; jump a few ticks early
        for i in 0..60 {
            let input = if i == 6 { &jump } else { &idle };
            tick(&mut state, input, SIM_DT);
            assert_eq!(state.phase, GamePhase::Running, "hit at tick {i}");
        }
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_crouch_ducks_low_lifted_obstacle() {
        let mut state = quiet_session();
        // Low lift: bottom edge 40 px above the ground, crouched top is 35 px up
        state.push_obstacle(Rect::new(300.0, 410.0, 50.0, 50.0));
        let crouch = TickInput {
            crouch: true,
            ..Default::default()
        };
        tick(&mut state, &crouch, SIM_DT);
        for _ in 0..20 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_standing_hits_low_lifted_obstacle() {
        let mut state = quiet_session();
        state.push_obstacle(Rect::new(300.0, 410.0, 50.0, 50.0));
        for _ in 0..20 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_each_obstacle_scores_once() {
        let mut state = quiet_session();
        // Lifted out of reach so nothing collides
        for i in 0..5 {
            state.push_obstacle(Rect::new(250.0 + i as f32 * 70.0, 100.0, 50.0, 50.0));
        }
        let mut last_score = 0;
        for _ in 0..200 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            assert!(state.score >= last_score);
            assert!(state.score - last_score <= 5);
            last_score = state.score;
        }
        assert_eq!(state.score, 5);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_score_awarded_before_removal() {
        let mut state = quiet_session();
        // Trailing edge already left of the despawn line after one scroll
        state.push_obstacle(Rect::new(-165.0, 100.0, 50.0, 50.0));
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.score, 1);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_speed_tracks_score() {
        let mut state = quiet_session();
        state.score = 9;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.speed, 13);
    }

    #[test]
    fn test_crouch_revert_does_not_survive_reset() {
        let mut state = quiet_session();
        let crouch = TickInput {
            crouch: true,
            ..Default::default()
        };
        tick(&mut state, &crouch, SIM_DT);
        assert!(state.player.is_crouching());

        state.phase = GamePhase::GameOver;
        tick(&mut state, &crouch, SIM_DT);
        assert_eq!(state.phase, GamePhase::Running);
        assert!(!state.player.is_crouching());

        for _ in 0..60 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            if state.is_game_over() {
                break;
            }
            assert_eq!(state.player.height, 50.0);
            assert_eq!(state.player.bottom(), state.ground_y());
        }
    }

    #[test]
    fn test_determinism() {
        let mut state1 = session();
        let mut state2 = session();

        let inputs = [
            TickInput::default(),
            TickInput {
                jump: true,
                ..Default::default()
            },
            TickInput {
                crouch: true,
                ..Default::default()
            },
        ];

        for i in 0..600 {
            let input = &inputs[(i / 7) % inputs.len()];
            tick(&mut state1, input, SIM_DT);
            tick(&mut state2, input, SIM_DT);
        }

        assert_eq!(
            serde_json::to_string(&state1).unwrap(),
            serde_json::to_string(&state2).unwrap()
        );
    }
}
