//! Demo autopilot
//!
//! Picks jump/crouch from the current state so the game can play itself
//! (idle mode in the browser, the headless native demo). Not perfect:
//! tight pairs at high speed still catch it.

use super::state::GameState;
use super::tick::TickInput;

/// How many ticks of scrolling ahead the autopilot reacts
const REACTION_TICKS: f32 = 4.0;

/// Decide the input for the next tick
pub fn decide(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    if state.is_game_over() {
        return input;
    }

    let player = &state.player;
    let ground_y = state.ground_y();
    let front = player.x + player.top_width;

    // Nearest obstacle that has not yet cleared the player
    let Some(next) = state
        .obstacles
        .iter()
        .filter(|o| o.rect.right() >= player.x)
        .min_by(|a, b| a.rect.x.total_cmp(&b.rect.x))
    else {
        return input;
    };

    let distance = next.rect.x - front;
    let reach = state.speed as f32 * REACTION_TICKS;
    if distance > reach {
        return input;
    }

    if !player.is_grounded(ground_y, state.tuning.jump_epsilon) {
        return input;
    }

    let lifted = next.rect.bottom() < ground_y - 0.5;
    if lifted {
        input.crouch = !player.is_crouching();
    } else {
        input.jump = true;
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::collision::Rect;
    use crate::sim::state::Viewport;
    use crate::sim::tick;
    use crate::tuning::Tuning;

    fn quiet_session() -> GameState {
        let mut state = GameState::new(7, Tuning::default(), Viewport::new(800.0, 600.0));
        state.spawner.countdown = i32::MAX;
        state
    }

    fn run(state: &mut GameState, ticks: usize) {
        for _ in 0..ticks {
            let input = decide(state);
            tick(state, &input, SIM_DT);
        }
    }

    #[test]
    fn test_no_obstacles_no_input() {
        let state = quiet_session();
        assert_eq!(decide(&state), TickInput::default());
    }

    #[test]
    fn test_far_obstacle_is_ignored() {
        let mut state = quiet_session();
        state.push_obstacle(Rect::new(700.0, 450.0, 50.0, 50.0));
        assert_eq!(decide(&state), TickInput::default());
    }

    #[test]
    fn test_jumps_ground_obstacle() {
        let mut state = quiet_session();
        state.push_obstacle(Rect::new(400.0, 450.0, 50.0, 50.0));
        run(&mut state, 60);
        assert!(!state.is_game_over());
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_crouches_under_lifted_obstacle() {
        let mut state = quiet_session();
        state.push_obstacle(Rect::new(400.0, 410.0, 50.0, 50.0));
        run(&mut state, 60);
        assert!(!state.is_game_over());
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_idle_after_game_over() {
        let mut state = quiet_session();
        state.phase = crate::sim::GamePhase::GameOver;
        state.push_obstacle(Rect::new(220.0, 450.0, 50.0, 50.0));
        assert_eq!(decide(&state), TickInput::default());
    }
}
