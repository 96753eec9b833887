//! Raw browser input to game actions
//!
//! Keys map directly; touch gestures become actions only when the finger
//! travelled far enough vertically between touch start and touch end.

use crate::sim::TickInput;

/// Minimum vertical travel for a swipe (CSS px)
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// A logical player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Jump,
    Crouch,
}

impl Action {
    /// Latch this action into the pending tick input
    pub fn apply(self, input: &mut TickInput) {
        match self {
            Action::Jump => input.jump = true,
            Action::Crouch => input.crouch = true,
        }
    }
}

/// Map a `KeyboardEvent.code` to an action
pub fn key_action(code: &str) -> Option<Action> {
    match code {
        "KeyW" | "ArrowUp" | "Space" => Some(Action::Jump),
        "KeyS" | "ArrowDown" => Some(Action::Crouch),
        _ => None,
    }
}

/// Tracks one touch from start to end
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start_y: Option<f32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, y: f32) {
        self.start_y = Some(y);
    }

    /// Finish the touch; upward travel jumps, downward travel crouches
    pub fn end(&mut self, y: f32) -> Option<Action> {
        let start = self.start_y.take()?;
        let travel = start - y;
        if travel.abs() <= SWIPE_THRESHOLD {
            return None;
        }
        if travel > 0.0 {
            Some(Action::Jump)
        } else {
            Some(Action::Crouch)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_action("KeyW"), Some(Action::Jump));
        assert_eq!(key_action("ArrowUp"), Some(Action::Jump));
        assert_eq!(key_action("KeyS"), Some(Action::Crouch));
        assert_eq!(key_action("ArrowDown"), Some(Action::Crouch));
        assert_eq!(key_action("KeyA"), None);
    }

    #[test]
    fn test_swipe_up_jumps() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(400.0);
        assert_eq!(swipe.end(300.0), Some(Action::Jump));
    }

    #[test]
    fn test_swipe_down_crouches() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(300.0);
        assert_eq!(swipe.end(360.0), Some(Action::Crouch));
    }

    #[test]
    fn test_short_swipe_ignored() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(300.0);
        assert_eq!(swipe.end(250.0), None);
        swipe.begin(300.0);
        assert_eq!(swipe.end(349.0), None);
    }

    #[test]
    fn test_end_without_begin() {
        let mut swipe = SwipeTracker::new();
        assert_eq!(swipe.end(0.0), None);
        swipe.begin(500.0);
        assert_eq!(swipe.end(100.0), Some(Action::Jump));
        // Tracker cleared after each touch end
        assert_eq!(swipe.end(100.0), None);
    }

    #[test]
    fn test_apply_latches() {
        let mut input = TickInput::default();
        Action::Crouch.apply(&mut input);
        assert!(input.crouch && !input.jump);
        Action::Jump.apply(&mut input);
        assert!(input.jump);
    }
}
