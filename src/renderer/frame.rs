//! What gets drawn each frame
//!
//! The simulation hands its state to a [`FrameSink`]; the sink decides how
//! to draw. Nothing a sink does feeds back into the game.

use glam::Vec2;

use crate::sim::{GameState, Viewport};

/// Receiver of per-frame draw calls
pub trait FrameSink {
    /// Called once before anything else in a frame
    fn begin_frame(&mut self, _viewport: &Viewport) {}
    /// Ground strip from `ground_y` to the bottom of the viewport
    fn draw_ground(&mut self, viewport: &Viewport, ground_y: f32);
    /// Player trapezoid: top-left, top-right, bottom-right, bottom-left
    fn draw_player_polygon(&mut self, vertices: &[Vec2; 4]);
    fn draw_obstacle_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn draw_hud(&mut self, score: u32, speed: u32);
    fn draw_game_over_overlay(&mut self, score: u32);
}

/// Issue the draw calls for one frame, back to front
pub fn draw_frame<S: FrameSink + ?Sized>(state: &GameState, sink: &mut S) {
    sink.begin_frame(&state.viewport);
    sink.draw_ground(&state.viewport, state.ground_y());
    sink.draw_player_polygon(&state.player.polygon());
    for obstacle in &state.obstacles {
        let r = &obstacle.rect;
        sink.draw_obstacle_rect(r.x.round(), r.y.round(), r.width, r.height);
    }
    sink.draw_hud(state.score, state.speed);
    if state.is_game_over() {
        sink.draw_game_over_overlay(state.score);
    }
}
