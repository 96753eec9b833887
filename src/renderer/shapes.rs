//! Shape tessellation into a per-frame vertex batch
//!
//! [`SceneBatch`] is the [`FrameSink`] the GPU path uses: shapes become
//! triangles in pixel space, HUD values are kept for the DOM.

use glam::Vec2;

use super::frame::FrameSink;
use super::vertex::{Palette, Vertex};
use crate::sim::Viewport;

/// HUD values for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    pub score: u32,
    pub speed: u32,
}

/// Triangles and text values for one frame
#[derive(Debug, Clone, Default)]
pub struct SceneBatch {
    pub palette: Palette,
    /// Triangle list in pixel coordinates (y down)
    pub vertices: Vec<Vertex>,
    pub size: (f32, f32),
    pub hud: Hud,
    /// Final score when the game-over overlay is showing
    pub game_over: Option<u32>,
}

impl SceneBatch {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            ..Default::default()
        }
    }

    /// Drop last frame's contents, keep allocations
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.hud = Hud::default();
        self.game_over = None;
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Fan-triangulate a convex polygon
    pub fn push_convex(&mut self, points: &[Vec2], color: [f32; 4]) {
        if points.len() < 3 {
            return;
        }
        let first = points[0];
        for pair in points[1..].windows(2) {
            self.vertices.push(Vertex::new(first.x, first.y, color));
            self.vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
            self.vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
        }
    }

    pub fn push_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) {
        self.push_convex(
            &[
                Vec2::new(x, y),
                Vec2::new(x + width, y),
                Vec2::new(x + width, y + height),
                Vec2::new(x, y + height),
            ],
            color,
        );
    }
}

impl FrameSink for SceneBatch {
    fn begin_frame(&mut self, viewport: &Viewport) {
        self.clear();
        self.size = (viewport.width, viewport.height);
    }

    fn draw_ground(&mut self, viewport: &Viewport, ground_y: f32) {
        let color = self.palette.ground;
        self.push_rect(0.0, ground_y, viewport.width, viewport.height - ground_y, color);
    }

    fn draw_player_polygon(&mut self, vertices: &[Vec2; 4]) {
        let color = self.palette.player;
        self.push_convex(vertices, color);
    }

    fn draw_obstacle_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let color = self.palette.obstacle;
        self.push_rect(x, y, width, height, color);
    }

    fn draw_hud(&mut self, score: u32, speed: u32) {
        self.hud = Hud { score, speed };
    }

    fn draw_game_over_overlay(&mut self, score: u32) {
        let (w, h) = self.size;
        let color = self.palette.overlay;
        self.push_rect(0.0, 0.0, w, h, color);
        self.game_over = Some(score);
    }
}
