//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod difficulty;
pub mod player;
pub mod spawner;
pub mod state;
pub mod tick;

pub use clock::FixedClock;
pub use collision::{Projection, Rect, polygon_rect_collision, polygons_intersect, project_polygon};
pub use difficulty::{roll_spawn_interval, spawn_interval, speed_for_score};
pub use player::Player;
pub use spawner::{Lift, Spawn, Spawner, roll_spawn};
pub use state::{GamePhase, GameState, Obstacle, Viewport};
pub use tick::{TickInput, tick};
