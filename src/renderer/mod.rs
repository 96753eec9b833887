//! Rendering module
//!
//! `frame` defines what is drawn, `shapes` turns it into triangles, and
//! `pipeline` pushes those triangles through WebGPU.

pub mod frame;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use frame::{FrameSink, draw_frame};
pub use pipeline::RenderState;
pub use shapes::{Hud, SceneBatch};
pub use vertex::{Palette, Vertex};
