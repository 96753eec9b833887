//! Trapezoid Runner - an endless-runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, SAT collision, spawning, difficulty)
//! - `renderer`: Frame drawing contract and WebGPU pipeline
//! - `platform`: Browser input translation (keys, swipes)
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the rate the tuning constants assume)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Largest frame gap fed to the accumulator (tab switches, debugger pauses)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
