//! Platform abstraction layer
//!
//! Translates browser events (keys, touch gestures) into game actions.
//! Event wiring itself lives in the wasm entry point.

pub mod input;

pub use input::{Action, SWIPE_THRESHOLD, SwipeTracker, key_action};
