//! Frame time to fixed ticks

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Accumulates frame time and hands out whole simulation ticks
#[derive(Debug, Clone, Default)]
pub struct FixedClock {
    accumulator: f32,
}

impl FixedClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time banked towards the next tick
    #[inline]
    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    /// Add one frame's elapsed time and return how many ticks to run.
    ///
    /// At most `MAX_SUBSTEPS` ticks are returned; time beyond that is dropped
    /// so the backlog stays below one tick.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT * 0.5);
        }
        steps
    }

    /// Drop any banked time (a new run starts from a clean slate)
    pub fn clear(&mut self) {
        self.accumulator = 0.0;
    }
}
