//! Simulation clock
//!
//! Accumulates wall-clock time and converts it into zero or more board
//! advances per frame, decoupling the generation rate from the frame rate.
//! A slow frame catches up with multiple advances; a fast frame may advance
//! nothing.

use crate::config::RenderConfig;
use crate::consts::MAX_FRAME_DT;

use super::board::ScrollingBoard;

#[derive(Debug, Default)]
pub struct SimulationClock {
    accumulator: f32,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time debt carried into the next frame, in seconds
    pub fn accumulated(&self) -> f32 {
        self.accumulator
    }

    /// Feed one frame's delta time and advance the board as many whole
    /// generation intervals as have elapsed. Returns the advance count.
    ///
    /// While paused this is a no-op and no time debt accumulates, so
    /// resuming never triggers a burst of advances.
    pub fn tick(&mut self, delta: f32, board: &mut ScrollingBoard, config: &RenderConfig) -> u32 {
        if config.paused {
            return 0;
        }

        self.accumulator += delta.min(MAX_FRAME_DT);
        let mut advances = 0;
        while self.accumulator >= config.generation_interval {
            board.advance();
            self.accumulator -= config.generation_interval;
            advances += 1;
        }
        advances
    }

    /// Advance exactly one generation, ignoring accumulated time. Only
    /// honored while paused; returns whether an advance happened.
    pub fn step(&mut self, board: &mut ScrollingBoard, config: &RenderConfig) -> bool {
        if !config.paused {
            return false;
        }
        board.advance();
        true
    }
}
