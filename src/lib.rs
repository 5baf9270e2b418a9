//! Rule 110 Scroll - a scrolling elementary cellular automaton visualizer
//!
//! Core modules:
//! - `automaton`: Rule 110 stepping, the scrolling history board, and the
//!   simulation clock that decouples generation rate from frame rate
//! - `renderer`: vertex batching and the WebGPU pipeline (one draw per frame)
//! - `config`: runtime toggles and persisted preferences

pub mod automaton;
pub mod config;
pub mod renderer;

pub use automaton::{Cell, ScrollingBoard, SimulationClock};
pub use config::RenderConfig;
pub use renderer::FrameRenderer;

/// Simulation and rendering constants
pub mod consts {
    /// Board width in cells (columns)
    pub const COLS: usize = 120;
    /// History window height in rows (generations kept on screen)
    pub const ROWS: usize = 100;

    /// Initial window size in pixels
    pub const DEFAULT_SCREEN_WIDTH: u32 = 1200;
    pub const DEFAULT_SCREEN_HEIGHT: u32 = 800;

    /// Vertex batch capacity. Worst case is COLS*ROWS cell quads plus
    /// (COLS+1)+(ROWS+1) grid lines at 6 vertices each (~73k); sized with
    /// headroom.
    pub const VERTEX_BUF_CAP: usize = 128 * 1024;

    /// Seconds between generations at startup
    pub const DEFAULT_GENERATION_INTERVAL: f32 = 0.15;
    /// Clamp range for the generation interval
    pub const MIN_GENERATION_INTERVAL: f32 = 0.01;
    pub const MAX_GENERATION_INTERVAL: f32 = 1.0;
    /// Interval change per speed keypress
    pub const GENERATION_INTERVAL_STEP: f32 = 0.01;

    /// Chance of each seeded column starting alive (the middle column is
    /// always alive)
    pub const DEFAULT_NOISE_PROBABILITY: f64 = 0.05;

    /// Largest frame delta fed to the clock, so an OS-level stall does not
    /// trigger a burst of catch-up generations
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Grid lines are skipped entirely below this cell size in pixels
    pub const GRID_MIN_CELL_PX: f32 = 2.0;
    /// Below this cell size only every GRID_SPARSE_STEP-th line is drawn
    pub const GRID_SPARSE_CELL_PX: f32 = 4.0;
    pub const GRID_SPARSE_STEP: usize = 5;
}
