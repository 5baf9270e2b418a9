//! Rule 110 simulation module
//!
//! Pure and deterministic: stepping is a total function over rows, the board
//! owns a seeded RNG, and nothing here touches the renderer or the platform.

pub mod board;
pub mod clock;
pub mod rule;

pub use board::{Row, ScrollingBoard};
pub use clock::SimulationClock;
pub use rule::{Cell, RULE_110, step_row};
