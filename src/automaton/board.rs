//! Scrolling history board
//!
//! A fixed-height window over the automaton's history. While the window is
//! still filling, each advance computes one new row below the last; once
//! full, each advance drops the oldest row and computes a new bottom row.
//! All rows are allocated once at construction; advancing never allocates.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rule::{Cell, step_row};

/// One generation of cells. Fixed length, never resized after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    fn dead(width: usize) -> Self {
        Self {
            cells: vec![Cell::Dead; width],
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Bounded automaton history with a scroll-and-append policy
#[derive(Debug)]
pub struct ScrollingBoard {
    /// Always exactly `height` rows; rows past `active_row` are dead filler
    /// until the window has filled
    rows: Vec<Row>,
    width: usize,
    /// Index of the most recently computed row. Pinned at height-1 once the
    /// window is full.
    active_row: usize,
    /// Generations advanced since the last reset
    generation: u64,
    rng: Pcg32,
    noise_probability: f64,
}

impl ScrollingBoard {
    /// Create a board with a freshly seeded first row.
    ///
    /// `height` must be at least 2: the scroll step recomputes the bottom
    /// row from the one above it.
    pub fn new(width: usize, height: usize, seed: u64, noise_probability: f64) -> Self {
        assert!(width >= 1, "board width must be at least 1");
        assert!(height >= 2, "board height must be at least 2");

        let mut board = Self {
            rows: vec![Row::dead(width); height],
            width,
            active_row: 0,
            generation: 0,
            rng: Pcg32::seed_from_u64(seed),
            noise_probability,
        };
        board.seed_first_row();
        board
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn active_row_index(&self) -> usize {
        self.active_row
    }

    /// Number of rows holding computed generations
    pub fn filled_rows(&self) -> usize {
        self.active_row + 1
    }

    /// The computed rows, oldest first. Never includes dead filler rows.
    pub fn visible_rows(&self) -> &[Row] {
        &self.rows[..=self.active_row]
    }

    pub fn row(&self, index: usize) -> &Row {
        &self.rows[index]
    }

    /// Advance one generation.
    ///
    /// Filling phase: the new row lands at `active_row + 1`. Scrolling
    /// phase: row 0 is dropped, the rest shift up, and the new row is
    /// computed at the bottom from the row above it.
    pub fn advance(&mut self) {
        let height = self.rows.len();
        if self.active_row + 1 < height {
            self.active_row += 1;
            let (prev, rest) = self.rows.split_at_mut(self.active_row);
            step_row(&prev[self.active_row - 1].cells, &mut rest[0].cells);
        } else {
            self.rows.rotate_left(1);
            let (prev, rest) = self.rows.split_at_mut(height - 1);
            step_row(&prev[height - 2].cells, &mut rest[0].cells);
        }
        self.generation += 1;
    }

    /// Return to the filling phase with a freshly randomized first row
    pub fn reset(&mut self) {
        for row in &mut self.rows {
            row.cells.fill(Cell::Dead);
        }
        self.active_row = 0;
        self.generation = 0;
        self.seed_first_row();
    }

    /// Middle column alive unconditionally, every other column alive with
    /// `noise_probability`. The guaranteed middle cell keeps the automaton
    /// active even under unlucky draws.
    fn seed_first_row(&mut self) {
        let first = &mut self.rows[0].cells;
        for cell in first.iter_mut() {
            *cell = if self.rng.random_bool(self.noise_probability) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        }
        first[self.width / 2] = Cell::Alive;
    }
}
