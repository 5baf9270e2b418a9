//! Rule 110 stepping
//!
//! Each cell's next state is looked up from the 3-bit pattern formed by its
//! left neighbor, itself, and its right neighbor. Cells outside the row are
//! dead (hard boundary, no wraparound).

/// A single automaton cell
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    #[inline]
    fn bit(self) -> usize {
        self as usize
    }
}

/// The Rule 110 lookup table, indexed by `left << 2 | center << 1 | right`
pub const RULE_110: [Cell; 8] = [
    Cell::Dead,  // 0b000
    Cell::Alive, // 0b001
    Cell::Alive, // 0b010
    Cell::Alive, // 0b011
    Cell::Dead,  // 0b100
    Cell::Alive, // 0b101
    Cell::Alive, // 0b110
    Cell::Dead,  // 0b111
];

/// Compute one generation: `next[i]` from `prev[i-1..=i+1]`.
///
/// `prev` and `next` must have the same length. Boundary columns treat the
/// missing neighbor as dead.
pub fn step_row(prev: &[Cell], next: &mut [Cell]) {
    debug_assert_eq!(prev.len(), next.len());
    if prev.is_empty() {
        return;
    }

    let last = prev.len() - 1;
    for i in 0..prev.len() {
        let left = if i == 0 { Cell::Dead } else { prev[i - 1] };
        let right = if i == last { Cell::Dead } else { prev[i + 1] };
        let pattern = (left.bit() << 2) | (prev[i].bit() << 1) | right.bit();
        next[i] = RULE_110[pattern];
    }
}
