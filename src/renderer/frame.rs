//! Board-to-primitive conversion
//!
//! Walks the board's filled rows every frame and emits one quad per alive
//! cell plus optional grid lines, recomputing cell size from the current
//! viewport so window resizes take effect immediately.

use glam::Vec2;

use crate::automaton::ScrollingBoard;
use crate::config::RenderConfig;
use crate::consts::{GRID_MIN_CELL_PX, GRID_SPARSE_CELL_PX, GRID_SPARSE_STEP, VERTEX_BUF_CAP};

use super::batch::VertexBatch;
use super::vertex::{Vertex, colors};

const GRID_LINE_THICKNESS: f32 = 1.0;

pub struct FrameRenderer {
    batch: VertexBatch,
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameRenderer {
    pub fn new() -> Self {
        Self {
            batch: VertexBatch::with_capacity(VERTEX_BUF_CAP),
        }
    }

    /// Rebatch the board for one frame and return the vertex list to upload.
    ///
    /// Only the filled rows are drawn; dead filler below the active row
    /// stays blank while the window fills. Grid lines appear only when
    /// cells are larger than a pixel threshold, and thin out to every
    /// GRID_SPARSE_STEP-th line as cells shrink, keeping the primitive
    /// count bounded on small windows.
    pub fn render(
        &mut self,
        board: &ScrollingBoard,
        config: &RenderConfig,
        viewport_width: f32,
        viewport_height: f32,
    ) -> &[Vertex] {
        self.batch.clear();

        let cell_width = viewport_width / board.width() as f32;
        let cell_height = viewport_height / board.height() as f32;

        for (row_index, row) in board.visible_rows().iter().enumerate() {
            let y = row_index as f32 * cell_height;
            for (col, cell) in row.cells().iter().enumerate() {
                if cell.is_alive() {
                    let x = col as f32 * cell_width;
                    self.batch.push_quad(
                        Vec2::new(x, y),
                        Vec2::new(x + cell_width, y + cell_height),
                        colors::CELL,
                    );
                }
            }
        }

        if config.show_grid && cell_width > GRID_MIN_CELL_PX && cell_height > GRID_MIN_CELL_PX {
            let col_step = if cell_width < GRID_SPARSE_CELL_PX {
                GRID_SPARSE_STEP
            } else {
                1
            };
            for col in (0..=board.width()).step_by(col_step) {
                let x = col as f32 * cell_width;
                self.batch.push_line(
                    Vec2::new(x, 0.0),
                    Vec2::new(x, viewport_height),
                    colors::GRID,
                    GRID_LINE_THICKNESS,
                );
            }

            let row_step = if cell_height < GRID_SPARSE_CELL_PX {
                GRID_SPARSE_STEP
            } else {
                1
            };
            for row in (0..board.filled_rows()).step_by(row_step) {
                let y = row as f32 * cell_height;
                self.batch.push_line(
                    Vec2::new(0.0, y),
                    Vec2::new(viewport_width, y),
                    colors::GRID,
                    GRID_LINE_THICKNESS,
                );
            }
        }

        self.batch.vertices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Cell;

    // Noise 0.0 leaves exactly the guaranteed middle cell alive.
    fn quiet_board(width: usize, height: usize) -> ScrollingBoard {
        ScrollingBoard::new(width, height, 7, 0.0)
    }

    fn no_grid() -> RenderConfig {
        RenderConfig {
            show_grid: false,
            ..RenderConfig::default()
        }
    }

    fn alive_cells(board: &ScrollingBoard) -> usize {
        board
            .visible_rows()
            .iter()
            .flat_map(|r| r.cells())
            .filter(|c| c.is_alive())
            .count()
    }

    #[test]
    fn test_one_quad_per_alive_cell() {
        let mut board = quiet_board(9, 4);
        board.advance();
        board.advance();

        let mut frame = FrameRenderer::new();
        let vertices = frame.render(&board, &no_grid(), 900.0, 400.0);
        assert_eq!(vertices.len(), alive_cells(&board) * 6);
        assert!(vertices.iter().all(|v| v.color == colors::CELL));
    }

    #[test]
    fn test_unfilled_rows_emit_nothing() {
        let board = quiet_board(9, 4);
        let mut frame = FrameRenderer::new();
        let vertices = frame.render(&board, &no_grid(), 900.0, 400.0);

        // One filled row, one alive cell: a single quad, confined to the
        // top row of the viewport (cell height 100).
        assert_eq!(vertices.len(), 6);
        assert!(vertices.iter().all(|v| v.position[1] <= 100.0));
    }

    #[test]
    fn test_grid_covers_filled_extent_only() {
        let board = quiet_board(10, 10);
        let mut frame = FrameRenderer::new();
        let config = RenderConfig::default();

        // Cell size 100x80: full-density grid. One alive cell plus 11
        // vertical lines plus 1 horizontal line (only row 0 is filled).
        let vertices = frame.render(&board, &config, 1000.0, 800.0);
        assert_eq!(vertices.len(), (1 + 11 + 1) * 6);
    }

    #[test]
    fn test_grid_hidden_below_pixel_threshold() {
        let board = quiet_board(10, 10);
        let mut frame = FrameRenderer::new();
        let config = RenderConfig::default();

        // 15x15 px viewport: cells are 1.5 px, under the 2 px cutoff.
        let vertices = frame.render(&board, &config, 15.0, 15.0);
        assert_eq!(vertices.len(), 6); // just the alive cell
    }

    #[test]
    fn test_grid_thins_out_when_cells_shrink() {
        let board = quiet_board(100, 10);
        let mut frame = FrameRenderer::new();
        let config = RenderConfig::default();

        // Cell width 3 px (between the 2 px cutoff and the 4 px sparse
        // threshold): vertical lines drop to every 5th column.
        let sparse = frame.render(&board, &config, 300.0, 800.0).len();
        let dense = frame.render(&board, &config, 800.0, 800.0).len();
        assert!(sparse < dense);

        // 101 columns at stride 5 -> 21 vertical lines.
        let expected_sparse = (1 + 21 + 1) * 6;
        assert_eq!(sparse, expected_sparse);
    }

    #[test]
    fn test_resize_rescales_cells() {
        let board = quiet_board(9, 4);
        // Make the middle cell's quad easy to find.
        assert!(board.row(0).cells()[4] == Cell::Alive);

        let mut frame = FrameRenderer::new();
        let wide = frame.render(&board, &no_grid(), 900.0, 400.0).to_vec();
        let narrow = frame.render(&board, &no_grid(), 450.0, 400.0).to_vec();
        assert_eq!(wide[0].position[0], narrow[0].position[0] * 2.0);
    }
}
