//! Fixed-capacity vertex accumulator
//!
//! Primitives are appended as pairs of triangles into one flat buffer that
//! is uploaded to the GPU once per frame. Storage is allocated once and
//! reused; `clear` only resets the cursor. A push that would exceed
//! capacity is dropped whole and logged, so a dense frame loses primitives
//! instead of corrupting the batch.

use glam::Vec2;

use super::vertex::Vertex;

#[derive(Debug)]
pub struct VertexBatch {
    vertices: Vec<Vertex>,
    capacity: usize,
    /// Primitives dropped since the last clear
    dropped: u64,
}

impl VertexBatch {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Reset the cursor without releasing storage
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.dropped = 0;
    }

    fn push_triangles(&mut self, verts: [Vertex; 6]) {
        if self.vertices.len() + verts.len() > self.capacity {
            self.dropped += 1;
            log::warn!(
                "vertex batch full ({} vertices), dropping primitive",
                self.capacity
            );
            return;
        }
        self.vertices.extend_from_slice(&verts);
    }

    /// Axis-aligned quad from `top_left` to `bottom_right`: two triangles,
    /// six vertices
    pub fn push_quad(&mut self, top_left: Vec2, bottom_right: Vec2, color: [f32; 4]) {
        let a = top_left;
        let b = Vec2::new(bottom_right.x, top_left.y);
        let c = Vec2::new(top_left.x, bottom_right.y);
        let d = bottom_right;

        self.push_triangles([
            Vertex::new(a.x, a.y, [0.0, 0.0], color),
            Vertex::new(b.x, b.y, [1.0, 0.0], color),
            Vertex::new(c.x, c.y, [0.0, 1.0], color),
            Vertex::new(b.x, b.y, [1.0, 0.0], color),
            Vertex::new(c.x, c.y, [0.0, 1.0], color),
            Vertex::new(d.x, d.y, [1.0, 1.0], color),
        ]);
    }

    /// Line from `p1` to `p2` as a quad extruded half the thickness to each
    /// side. A zero-length line has no direction to extrude along and
    /// degenerates to zero width rather than dividing by zero.
    pub fn push_line(&mut self, p1: Vec2, p2: Vec2, color: [f32; 4], thickness: f32) {
        let dir = p2 - p1;
        let offset = Vec2::new(-dir.y, dir.x).normalize_or_zero() * (thickness * 0.5);

        let a = p1 + offset;
        let b = p1 - offset;
        let c = p2 + offset;
        let d = p2 - offset;

        self.push_triangles([
            Vertex::new(a.x, a.y, [0.0, 0.0], color),
            Vertex::new(b.x, b.y, [0.0, 1.0], color),
            Vertex::new(c.x, c.y, [1.0, 0.0], color),
            Vertex::new(b.x, b.y, [0.0, 1.0], color),
            Vertex::new(c.x, c.y, [1.0, 0.0], color),
            Vertex::new(d.x, d.y, [1.0, 1.0], color),
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_quad_appends_six_vertices() {
        let mut batch = VertexBatch::with_capacity(64);
        batch.push_quad(Vec2::ZERO, Vec2::new(10.0, 10.0), WHITE);
        assert_eq!(batch.len(), 6);
        batch.push_line(Vec2::ZERO, Vec2::new(10.0, 0.0), WHITE, 1.0);
        assert_eq!(batch.len(), 12);
    }

    #[test]
    fn test_quad_corners() {
        let mut batch = VertexBatch::with_capacity(64);
        batch.push_quad(Vec2::new(1.0, 2.0), Vec2::new(5.0, 8.0), WHITE);
        let positions: Vec<[f32; 2]> = batch.vertices().iter().map(|v| v.position).collect();
        assert!(positions.contains(&[1.0, 2.0]));
        assert!(positions.contains(&[5.0, 2.0]));
        assert!(positions.contains(&[1.0, 8.0]));
        assert!(positions.contains(&[5.0, 8.0]));
    }

    #[test]
    fn test_overflow_drops_whole_primitives() {
        let mut batch = VertexBatch::with_capacity(12);
        batch.push_quad(Vec2::ZERO, Vec2::ONE, WHITE);
        batch.push_quad(Vec2::ZERO, Vec2::ONE, WHITE);
        batch.push_quad(Vec2::ZERO, Vec2::ONE, WHITE);
        assert_eq!(batch.len(), 12);
        assert_eq!(batch.dropped(), 1);
    }

    #[test]
    fn test_clear_keeps_storage() {
        let mut batch = VertexBatch::with_capacity(12);
        batch.push_quad(Vec2::ZERO, Vec2::ONE, WHITE);
        batch.clear();
        assert!(batch.is_empty());
        assert_eq!(batch.dropped(), 0);
        batch.push_quad(Vec2::ZERO, Vec2::ONE, WHITE);
        assert_eq!(batch.len(), 6);
    }

    #[test]
    fn test_line_thickness_offsets_perpendicular() {
        let mut batch = VertexBatch::with_capacity(12);
        batch.push_line(Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0), WHITE, 2.0);
        // Horizontal line: offsets are purely vertical, y spans 4..=6.
        for v in batch.vertices() {
            assert!(v.position[1] == 4.0 || v.position[1] == 6.0);
        }
    }

    #[test]
    fn test_degenerate_line_is_finite() {
        let mut batch = VertexBatch::with_capacity(12);
        batch.push_line(Vec2::new(3.0, 3.0), Vec2::new(3.0, 3.0), WHITE, 2.0);
        assert_eq!(batch.len(), 6);
        for v in batch.vertices() {
            assert!(v.position[0].is_finite() && v.position[1].is_finite());
            assert_eq!(v.position, [3.0, 3.0]);
        }
    }

    proptest! {
        #[test]
        fn prop_len_never_exceeds_capacity(pushes in 0usize..64, cap_quads in 0usize..16) {
            let capacity = cap_quads * 6;
            let mut batch = VertexBatch::with_capacity(capacity);
            for i in 0..pushes {
                if i % 2 == 0 {
                    batch.push_quad(Vec2::ZERO, Vec2::ONE, WHITE);
                } else {
                    batch.push_line(Vec2::ZERO, Vec2::ONE, WHITE, 1.0);
                }
            }
            prop_assert!(batch.len() <= capacity);
            prop_assert_eq!(batch.len() + batch.dropped() as usize * 6, pushes * 6);
        }
    }
}
