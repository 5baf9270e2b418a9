//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex with pixel-space position, texture coordinate, and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, uv: [f32; 2], color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            uv,
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: (std::mem::size_of::<[f32; 2]>() * 2) as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for board elements
pub mod colors {
    pub const CELL: [f32; 4] = [0.73, 0.67, 1.0, 1.0];
    pub const GRID: [f32; 4] = [0.2, 0.2, 0.2, 0.3];
    pub const BACKGROUND: [f32; 4] = [0.1, 0.1, 0.1, 1.0];
}
