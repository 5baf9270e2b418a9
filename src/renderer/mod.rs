//! WebGPU rendering module
//!
//! Immediate-mode: every frame the board is re-batched into a flat vertex
//! list and drawn with a single triangle-list draw call.

pub mod batch;
pub mod frame;
pub mod pipeline;
pub mod vertex;

pub use batch::VertexBatch;
pub use frame::FrameRenderer;
pub use pipeline::RenderState;
pub use vertex::Vertex;
