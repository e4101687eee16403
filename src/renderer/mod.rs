//! Rendering module
//!
//! Game entities paint themselves onto a [`DrawTarget`]. Two targets exist:
//! a software [`PixelBuffer`] and a [`VertexBatch`] that feeds the WebGPU
//! pipeline behind [`GpuSurface`].

pub mod pipeline;
pub mod pixel_buffer;
pub mod scene;
pub mod shapes;
pub mod vertex;
pub mod vertex_batch;

use glam::Vec2;

use crate::sim::Rect;

pub use pipeline::GpuSurface;
pub use pixel_buffer::PixelBuffer;
pub use scene::draw;
pub use vertex::{Vertex, colors};
pub use vertex_batch::VertexBatch;

/// RGBA color, each channel in 0..=1
pub type Color = [f32; 4];

/// Something a frame can be painted onto
pub trait DrawTarget {
    /// Fill the whole target with one color
    fn clear(&mut self, color: Color);
    /// Fill an axis-aligned rectangle (surface pixels)
    fn fill_rect(&mut self, rect: &Rect, color: Color);
    /// Fill a circle centered at `center`
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}
