//! Triangle-list draw target for GPU upload

use glam::Vec2;

use super::shapes::{self, CIRCLE_SEGMENTS};
use super::vertex::{Vertex, colors};
use super::{Color, DrawTarget};
use crate::sim::Rect;

/// Collects one frame's draw calls as triangles in surface pixels.
///
/// `clear` drops everything recorded so far and becomes the render pass
/// clear color instead of a quad.
#[derive(Debug, Clone)]
pub struct VertexBatch {
    vertices: Vec<Vertex>,
    clear_color: Color,
}

impl Default for VertexBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexBatch {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            clear_color: colors::BACKGROUND,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Reset for reuse without freeing the allocation
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.clear_color = colors::BACKGROUND;
    }
}

impl DrawTarget for VertexBatch {
    fn clear(&mut self, color: Color) {
        self.vertices.clear();
        self.clear_color = color;
    }

    fn fill_rect(&mut self, rect: &Rect, color: Color) {
        self.vertices.extend_from_slice(&shapes::rect(rect, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.vertices
            .extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS));
    }
}
