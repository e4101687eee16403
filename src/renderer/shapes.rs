//! Shape tessellation for 2D primitives
//!
//! Everything comes out as a flat triangle list in surface pixels.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Segments used for the ball outline
pub const CIRCLE_SEGMENTS: u32 = 32;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let min = rect.min;
    let max = rect.max();

    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}
