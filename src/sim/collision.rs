//! Collision tests between the ball and axis-aligned rectangles
//!
//! Both tests are deliberately coarse: they look at the ball's center point,
//! not its full extent, and never compute contact normals or penetration.

use glam::Vec2;

use super::rect::Rect;

/// Ball bottom at or below the paddle's top edge, center within its span.
///
/// Only the top edge matters; a ball far below the paddle still counts.
#[inline]
pub fn ball_hits_paddle(center: Vec2, radius: f32, paddle: &Rect) -> bool {
    center.y + radius >= paddle.y() && paddle.spans_x(center.x)
}

/// Ball center inside the closed rectangle
#[inline]
pub fn point_in_rect(center: Vec2, rect: &Rect) -> bool {
    rect.contains_point(center)
}
