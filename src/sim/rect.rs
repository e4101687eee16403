//! Axis-aligned rectangle geometry for bricks and the paddle
//!
//! Screen space: origin at the top-left of the surface, y grows downward.
//! A rectangle is its top-left corner plus a size; edges are inclusive.

use glam::Vec2;

/// An axis-aligned rectangle in surface pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Horizontal extent check, both edges inclusive
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.min.x && x <= self.min.x + self.size.x
    }

    /// Vertical extent check, both edges inclusive
    #[inline]
    pub fn spans_y(&self, y: f32) -> bool {
        y >= self.min.y && y <= self.min.y + self.size.y
    }

    /// Check if a point lies inside the closed rectangle
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.spans_x(point.x) && self.spans_y(point.y)
    }
}
