//! Software RGBA8 draw target
//!
//! Used by the headless host and by tests that check what actually landed on
//! the surface. Shapes cover a pixel when the pixel's center is inside them.

use glam::Vec2;

use super::{Color, DrawTarget};
use crate::sim::Rect;

/// Convert a 0..=1 color channel to a byte
#[inline]
fn channel_to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[inline]
fn color_to_rgba(color: Color) -> [u8; 4] {
    [
        channel_to_u8(color[0]),
        channel_to_u8(color[1]),
        channel_to_u8(color[2]),
        channel_to_u8(color[3]),
    ]
}

/// RGBA8888 pixel buffer, row-major, top row first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read one pixel; `None` outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        let mut out = [0; 4];
        out.copy_from_slice(&self.pixels[i..i + 4]);
        Some(out)
    }

    /// Count pixels exactly matching a color
    pub fn count_color(&self, color: Color) -> usize {
        let rgba = color_to_rgba(color);
        self.pixels.chunks_exact(4).filter(|p| *p == rgba).count()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Pixel columns/rows whose centers fall in `[lo, hi)`, clipped to `limit`
    fn covered_span(lo: f32, hi: f32, limit: u32) -> std::ops::Range<u32> {
        let start = (lo - 0.5).ceil().max(0.0);
        let end = (hi - 0.5).ceil().clamp(0.0, limit as f32);
        if start >= end {
            return 0..0;
        }
        start as u32..end as u32
    }

    fn put(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.index(x, y);
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }
}

impl DrawTarget for PixelBuffer {
    fn clear(&mut self, color: Color) {
        let rgba = color_to_rgba(color);
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    fn fill_rect(&mut self, rect: &Rect, color: Color) {
        let rgba = color_to_rgba(color);
        let max = rect.max();
        let xs = Self::covered_span(rect.min.x, max.x, self.width);
        let ys = Self::covered_span(rect.min.y, max.y, self.height);

        for y in ys {
            for x in xs.clone() {
                self.put(x, y, rgba);
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let rgba = color_to_rgba(color);
        let r2 = radius * radius;
        let xs = Self::covered_span(center.x - radius, center.x + radius, self.width);
        let ys = Self::covered_span(center.y - radius, center.y + radius, self.height);

        for y in ys {
            let dy = y as f32 + 0.5 - center.y;
            for x in xs.clone() {
                let dx = x as f32 + 0.5 - center.x;
                if dx * dx + dy * dy <= r2 {
                    self.put(x, y, rgba);
                }
            }
        }
    }
}
