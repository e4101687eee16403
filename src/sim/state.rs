//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives here. Rendering is attached to
//! these types from `renderer::scene` so the simulation stays drawing-free.

use glam::Vec2;

use super::collision::{ball_hits_paddle, point_in_rect};
use super::playfield::Playfield;
use super::rect::Rect;
use crate::consts::*;

/// The player's paddle (horizontal movement only)
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Left edge, top edge and size
    pub rect: Rect,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0);
        Self {
            rect: Rect::new(x, y, width, height),
        }
    }

    /// Left edge
    #[inline]
    pub fn x(&self) -> f32 {
        self.rect.min.x
    }

    /// Top edge
    #[inline]
    pub fn y(&self) -> f32 {
        self.rect.min.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.rect.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.rect.size.y
    }

    /// Center the paddle on a pointer sample.
    ///
    /// No clamping: the paddle may slide partly or fully off the surface.
    pub fn set_x(&mut self, center_x: f32) {
        self.rect.min.x = center_x - self.rect.size.x / 2.0;
    }
}

/// The ball: a circle with a fixed per-frame velocity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Displacement per frame
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Spawn a ball heading up and to the right
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        debug_assert!(radius > 0.0);
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::new(BALL_SPEED, -BALL_SPEED),
            radius,
        }
    }

    /// Advance one frame and bounce off the side and top walls.
    ///
    /// There is no bottom wall: a ball that gets past the paddle keeps going.
    pub fn update(&mut self, surface_width: f32) {
        self.pos += self.vel;

        if self.pos.x <= 0.0 || self.pos.x >= surface_width - self.radius {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y <= 0.0 {
            self.vel.y = -self.vel.y;
        }
    }

    /// Flip vertical direction when touching the paddle. Returns whether it did.
    pub fn check_collision_with_paddle(&mut self, paddle: &Paddle) -> bool {
        if ball_hits_paddle(self.pos, self.radius, &paddle.rect) {
            self.vel.y = -self.vel.y;
            return true;
        }
        false
    }

    /// Flip vertical direction when the center is inside the brick.
    ///
    /// Only `vel.y` changes, whichever edge was struck. The caller hides the brick.
    pub fn check_collision_with_brick(&mut self, brick: &Brick) -> bool {
        if point_in_rect(self.pos, &brick.rect) {
            self.vel.y = -self.vel.y;
            return true;
        }
        false
    }
}

/// A destructible brick
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    rect: Rect,
    visible: bool,
}

impl Brick {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            visible: true,
        }
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.rect.min.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.rect.min.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.rect.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.rect.size.y
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Knock the brick out. There is no way back.
    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// Complete game state, laid out once from the surface size
#[derive(Debug, Clone)]
pub struct GameState {
    /// Surface size in pixels, fixed for the lifetime of the state
    pub surface_width: u32,
    pub surface_height: u32,
    pub paddle: Paddle,
    pub ball: Ball,
    pub playfield: Playfield,
    /// Frames simulated so far
    pub frame: u64,
}

impl GameState {
    /// Lay out paddle, ball and the brick grid for a surface of the given size
    pub fn new(surface_width: u32, surface_height: u32) -> Self {
        // Integer halving matches the brick grid's integer cell width
        let mid_x = (surface_width / 2) as f32;
        let height = surface_height as f32;

        Self {
            surface_width,
            surface_height,
            paddle: Paddle::new(
                mid_x,
                height - PADDLE_BOTTOM_OFFSET,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
            ball: Ball::new(mid_x, height - BALL_BOTTOM_OFFSET, BALL_RADIUS),
            playfield: Playfield::generate(surface_width),
            frame: 0,
        }
    }
}
