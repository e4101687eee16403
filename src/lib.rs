//! Brick Breaker - a minimal breakout game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle, ball, bricks, collisions)
//! - `renderer`: Draw targets (software pixel buffer, WebGPU vertex path)
//! - `platform`: Surface provider seam and pointer input latch
//! - `game_loop`: Frame driver, render thread and lifecycle hooks
//! - `settings`: Host configuration

pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game_loop::{GameHost, GameLoop, LoopPhase};
pub use settings::Settings;

/// Game configuration constants (pixel units, per-frame velocities)
pub mod consts {
    /// Brick grid dimensions
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 6;
    pub const BRICK_COUNT: usize = BRICK_ROWS * BRICK_COLS;
    pub const BRICK_HEIGHT: f32 = 50.0;
    /// Gap between neighbouring bricks (both axes)
    pub const BRICK_PADDING: f32 = 10.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 200.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Paddle top edge distance from the bottom of the surface
    pub const PADDLE_BOTTOM_OFFSET: f32 = 100.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 20.0;
    /// Ball center distance from the bottom of the surface at spawn
    pub const BALL_BOTTOM_OFFSET: f32 = 150.0;
    /// Per-axis speed in pixels per frame
    pub const BALL_SPEED: f32 = 15.0;
}
