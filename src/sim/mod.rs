//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Per-frame velocities, no wall-clock time
//! - Stable iteration order (playfield order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod playfield;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{ball_hits_paddle, point_in_rect};
pub use playfield::Playfield;
pub use rect::Rect;
pub use state::{Ball, Brick, GameState, Paddle};
pub use tick::{TickReport, tick};
