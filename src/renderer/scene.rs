//! Painting game entities
//!
//! Draw order: background, paddle, ball, then visible bricks in playfield order.

use super::{DrawTarget, colors};
use crate::sim::{Ball, Brick, GameState, Paddle};

impl Paddle {
    pub fn draw<T: DrawTarget + ?Sized>(&self, target: &mut T) {
        target.fill_rect(&self.rect, colors::PADDLE);
    }
}

impl Ball {
    pub fn draw<T: DrawTarget + ?Sized>(&self, target: &mut T) {
        target.fill_circle(self.pos, self.radius, colors::BALL);
    }
}

impl Brick {
    /// Paints unconditionally; callers skip hidden bricks
    pub fn draw<T: DrawTarget + ?Sized>(&self, target: &mut T) {
        target.fill_rect(self.rect(), colors::BRICK);
    }
}

/// Paint a whole frame
pub fn draw<T: DrawTarget + ?Sized>(state: &GameState, target: &mut T) {
    target.clear(colors::BACKGROUND);
    state.paddle.draw(target);
    state.ball.draw(target);
    for brick in state.playfield.visible() {
        brick.draw(target);
    }
}
