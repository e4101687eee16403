//! One simulation frame
//!
//! Ball physics, then paddle contact, then every still-visible brick in
//! playfield order. Velocities are per frame; there is no timestep.

use super::state::GameState;

/// What happened during a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Ball reversed on the paddle
    pub paddle_hit: bool,
    /// Bricks hidden this frame
    pub bricks_hit: u32,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) -> TickReport {
    let mut report = TickReport::default();

    state.frame += 1;
    state.ball.update(state.surface_width as f32);
    report.paddle_hit = state.ball.check_collision_with_paddle(&state.paddle);

    // Each hit flips vel.y independently; two hits in one frame cancel out
    for (index, brick) in state.playfield.iter_mut().enumerate() {
        if brick.is_visible() && state.ball.check_collision_with_brick(brick) {
            brick.hide();
            report.bricks_hit += 1;
            log::debug!("Frame {}: brick {} destroyed", state.frame, index);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Ball, Brick};
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_tick_moves_ball_and_counts_frames() {
        let mut state = GameState::new(1080, 1920);
        let report = tick(&mut state);
        assert_eq!(state.frame, 1);
        assert_eq!(state.ball.pos, Vec2::new(555.0, 1755.0));
        assert_eq!(report, TickReport::default());
    }

    #[test]
    fn test_tick_hides_struck_brick() {
        let mut state = GameState::new(1080, 1920);
        // Row 4 spans y 240..=290; after one step the center lands at (105, 280)
        state.ball = Ball::new(90.0, 295.0, 20.0);

        let report = tick(&mut state);
        assert_eq!(report.bricks_hit, 1);
        assert!(!state.playfield.at(4, 0).unwrap().is_visible());
        assert_eq!(state.playfield.visible_count(), 29);
        assert_eq!(state.ball.vel.y, 15.0);
    }

    #[test]
    fn test_hidden_brick_is_ignored() {
        let mut state = GameState::new(1080, 1920);
        state.playfield.get_mut(24).unwrap().hide();
        state.ball = Ball::new(90.0, 295.0, 20.0);

        let report = tick(&mut state);
        assert_eq!(report.bricks_hit, 0);
        assert_eq!(state.ball.vel.y, -15.0);
    }

    #[test]
    fn test_paddle_bounce_in_tick() {
        let mut state = GameState::new(1080, 1920);
        state.paddle.set_x(500.0);
        state.ball = Ball::new(500.0, 1790.0, 20.0);
        state.ball.vel = Vec2::new(15.0, 15.0);

        let report = tick(&mut state);
        assert!(report.paddle_hit);
        assert_eq!(state.ball.vel, Vec2::new(15.0, -15.0));
    }

    #[test]
    fn test_double_hit_cancels() {
        // Two bricks sharing an edge both contain a center sitting on it
        let left = Brick::new(0.0, 0.0, 100.0, 50.0);
        let right = Brick::new(100.0, 0.0, 100.0, 50.0);
        let mut ball = Ball::new(100.0, 25.0, 20.0);
        let before = ball.vel.y;

        assert!(ball.check_collision_with_brick(&left));
        assert!(ball.check_collision_with_brick(&right));
        assert_eq!(ball.vel.y, before);
    }

    #[test]
    fn test_padding_gap_is_not_a_hit() {
        let mut state = GameState::new(1080, 1920);
        // x = 185 sits between column 0 (0..=180) and column 1 (190..=370)
        state.ball = Ball::new(185.0, 40.0, 20.0);
        state.ball.vel = Vec2::ZERO;

        let report = tick(&mut state);
        assert_eq!(report.bricks_hit, 0);
        assert_eq!(state.playfield.visible_count(), 30);
    }

    proptest! {
        #[test]
        fn prop_visibility_is_monotonic(x in 20.0f32..1040.0, y in 0.0f32..400.0, frames in 1usize..200) {
            let mut state = GameState::new(1080, 1920);
            state.ball = Ball::new(x, y, 20.0);
            let mut seen_hidden = [false; 30];

            for _ in 0..frames {
                tick(&mut state);
                for (i, brick) in state.playfield.iter().enumerate() {
                    if seen_hidden[i] {
                        prop_assert!(!brick.is_visible());
                    }
                    if !brick.is_visible() {
                        seen_hidden[i] = true;
                    }
                }
            }
        }
    }
}
