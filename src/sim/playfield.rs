//! The brick grid
//!
//! A fixed 5×6 arena of bricks, stored row-major. The layout is computed once
//! from the surface width and never changes; only visibility flags flip.

use super::state::Brick;
use crate::consts::{BRICK_COLS, BRICK_COUNT, BRICK_HEIGHT, BRICK_PADDING};

#[derive(Debug, Clone)]
pub struct Playfield {
    bricks: [Brick; BRICK_COUNT],
}

impl Playfield {
    /// Build the grid for a surface `surface_width` pixels wide.
    ///
    /// Cell width is `surface_width / 6` in whole pixels; the right-most
    /// column overhangs the surface edge by the accumulated padding.
    pub fn generate(surface_width: u32) -> Self {
        let brick_width = (surface_width / BRICK_COLS as u32) as f32;

        let bricks = std::array::from_fn(|index| {
            let row = index / BRICK_COLS;
            let col = index % BRICK_COLS;
            Brick::new(
                col as f32 * (brick_width + BRICK_PADDING),
                row as f32 * (BRICK_HEIGHT + BRICK_PADDING),
                brick_width,
                BRICK_HEIGHT,
            )
        });

        Self { bricks }
    }

    /// Total slots, visible or not
    #[inline]
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Brick> {
        self.bricks.get(index)
    }

    /// Brick at a grid cell
    pub fn at(&self, row: usize, col: usize) -> Option<&Brick> {
        if col >= BRICK_COLS {
            return None;
        }
        self.bricks.get(row * BRICK_COLS + col)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Brick> {
        self.bricks.get_mut(index)
    }

    /// Bricks in playfield order
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.is_visible())
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    pub fn is_cleared(&self) -> bool {
        self.visible_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BRICK_ROWS;

    #[test]
    fn test_layout_1080() {
        let field = Playfield::generate(1080);
        assert_eq!(field.len(), 30);

        for row in 0..BRICK_ROWS {
            for col in 0..BRICK_COLS {
                let brick = field.at(row, col).unwrap();
                assert_eq!(brick.x(), col as f32 * 190.0);
                assert_eq!(brick.y(), row as f32 * 60.0);
                assert_eq!(brick.width(), 180.0);
                assert_eq!(brick.height(), 50.0);
                assert!(brick.is_visible());
            }
        }
    }

    #[test]
    fn test_layout_is_row_major() {
        let field = Playfield::generate(1080);
        let seventh = field.get(7).unwrap();
        // Row 1, column 1
        assert_eq!(seventh.x(), 190.0);
        assert_eq!(seventh.y(), 60.0);
    }

    #[test]
    fn test_brick_width_uses_integer_division() {
        let field = Playfield::generate(1000);
        assert_eq!(field.get(0).unwrap().width(), 166.0);
        assert_eq!(field.at(0, 2).unwrap().x(), 352.0);
    }

    #[test]
    fn test_at_out_of_range() {
        let field = Playfield::generate(1080);
        assert!(field.at(0, 6).is_none());
        assert!(field.at(5, 0).is_none());
    }

    #[test]
    fn test_visible_count() {
        let mut field = Playfield::generate(1080);
        assert_eq!(field.visible_count(), 30);
        field.get_mut(3).unwrap().hide();
        field.get_mut(29).unwrap().hide();
        assert_eq!(field.visible_count(), 28);
        assert!(!field.is_cleared());

        for brick in field.iter_mut() {
            brick.hide();
        }
        assert!(field.is_cleared());
    }
}
