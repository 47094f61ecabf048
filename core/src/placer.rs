use alloc::vec::Vec;
use rand::prelude::*;

use crate::*;

/// Resolves an em based button size to whole pixels for the given font size.
pub fn button_size(width_em: f32, height_em: f32, font_px: f32) -> ButtonSize {
    // round half up, negative and NaN saturate to 0 on cast
    let resolve = |em: f32| (em * font_px + 0.5) as Px;
    ButtonSize::new(resolve(width_em), resolve(height_em))
}

/// Lays `count` buttons out left-to-right in rows, starting at `(margin, margin)`.
///
/// A row wraps as soon as the next button's right edge would pass `board_width - margin`. The first button of a row
/// is always placed, even when the board is too narrow for it.
pub fn grid_positions(
    count: usize,
    size: ButtonSize,
    board_width: Px,
    margin: Px,
    spacing: Px,
) -> Vec<Position> {
    let right_limit = board_width.saturating_sub(margin);
    let step_x = size.width.saturating_add(spacing);
    let step_y = size.height.saturating_add(spacing);

    let mut positions = Vec::with_capacity(count);
    let (mut top, mut left) = (margin, margin);
    for _ in 0..count {
        if left != margin && left.saturating_add(size.width) > right_limit {
            left = margin;
            top = top.saturating_add(step_y);
        }
        positions.push(Position::new(top, left));
        left = left.saturating_add(step_x);
    }
    positions
}

/// Source of the scattered layout and of every other random choice on the board.
#[derive(Clone, Debug)]
pub struct RandomPlacer {
    rng: SmallRng,
}

impl RandomPlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Picks a uniformly random position for a button inside `viewport`, never overlapping the band of
    /// `top_exclusion` pixels at the top. The result is relative to the board, i.e. below that band.
    pub fn random_position(
        &mut self,
        size: ButtonSize,
        viewport: Viewport,
        top_exclusion: Px,
    ) -> Position {
        let max_left = viewport.width.saturating_sub(size.width);
        let max_top = viewport
            .height
            .saturating_sub(size.height)
            .max(top_exclusion);

        let left = self.rng.random_range(0..=max_left);
        let top = self.rng.random_range(top_exclusion..=max_top);
        Position::new(top - top_exclusion, left)
    }

    pub fn pick_color(&mut self, palette: &[Color]) -> Option<Color> {
        palette.choose(&mut self.rng).copied()
    }
}
