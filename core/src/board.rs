use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Holds the buttons of the current round in id order, together with the area they are laid out in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    buttons: Vec<ButtonEntity>,
    viewport: Viewport,
    header_height: Px,
    button_size: ButtonSize,
}

impl Board {
    pub const DEFAULT_VIEWPORT: Viewport = Viewport::new(1024, 768);

    pub fn new(button_size: ButtonSize) -> Self {
        Self {
            buttons: Vec::new(),
            viewport: Self::DEFAULT_VIEWPORT,
            header_height: 0,
            button_size,
        }
    }

    pub fn buttons(&self) -> &[ButtonEntity] {
        &self.buttons
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn button(&self, id: ButtonId) -> Option<&ButtonEntity> {
        self.index_of(id).map(|index| &self.buttons[index])
    }

    pub fn button_mut(&mut self, id: ButtonId) -> Option<&mut ButtonEntity> {
        self.index_of(id).map(|index| &mut self.buttons[index])
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn header_height(&self) -> Px {
        self.header_height
    }

    pub fn button_size(&self) -> ButtonSize {
        self.button_size
    }

    /// Area below the header where buttons are placed.
    pub fn playable_area(&self) -> Viewport {
        self.viewport.below(self.header_height)
    }

    pub fn resize(&mut self, viewport: Viewport, header_height: Px, button_size: ButtonSize) {
        log::debug!(
            "board resize: {:?}, header {}, button {:?}",
            viewport,
            header_height,
            button_size
        );
        self.viewport = viewport;
        self.header_height = header_height;
        self.button_size = button_size;
    }

    pub fn clear(&mut self) {
        self.buttons.clear();
    }

    /// Replaces the current buttons with `count` new ones, ids `1..=count`, each colored from `palette`.
    pub fn create_round(&mut self, count: u32, palette: &[Color], placer: &mut RandomPlacer) {
        self.clear();
        self.buttons.reserve(count as usize);
        for id in 1..=count {
            let color = placer.pick_color(palette).unwrap_or_else(|| {
                log::warn!("Empty palette, fallback to default color");
                DEFAULT_PALETTE[0]
            });
            self.buttons.push(ButtonEntity::new(id, color));
        }
        log::debug!("created {} buttons", self.buttons.len());
    }

    pub fn layout_grid(&mut self, margin: Px, spacing: Px) {
        let board = self.playable_area();
        let positions = grid_positions(
            self.buttons.len(),
            self.button_size,
            board.width,
            margin,
            spacing,
        );
        for (button, pos) in self.buttons.iter_mut().zip(positions) {
            button.move_to(pos.top, pos.left);
        }
    }

    pub fn scramble_once(&mut self, placer: &mut RandomPlacer) {
        let Self {
            buttons,
            viewport,
            header_height,
            button_size,
        } = self;

        for button in buttons.iter_mut() {
            let pos = placer.random_position(*button_size, *viewport, *header_height);
            button.move_to(pos.top, pos.left);
        }
    }

    pub fn set_all_clickable(&mut self, clickable: bool) {
        for button in &mut self.buttons {
            button.set_clickable(clickable);
        }
    }

    pub fn set_all_numbers_visible(&mut self, visible: bool) {
        for button in &mut self.buttons {
            button.set_number_visible(visible);
        }
    }

    fn index_of(&self, id: ButtonId) -> Option<usize> {
        // ids are dense and in creation order
        let index = usize::try_from(id.checked_sub(1)?).ok()?;
        (index < self.buttons.len()).then_some(index)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(GameSettings::default().button_size(16.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn board_with(count: u32) -> (Board, RandomPlacer) {
        let mut placer = RandomPlacer::new(11);
        let mut board = Board::default();
        board.create_round(count, &DEFAULT_PALETTE, &mut placer);
        (board, placer)
    }

    #[test]
    fn create_round_yields_dense_unique_ids() {
        for count in 3..=7 {
            let (board, _) = board_with(count);
            let ids: Vec<_> = board.buttons().iter().map(|b| b.id()).collect();
            assert_eq!(ids, (1..=count).collect::<Vec<_>>());
            assert!(board.buttons().iter().all(|b| !b.is_clickable()));
            assert!(
                board
                    .buttons()
                    .iter()
                    .all(|b| DEFAULT_PALETTE.contains(&b.color()))
            );
        }
    }

    #[test]
    fn create_round_replaces_previous_buttons() {
        let (mut board, mut placer) = board_with(7);
        board.create_round(3, &DEFAULT_PALETTE, &mut placer);
        assert_eq!(board.len(), 3);
        assert!(board.button(4).is_none());
    }

    #[test]
    fn create_round_with_empty_palette_still_colors() {
        let mut placer = RandomPlacer::new(0);
        let mut board = Board::default();
        board.create_round(3, &[], &mut placer);
        assert!(board.buttons().iter().all(|b| b.color() == DEFAULT_PALETTE[0]));
    }

    #[test]
    fn button_lookup_by_id() {
        let (board, _) = board_with(3);
        assert_eq!(board.button(0), None);
        assert_eq!(board.button(2).map(|b| b.id()), Some(2));
        assert_eq!(board.button(3).map(|b| b.id()), Some(3));
        assert_eq!(board.button(4), None);
    }

    #[test]
    fn layout_grid_uses_board_width() {
        let (mut board, _) = board_with(4);
        board.resize(Viewport::new(400, 600), 100, ButtonSize::new(160, 80));
        board.layout_grid(10, 10);

        let positions: Vec<_> = board.buttons().iter().map(|b| b.position()).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(10, 10),
                Position::new(10, 180),
                Position::new(100, 10),
                Position::new(100, 180),
            ]
        );
    }

    #[test]
    fn scramble_once_stays_in_playable_area() {
        let (mut board, mut placer) = board_with(7);
        let size = ButtonSize::new(100, 50);
        board.resize(Viewport::new(640, 480), 80, size);
        let area = board.playable_area();

        for _ in 0..100 {
            board.scramble_once(&mut placer);
            for button in board.buttons() {
                let pos = button.position();
                assert!(pos.left + size.width <= area.width);
                assert!(pos.top + size.height <= area.height);
            }
        }
    }

    #[test]
    fn broadcasts_reach_every_button() {
        let (mut board, _) = board_with(5);

        board.set_all_numbers_visible(true);
        board.set_all_clickable(true);
        assert!(
            board
                .buttons()
                .iter()
                .all(|b| b.is_clickable() && b.is_number_visible())
        );

        board.set_all_clickable(false);
        assert!(board.buttons().iter().all(|b| !b.is_clickable()));
    }

    #[test]
    fn clear_empties_board() {
        let (mut board, _) = board_with(3);
        board.clear();
        assert!(board.is_empty());
    }
}
