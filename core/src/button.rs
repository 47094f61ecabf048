use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// Button was not clickable, or no round is being played.
    Ignored,
    /// Correct button, more remain.
    Correct,
    /// Correct button and it was the last one.
    Completed,
    /// Wrong button, the round is over.
    WrongOrder,
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }

    pub const fn ends_round(self) -> bool {
        matches!(self, Self::Completed | Self::WrongOrder)
    }
}

/// Receiver of the "clicked" notification emitted by a [`ButtonEntity`].
pub trait ClickSink {
    fn button_clicked(&mut self, button: &ButtonEntity) -> ClickOutcome;
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ButtonEntity {
    id: ButtonId,
    color: Color,
    clickable: bool,
    number_visible: bool,
    position: Position,
}

impl ButtonEntity {
    pub fn new(id: ButtonId, color: Color) -> Self {
        Self {
            id,
            color,
            clickable: false,
            number_visible: false,
            position: Position::default(),
        }
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_clickable(&self) -> bool {
        self.clickable
    }

    pub fn is_number_visible(&self) -> bool {
        self.number_visible
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_clickable(&mut self, clickable: bool) {
        self.clickable = clickable;
    }

    pub fn set_number_visible(&mut self, visible: bool) {
        self.number_visible = visible;
    }

    pub fn move_to(&mut self, top: Px, left: Px) {
        self.position = Position::new(top, left);
    }

    /// Forwards a click to `sink`, unless the button is currently not clickable.
    pub fn on_click<S: ClickSink + ?Sized>(&self, sink: &mut S) -> ClickOutcome {
        if !self.clickable {
            log::trace!("button {} not clickable", self.id);
            return ClickOutcome::Ignored;
        }
        sink.button_clicked(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Recorder(Vec<ButtonId>);

    impl ClickSink for Recorder {
        fn button_clicked(&mut self, button: &ButtonEntity) -> ClickOutcome {
            self.0.push(button.id());
            ClickOutcome::Correct
        }
    }

    #[test]
    fn new_button_starts_locked_and_hidden() {
        let button = ButtonEntity::new(3, DEFAULT_PALETTE[0]);
        assert!(!button.is_clickable());
        assert!(!button.is_number_visible());
        assert_eq!(button.position(), Position::new(0, 0));
    }

    #[test]
    fn click_is_forwarded_only_when_clickable() {
        let mut sink = Recorder::default();
        let mut button = ButtonEntity::new(2, DEFAULT_PALETTE[1]);

        assert_eq!(button.on_click(&mut sink), ClickOutcome::Ignored);
        assert!(sink.0.is_empty());

        button.set_clickable(true);
        assert_eq!(button.on_click(&mut sink), ClickOutcome::Correct);
        assert_eq!(sink.0, [2]);
    }

    #[test]
    fn move_to_sets_position() {
        let mut button = ButtonEntity::new(1, DEFAULT_PALETTE[2]);
        button.move_to(40, 25);
        assert_eq!(button.position(), Position { top: 40, left: 25 });
    }
}
