#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use button::*;
pub use controller::*;
pub use error::*;
pub use placer::*;
pub use sequence::*;
pub use types::*;

pub mod messages;

mod board;
mod button;
mod controller;
mod error;
mod placer;
mod sequence;
mod types;

pub const DEFAULT_PALETTE: [Color; 7] = [
    Color::rgb(0x66, 0xC5, 0xCC),
    Color::rgb(0xF6, 0xCF, 0x71),
    Color::rgb(0xF8, 0x9C, 0x74),
    Color::rgb(0xDC, 0xB0, 0xF2),
    Color::rgb(0xB3, 0xB3, 0xB3),
    Color::rgb(0x9E, 0xB9, 0xF3),
    Color::rgb(0xFE, 0x88, 0xB1),
];

/// Immutable configuration handed to the controller at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub min_buttons: u32,
    pub max_buttons: u32,
    /// Delay between two scrambles, and after the last one.
    pub scramble_interval_ms: u32,
    /// Pause before scrambling starts, multiplied by the button count.
    pub pause_per_button_ms: u32,
    pub palette: Vec<Color>,
    pub button_width_em: f32,
    pub button_height_em: f32,
    pub grid_margin: Px,
    pub grid_spacing: Px,
}

impl GameSettings {
    pub const MIN_BUTTONS: u32 = 3;
    pub const MAX_BUTTONS: u32 = 7;
    pub const SCRAMBLE_INTERVAL_MS: u32 = 2000;
    pub const PAUSE_PER_BUTTON_MS: u32 = 1000;

    /// Fixes up values that would make a round impossible to play.
    pub fn sanitized(mut self) -> Self {
        if self.min_buttons == 0 {
            log::warn!("Minimum button count must be positive, using 1");
            self.min_buttons = 1;
        }
        if self.max_buttons < self.min_buttons {
            log::warn!(
                "Maximum button count {} below minimum {}, clamping",
                self.max_buttons,
                self.min_buttons
            );
            self.max_buttons = self.min_buttons;
        }
        if self.palette.is_empty() {
            log::warn!("Empty palette, fallback to default colors");
            self.palette = DEFAULT_PALETTE.to_vec();
        }
        self
    }

    pub const fn is_valid_count(&self, count: u32) -> bool {
        self.min_buttons <= count && count <= self.max_buttons
    }

    pub const fn pause_ms(&self, count: u32) -> u32 {
        count.saturating_mul(self.pause_per_button_ms)
    }

    pub fn button_size(&self, font_px: f32) -> ButtonSize {
        button_size(self.button_width_em, self.button_height_em, font_px)
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            min_buttons: Self::MIN_BUTTONS,
            max_buttons: Self::MAX_BUTTONS,
            scramble_interval_ms: Self::SCRAMBLE_INTERVAL_MS,
            pause_per_button_ms: Self::PAUSE_PER_BUTTON_MS,
            palette: DEFAULT_PALETTE.to_vec(),
            button_width_em: 10.0,
            button_height_em: 5.0,
            grid_margin: 10,
            grid_spacing: 10,
        }
    }
}
