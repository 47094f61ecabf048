use core::fmt;
use serde::{Deserialize, Serialize};

/// Resolved pixel unit used for sizes and positions.
pub type Px = u32;

/// Identity number shown on a button, `1..=N` within a round.
pub type ButtonId = u32;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub top: Px,
    pub left: Px,
}

impl Position {
    pub const fn new(top: Px, left: Px) -> Self {
        Self { top, left }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSize {
    pub width: Px,
    pub height: Px,
}

impl ButtonSize {
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}

/// Width and height of a rectangular area, either the whole viewport or the playable part of it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: Px,
    pub height: Px,
}

impl Viewport {
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    /// The area left below a band of `height` pixels at the top.
    pub const fn below(self, height: Px) -> Self {
        Self {
            width: self.width,
            height: self.height.saturating_sub(height),
        }
    }
}

/// Opaque RGB color, displayed as `#RRGGBB`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}
