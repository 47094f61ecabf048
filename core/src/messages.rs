use serde::{Deserialize, Serialize};

pub const GAME_TITLE: &str = "Memory Game";
pub const GAME_HEADER: &str = "Keep your brain sharp with the Memory Game!";
pub const BUTTON_COUNT_LABEL: &str = "How many buttons to create?";
pub const START_BUTTON: &str = "Go";
pub const GIVE_UP_BUTTON: &str = "Give up";

/// Selects one of the fixed user-facing strings shown in the message area.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKey {
    GameComplete,
    GameFailed,
    InvalidInput,
}

impl MessageKey {
    pub const ALL: [Self; 3] = [Self::GameComplete, Self::GameFailed, Self::InvalidInput];

    pub const fn key(self) -> &'static str {
        use MessageKey::*;
        match self {
            GameComplete => "GAME_COMPLETE",
            GameFailed => "GAME_FAILED",
            InvalidInput => "INVALID_INPUT",
        }
    }

    pub const fn text(self) -> &'static str {
        use MessageKey::*;
        match self {
            GameComplete => "Excellent memory",
            GameFailed => "Wrong order!",
            InvalidInput => "Please enter a valid number of buttons",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|message| message.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_resolve_back_to_messages() {
        for message in MessageKey::ALL {
            assert_eq!(MessageKey::from_key(message.key()), Some(message));
            assert!(!message.text().is_empty());
        }
        assert_eq!(MessageKey::from_key("GAME_TITLE"), None);
    }
}
