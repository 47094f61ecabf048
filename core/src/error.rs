use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Button count {count} is outside {min}..={max}")]
    InvalidButtonCount { count: u32, min: u32, max: u32 },
    #[error("A round is already in progress, start requests are ignored")]
    RoundInProgress,
    #[error("Round was replaced or ended, step discarded")]
    StaleRound,
    #[error("Step does not match the current game state")]
    OutOfSequence,
}

pub type Result<T> = core::result::Result<T, GameError>;
