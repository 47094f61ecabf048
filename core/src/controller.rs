use serde::{Deserialize, Serialize};

use crate::messages::MessageKey;
use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Initial,
    /// Numbers are shown in the grid layout, waiting for the pause to pass.
    Displaying,
    Scrambling,
    Playing,
    Finished,
}

impl GameState {
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::Displaying | Self::Scrambling | Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Initial
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Success,
    Failure,
}

impl RoundOutcome {
    pub const fn message(self) -> MessageKey {
        match self {
            Self::Success => MessageKey::GameComplete,
            Self::Failure => MessageKey::GameFailed,
        }
    }
}

/// Timed steps of a round, delivered through [`GameController::advance`] after their delay has passed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStep {
    StartScrambling,
    Scramble,
    StartPlaying,
}

/// Identifies the round a pending step belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundToken {
    generation: u64,
}

impl RoundToken {
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

/// Everything the timed part of a round needs, handed out by [`GameController::start_round`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPlan {
    pub token: RoundToken,
    pub pause_ms: u32,
    pub scrambles: u32,
    pub interval_ms: u32,
}

#[derive(Clone, Debug)]
pub struct GameController {
    settings: GameSettings,
    board: Board,
    placer: RandomPlacer,
    state: GameState,
    number_of_buttons: u32,
    next_expected: ButtonId,
    generation: u64,
    controls_enabled: bool,
    message: Option<MessageKey>,
    outcome: Option<RoundOutcome>,
}

impl GameController {
    pub const DEFAULT_FONT_PX: f32 = 16.0;

    pub fn new(settings: GameSettings, seed: u64) -> Self {
        let settings = settings.sanitized();
        let board = Board::new(settings.button_size(Self::DEFAULT_FONT_PX));
        Self {
            settings,
            board,
            placer: RandomPlacer::new(seed),
            state: GameState::Initial,
            number_of_buttons: 0,
            next_expected: 1,
            generation: 0,
            controls_enabled: true,
            message: None,
            outcome: None,
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn number_of_buttons(&self) -> u32 {
        self.number_of_buttons
    }

    pub fn next_expected(&self) -> ButtonId {
        self.next_expected
    }

    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }

    pub fn message(&self) -> Option<MessageKey> {
        self.message
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// Updates the area the board lays buttons out in. A grid still on display is laid out again.
    pub fn resize(&mut self, viewport: Viewport, header_height: Px, font_px: f32) {
        let button_size = self.settings.button_size(font_px);
        self.board.resize(viewport, header_height, button_size);
        if self.state == GameState::Displaying {
            self.layout_grid();
        }
    }

    /// Starts a new round with `count` buttons, showing their numbers in a grid.
    ///
    /// Requests while a round is in progress are ignored. An invalid count only sets the
    /// [`MessageKey::InvalidInput`] message and leaves the board and round counters untouched.
    pub fn start_round(&mut self, count: u32) -> Result<RoundPlan> {
        if !self.controls_enabled {
            log::debug!("start request ignored, round in progress");
            return Err(GameError::RoundInProgress);
        }

        if !self.settings.is_valid_count(count) {
            log::debug!("invalid button count: {}", count);
            self.message = Some(MessageKey::InvalidInput);
            return Err(GameError::InvalidButtonCount {
                count,
                min: self.settings.min_buttons,
                max: self.settings.max_buttons,
            });
        }

        self.message = None;
        self.outcome = None;
        self.board.clear();
        self.state = GameState::Displaying;
        self.number_of_buttons = count;
        self.next_expected = 1;
        self.generation += 1;
        self.controls_enabled = false;

        self.board
            .create_round(count, &self.settings.palette, &mut self.placer);
        self.board.set_all_numbers_visible(true);
        self.board.set_all_clickable(false);
        self.layout_grid();

        log::info!("round {} started with {} buttons", self.generation, count);
        Ok(RoundPlan {
            token: self.current_token(),
            pause_ms: self.settings.pause_ms(count),
            scrambles: count,
            interval_ms: self.settings.scramble_interval_ms,
        })
    }

    /// Applies a timed step of the round identified by `token`.
    ///
    /// Steps of a replaced or finished round fail with [`GameError::StaleRound`] and change nothing.
    pub fn advance(&mut self, token: RoundToken, step: RoundStep) -> Result<()> {
        use GameState::*;
        use RoundStep::*;

        if token != self.current_token() {
            log::debug!(
                "stale step {:?} from round {}, current is {}",
                step,
                token.generation,
                self.generation
            );
            return Err(GameError::StaleRound);
        }

        match (self.state, step) {
            (Displaying, StartScrambling) => {
                self.state = Scrambling;
            }
            (Scrambling, Scramble) => {
                self.board.scramble_once(&mut self.placer);
            }
            (Scrambling, StartPlaying) => {
                self.state = Playing;
                self.board.set_all_numbers_visible(false);
                self.board.set_all_clickable(true);
            }
            (state, step) => {
                log::warn!("step {:?} not valid in state {:?}", step, state);
                return Err(GameError::OutOfSequence);
            }
        }

        log::trace!("round {} step {:?} applied", self.generation, step);
        Ok(())
    }

    /// Routes a click on button `id` through the button's own clickable check.
    pub fn click(&mut self, id: ButtonId) -> ClickOutcome {
        match self.board.button(id).copied() {
            Some(button) => button.on_click(self),
            None => {
                log::debug!("click on unknown button {}", id);
                ClickOutcome::Ignored
            }
        }
    }

    /// Ends a round that is still in progress as a failure.
    pub fn give_up(&mut self) -> bool {
        if self.state.is_in_progress() {
            log::info!("round {} abandoned", self.generation);
            self.finish(RoundOutcome::Failure);
            true
        } else {
            false
        }
    }

    fn current_token(&self) -> RoundToken {
        RoundToken {
            generation: self.generation,
        }
    }

    fn layout_grid(&mut self) {
        self.board
            .layout_grid(self.settings.grid_margin, self.settings.grid_spacing);
    }

    fn finish(&mut self, outcome: RoundOutcome) {
        self.state = GameState::Finished;
        self.outcome = Some(outcome);
        // pending steps of this round become stale
        self.generation += 1;

        self.board.set_all_clickable(false);
        self.board.set_all_numbers_visible(true);
        self.message = Some(outcome.message());
        self.controls_enabled = true;

        log::info!("round finished: {:?}", outcome);
    }
}

impl ClickSink for GameController {
    fn button_clicked(&mut self, button: &ButtonEntity) -> ClickOutcome {
        if self.state != GameState::Playing || !button.is_clickable() {
            return ClickOutcome::Ignored;
        }

        if button.id() != self.next_expected {
            log::debug!(
                "button {} clicked, expected {}",
                button.id(),
                self.next_expected
            );
            self.finish(RoundOutcome::Failure);
            return ClickOutcome::WrongOrder;
        }

        if let Some(solved) = self.board.button_mut(button.id()) {
            solved.set_number_visible(true);
            solved.set_clickable(false);
        }
        self.next_expected += 1;

        if self.next_expected > self.number_of_buttons {
            self.finish(RoundOutcome::Success);
            ClickOutcome::Completed
        } else {
            ClickOutcome::Correct
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(GameSettings::default(), 0)
    }
}
