use crate::config::Validate;
use crate::games::SessionRng;
use crate::log;

use super::bot_controller::{BotInput, calculate_move};
use super::game_state::TicTacToeGameState;
use super::score::ScoreTally;
use super::settings::TicTacToeSessionSettings;
use super::types::{FirstPlayerMode, GameMode, GameStatus, Mark, MoveError};

/// One game table: the current board, the running tally and the settings it
/// was opened with. Restarting keeps the tally.
#[derive(Debug)]
pub struct TicTacToeSession {
    settings: TicTacToeSessionSettings,
    state: TicTacToeGameState,
    scores: ScoreTally,
    rng: SessionRng,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings, seed: u64) -> Result<Self, String> {
        settings.validate()?;

        let mut rng = SessionRng::new(seed);
        let state = Self::new_game_state(&settings, &mut rng);

        Ok(Self {
            settings,
            state,
            scores: ScoreTally::default(),
            rng,
        })
    }

    fn new_game_state(
        settings: &TicTacToeSessionSettings,
        rng: &mut SessionRng,
    ) -> TicTacToeGameState {
        let first = settings.first_mark;
        let computer_mark = match settings.mode {
            GameMode::Pvp => None,
            GameMode::Pve => {
                let computer_first = match settings.first_player {
                    FirstPlayerMode::Human => false,
                    FirstPlayerMode::Computer => true,
                    FirstPlayerMode::Random => rng.random_bool(),
                };
                if computer_first { Some(first) } else { first.opponent() }
            }
        };

        TicTacToeGameState::new(first, computer_mark)
    }

    pub fn restart(&mut self) {
        self.state = Self::new_game_state(&self.settings, &mut self.rng);
        match self.state.computer_mark() {
            Some(mark) => log!(
                "New {} game, computer plays {}, {} moves first",
                self.settings.difficulty,
                mark,
                self.settings.first_mark
            ),
            None => log!("New two-player game, {} moves first", self.settings.first_mark),
        }
    }

    pub fn settings(&self) -> &TicTacToeSessionSettings {
        &self.settings
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn scores(&self) -> &ScoreTally {
        &self.scores
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn is_computer_turn(&self) -> bool {
        self.state.is_computer_turn()
    }

    pub fn human_mark(&self) -> Option<Mark> {
        self.state.computer_mark().and_then(|mark| mark.opponent())
    }

    pub fn bot_input(&self) -> BotInput {
        BotInput::from_game_state(&self.state)
    }

    /// Child generator for a search that runs off the session, e.g. on a
    /// blocking worker. Advances the session's own stream.
    pub fn next_bot_rng(&mut self) -> SessionRng {
        SessionRng::new(self.rng.random_range(0..u64::MAX))
    }

    pub fn play_human_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if self.state.is_computer_turn() {
            return Err(MoveError::NotYourTurn);
        }
        self.apply_move(index)
    }

    pub fn apply_computer_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if !self.state.is_computer_turn() {
            return Err(MoveError::NotYourTurn);
        }
        self.apply_move(index)
    }

    /// Picks and applies the computer's move on the calling thread.
    pub fn play_computer_turn(&mut self) -> Result<usize, MoveError> {
        if !self.state.is_computer_turn() {
            return Err(MoveError::NotYourTurn);
        }
        let index = calculate_move(self.settings.difficulty, self.bot_input(), &mut self.rng)?;
        self.apply_move(index)?;
        Ok(index)
    }

    fn apply_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let mark = self.state.current_mark();
        let status = self.state.place_mark(index)?;
        if status.is_over() {
            self.scores.record(status);
            log!(
                "Game over after {} at cell {}: {:?} (X {} / O {} / draws {})",
                mark,
                index,
                status,
                self.scores.x_wins,
                self.scores.o_wins,
                self.scores.draws
            );
        }
        Ok(status)
    }
}
