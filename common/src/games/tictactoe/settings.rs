use serde::{Deserialize, Serialize};

use crate::config::Validate;

use super::types::{Difficulty, FirstPlayerMode, GameMode, Mark};

pub const MAX_COMPUTER_DELAY_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub first_mark: Mark,
    pub first_player: FirstPlayerMode,
    /// Pause before the computer's move is shown.
    pub computer_delay_ms: u64,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::Pve,
            difficulty: Difficulty::Hard,
            first_mark: Mark::X,
            first_player: FirstPlayerMode::Human,
            computer_delay_ms: 120,
        }
    }
}

impl Validate for TicTacToeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        if self.first_mark == Mark::Empty {
            return Err("First mark must be X or O".to_string());
        }
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(format!(
                "Computer delay ({} ms) cannot exceed {} ms",
                self.computer_delay_ms, MAX_COMPUTER_DELAY_MS
            ));
        }
        Ok(())
    }
}
