use crate::games::SessionRng;
use crate::log_debug;

use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::random::random_move;
use super::search::best_move_pruned;
use super::types::{Difficulty, Mark, MoveError};

/// Snapshot handed to the engine. The engine owns it for the whole
/// search, so the caller's board is never touched.
#[derive(Debug, Clone, Copy)]
pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            current_mark: state.current_mark(),
        }
    }
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput,
    rng: &mut SessionRng,
) -> Result<usize, MoveError> {
    let chosen = match difficulty {
        Difficulty::Easy => random_move(&input.board, rng),
        Difficulty::Medium | Difficulty::Hard => calculate_minimax_move(&input, difficulty)
            .or_else(|| {
                log_debug!("Search found no move for {}, using random", input.current_mark);
                random_move(&input.board, rng)
            }),
    };

    let index = chosen.ok_or(MoveError::NoMovesAvailable)?;
    log_debug!(
        "{} bot playing {} picked cell {} on {}",
        difficulty,
        input.current_mark,
        index,
        input.board
    );
    Ok(index)
}

pub fn calculate_minimax_move(input: &BotInput, difficulty: Difficulty) -> Option<usize> {
    let mut board = input.board;
    best_move_pruned(&mut board, input.current_mark, difficulty.depth_limit())
}
