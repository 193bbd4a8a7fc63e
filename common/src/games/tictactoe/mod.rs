mod board;
mod bot_controller;
mod evaluator;
mod game_state;
mod random;
mod score;
mod search;
mod session;
mod settings;
mod types;

pub use board::{
    Board, game_status, get_available_moves, is_full, is_valid_move, winning_line,
};
pub use bot_controller::{BotInput, calculate_minimax_move, calculate_move};
pub use evaluator::evaluate_board;
pub use game_state::TicTacToeGameState;
pub use random::random_move;
pub use score::ScoreTally;
pub use search::{WIN_SCORE, alpha_beta, best_move, best_move_pruned, minimax};
pub use session::TicTacToeSession;
pub use settings::{MAX_COMPUTER_DELAY_MS, TicTacToeSessionSettings};
pub use types::{
    BOARD_SIZE, CELL_COUNT, Difficulty, FirstPlayerMode, GameMode, GameStatus, LINES, Line, Mark,
    MoveError, WinningLine,
};
