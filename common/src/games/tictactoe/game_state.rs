use super::board::{Board, game_status, is_valid_move, winning_line};
use super::types::{CELL_COUNT, GameStatus, Mark, MoveError, WinningLine};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    computer_mark: Option<Mark>,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    /// `computer_mark` is `None` when both sides are human.
    pub fn new(first_mark: Mark, computer_mark: Option<Mark>) -> Self {
        Self::from_board(Board::new(), first_mark, computer_mark)
    }

    pub fn from_board(board: Board, current_mark: Mark, computer_mark: Option<Mark>) -> Self {
        Self {
            board,
            current_mark,
            computer_mark,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn computer_mark(&self) -> Option<Mark> {
        self.computer_mark
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn status(&self) -> GameStatus {
        game_status(&self.board)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        winning_line(&self.board)
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.status().is_over() && self.computer_mark == Some(self.current_mark)
    }

    /// Places the current mark and passes the turn if the game goes on.
    pub fn place_mark(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if self.status().is_over() {
            return Err(MoveError::GameOver);
        }

        if index >= CELL_COUNT {
            return Err(MoveError::OutOfBounds(index));
        }

        if !is_valid_move(&self.board, index) {
            return Err(MoveError::CellOccupied(index));
        }

        self.board.set(index, self.current_mark);
        self.last_move = Some(index);

        let status = self.status();
        if status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(status)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }
}
