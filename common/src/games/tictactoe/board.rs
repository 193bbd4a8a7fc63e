use std::fmt;

use super::types::{CELL_COUNT, GameStatus, LINES, Mark, WinningLine};

/// Row-major 3x3 grid. Copyable, so every caller that needs a private
/// scratch board for search gets one by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Parses a 9-character layout such as `"XX_OO____"`. `_`, `.`, `-` and
    /// spaces are empty cells; `|` and newlines are ignored.
    pub fn parse(layout: &str) -> Result<Self, String> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut count = 0;
        for ch in layout.chars().filter(|c| *c != '|' && *c != '\n') {
            if count == CELL_COUNT {
                return Err(format!("Board layout has more than {} cells", CELL_COUNT));
            }
            cells[count] = match ch {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '_' | '.' | '-' | ' ' => Mark::Empty,
                other => return Err(format!("Invalid board character '{}'", other)),
            };
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(format!(
                "Board layout has {} cells, expected {}",
                count, CELL_COUNT
            ));
        }
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Writes `mark` unconditionally. Search uses this together with
    /// [`Board::clear`] to probe and undo moves.
    pub fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(3) {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    matches!(board.get(index), Some(Mark::Empty))
}

pub fn winning_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    for line in LINES {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

pub fn game_status(board: &Board) -> GameStatus {
    if let Some(line) = winning_line(board) {
        return match line.mark {
            Mark::X => GameStatus::XWon,
            Mark::O => GameStatus::OWon,
            Mark::Empty => unreachable!(),
        };
    }

    if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(layout: &str) -> Board {
        Board::parse(layout).unwrap()
    }

    #[test]
    fn empty_board_has_every_move() {
        let board = Board::new();
        assert_eq!(get_available_moves(&board), (0..9).collect::<Vec<_>>());
        assert!(!is_full(&board));
        assert_eq!(winning_line(&board), None);
        assert_eq!(game_status(&board), GameStatus::InProgress);
    }

    #[test]
    fn parse_accepts_separators_and_rejects_garbage() {
        assert_eq!(board("XO_|...|--O"), board("XO______O"));
        assert!(Board::parse("XO").is_err());
        assert!(Board::parse("XXXXXXXXXX").is_err());
        assert!(Board::parse("XOZ______").is_err());
    }

    #[test]
    fn detects_each_line_kind() {
        let row = winning_line(&board("___OOO_X_")).unwrap();
        assert_eq!(row, WinningLine::new(Mark::O, [3, 4, 5]));

        let column = winning_line(&board("_X__X__XO")).unwrap();
        assert_eq!(column, WinningLine::new(Mark::X, [1, 4, 7]));

        let anti = winning_line(&board("O_X_X_X_O")).unwrap();
        assert_eq!(anti, WinningLine::new(Mark::X, [2, 4, 6]));
    }

    #[test]
    fn first_line_in_table_order_wins() {
        // Row 0 and column 0 both belong to X; the row comes first.
        let line = winning_line(&board("XXXXOOXOO")).unwrap();
        assert_eq!(line.cells, [0, 1, 2]);
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        assert_eq!(winning_line(&board("XXO______")), None);
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let draw = board("XOXXOOOXX");
        assert!(is_full(&draw));
        assert_eq!(winning_line(&draw), None);
        assert_eq!(game_status(&draw), GameStatus::Draw);
    }

    #[test]
    fn full_board_with_line_reports_winner() {
        let won = board("XXXOOXOXO");
        assert!(is_full(&won));
        assert_eq!(game_status(&won), GameStatus::XWon);
    }

    #[test]
    fn status_is_recomputed_after_mutation() {
        let mut b = board("OO_XX____");
        assert_eq!(game_status(&b), GameStatus::InProgress);
        b.set(2, Mark::O);
        assert_eq!(game_status(&b), GameStatus::OWon);
        b.clear(2);
        assert_eq!(game_status(&b), GameStatus::InProgress);
    }

    #[test]
    fn valid_move_checks_bounds_and_occupancy() {
        let b = board("X________");
        assert!(!is_valid_move(&b, 0));
        assert!(is_valid_move(&b, 8));
        assert!(!is_valid_move(&b, 9));
    }
}
