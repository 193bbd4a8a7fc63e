use super::board::Board;
use super::types::{LINES, Line, Mark};

/// Static score of a non-terminal board from `player`'s point of view.
///
/// Every line still open to exactly one side contributes `2^k` for that
/// side, where `k` is how many of its cells that side holds. Lines holding
/// both marks can never be completed and count for nothing.
pub fn evaluate_board(board: &Board, player: Mark, opponent: Mark) -> i32 {
    LINES
        .iter()
        .map(|line| line_score(board, line, player, opponent))
        .sum()
}

fn line_score(board: &Board, line: &Line, player: Mark, opponent: Mark) -> i32 {
    let cells = board.cells();
    let mut player_count = 0u32;
    let mut opponent_count = 0u32;

    for &index in line {
        match cells[index] {
            Mark::Empty => {}
            m if m == player => player_count += 1,
            m if m == opponent => opponent_count += 1,
            _ => {}
        }
    }

    match (player_count, opponent_count) {
        (0, 0) => 0,
        (k, 0) => 1 << k,
        (0, k) => -(1 << k),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(layout: &str, player: Mark) -> i32 {
        let board = Board::parse(layout).unwrap();
        evaluate_board(&board, player, player.opponent().unwrap())
    }

    #[test]
    fn empty_board_is_neutral() {
        assert_eq!(eval("_________", Mark::X), 0);
    }

    #[test]
    fn centre_mark_touches_four_lines() {
        // Row, column and both diagonals through the centre, each worth 2^1.
        assert_eq!(eval("____X____", Mark::X), 8);
        assert_eq!(eval("____X____", Mark::O), -8);
    }

    #[test]
    fn corner_mark_touches_three_lines() {
        assert_eq!(eval("X________", Mark::X), 6);
    }

    #[test]
    fn two_in_a_line_weighs_four() {
        // Row 0 holds two X (4); columns 0 and 1 one each (2 + 2);
        // diagonal 0-4-8 one (2).
        assert_eq!(eval("XX_______", Mark::X), 10);
    }

    #[test]
    fn dead_lines_contribute_nothing() {
        // Row 0 is dead. X keeps column 0 and diagonal 0-4-8, O keeps
        // column 1.
        assert_eq!(eval("XO_______", Mark::X), 2 + 2 - 2);
    }

    #[test]
    fn score_is_antisymmetric_between_sides() {
        let layout = "XX_OO__X_";
        assert_eq!(eval(layout, Mark::X), -eval(layout, Mark::O));
    }
}
