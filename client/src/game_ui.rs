use common::games::tictactoe::{
    BOARD_SIZE, GameStatus, Mark, ScoreTally, TicTacToeGameState, TicTacToeSession,
};

/// Empty cells show the number a player types to take them.
pub fn render_board(state: &TicTacToeGameState) -> String {
    let cells = state.board().cells();
    let highlight = state.winning_line().map(|line| line.cells);

    let rows: Vec<String> = cells
        .chunks(BOARD_SIZE)
        .enumerate()
        .map(|(row, marks)| {
            marks
                .iter()
                .enumerate()
                .map(|(col, &mark)| {
                    let index = row * BOARD_SIZE + col;
                    let winning = highlight.is_some_and(|line| line.contains(&index));
                    match mark {
                        Mark::Empty => format!(" {} ", index + 1),
                        _ if winning => format!("[{}]", mark),
                        _ => format!(" {} ", mark),
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

pub fn status_line(session: &TicTacToeSession) -> String {
    let state = session.state();
    match state.status() {
        GameStatus::InProgress => {
            let mark = state.current_mark();
            if session.is_computer_turn() {
                format!("Computer ({}) is thinking...", mark)
            } else if session.human_mark().is_some() {
                format!("Your move ({})", mark)
            } else {
                format!("{} to move", mark)
            }
        }
        GameStatus::XWon | GameStatus::OWon => {
            let cells = state
                .winning_line()
                .map(|line| {
                    line.cells
                        .iter()
                        .map(|index| (index + 1).to_string())
                        .collect::<Vec<_>>()
                        .join("-")
                })
                .unwrap_or_default();
            let winner = state.status().winner().unwrap_or(Mark::Empty);
            format!("{} wins on {}", winner, cells)
        }
        GameStatus::Draw => "Draw".to_string(),
    }
}

pub fn score_line(scores: &ScoreTally) -> String {
    format!(
        "X {} | O {} | Draw {}",
        scores.x_wins, scores.o_wins, scores.draws
    )
}

pub const HELP: &str = "Commands: 1-9 place a mark, r restart, s scores, h help, q quit";

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{Board, TicTacToeSessionSettings};

    #[test]
    fn empty_cells_show_their_numbers() {
        let state = TicTacToeGameState::new(Mark::X, None);
        let expected = " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 ";
        assert_eq!(render_board(&state), expected);
    }

    #[test]
    fn winning_cells_are_bracketed() {
        let board = Board::parse("XXXOO____").unwrap();
        let state = TicTacToeGameState::from_board(board, Mark::X, None);
        let rendered = render_board(&state);
        assert!(rendered.starts_with("[X]|[X]|[X]"));
        assert!(rendered.contains(" O | O | 6 "));
    }

    #[test]
    fn status_reports_winner_cells() {
        let mut session = TicTacToeSession::new(
            TicTacToeSessionSettings {
                mode: common::games::tictactoe::GameMode::Pvp,
                ..TicTacToeSessionSettings::default()
            },
            1,
        )
        .unwrap();
        assert_eq!(status_line(&session), "X to move");
        for index in [0, 3, 1, 4, 2] {
            session.play_human_move(index).unwrap();
        }
        assert_eq!(status_line(&session), "X wins on 1-2-3");
        assert_eq!(score_line(session.scores()), "X 1 | O 0 | Draw 0");
    }
}
