use super::board::{Board, is_full, winning_line};
use super::evaluator::evaluate_board;
use super::types::{CELL_COUNT, Mark};

/// Base of the terminal score. A win found `d` plies below the root scores
/// `WIN_SCORE - d`, a loss `d - WIN_SCORE`.
pub const WIN_SCORE: i32 = 10;

/// Plain minimax over every empty cell, scored from `player`'s side.
///
/// The board is mutated while probing and restored before returning.
pub fn minimax(
    board: &mut Board,
    is_maximizing: bool,
    player: Mark,
    opponent: Mark,
    depth_limit: Option<usize>,
    depth: usize,
) -> i32 {
    if let Some(score) = cutoff_score(board, player, opponent, depth_limit, depth) {
        return score;
    }

    let symbol = if is_maximizing { player } else { opponent };
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for index in 0..CELL_COUNT {
        if !board.cells()[index].is_empty() {
            continue;
        }

        board.set(index, symbol);
        let score = minimax(board, !is_maximizing, player, opponent, depth_limit, depth + 1);
        board.clear(index);

        if is_maximizing {
            if score > best {
                best = score;
            }
        } else if score < best {
            best = score;
        }
    }

    best
}

/// Same value as [`minimax`] whenever the true score lies strictly inside
/// `(alpha, beta)`. Outside the window the returned bound is on the correct
/// side of it.
pub fn alpha_beta(
    board: &mut Board,
    is_maximizing: bool,
    player: Mark,
    opponent: Mark,
    depth_limit: Option<usize>,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(score) = cutoff_score(board, player, opponent, depth_limit, depth) {
        return score;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in 0..CELL_COUNT {
            if !board.cells()[index].is_empty() {
                continue;
            }

            board.set(index, player);
            let eval = alpha_beta(
                board,
                false,
                player,
                opponent,
                depth_limit,
                depth + 1,
                alpha,
                beta,
            );
            board.clear(index);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in 0..CELL_COUNT {
            if !board.cells()[index].is_empty() {
                continue;
            }

            board.set(index, opponent);
            let eval = alpha_beta(
                board,
                true,
                player,
                opponent,
                depth_limit,
                depth + 1,
                alpha,
                beta,
            );
            board.clear(index);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

fn cutoff_score(
    board: &Board,
    player: Mark,
    opponent: Mark,
    depth_limit: Option<usize>,
    depth: usize,
) -> Option<i32> {
    if let Some(line) = winning_line(board) {
        let depth = depth as i32;
        if line.mark == player {
            return Some(WIN_SCORE - depth);
        }
        if line.mark == opponent {
            return Some(depth - WIN_SCORE);
        }
    }

    if is_full(board) {
        return Some(0);
    }

    match depth_limit {
        Some(limit) if depth >= limit => Some(evaluate_board(board, player, opponent)),
        _ => None,
    }
}

/// Best cell for `player`, scanning cells in index order. Only a strictly
/// higher score replaces the current choice, so ties go to the lowest index.
///
/// Returns `None` when the board has no empty cell or `player` is
/// [`Mark::Empty`].
pub fn best_move(board: &mut Board, player: Mark, depth_limit: Option<usize>) -> Option<usize> {
    let opponent = player.opponent()?;
    let mut best_score = i32::MIN;
    let mut best_index = None;

    for index in 0..CELL_COUNT {
        if !board.cells()[index].is_empty() {
            continue;
        }

        board.set(index, player);
        let score = minimax(board, false, player, opponent, depth_limit, 0);
        board.clear(index);

        if score > best_score {
            best_score = score;
            best_index = Some(index);
        }
    }

    best_index
}

/// [`best_move`] with alpha-beta pruning. Picks the same cell on every
/// board: a pruned sibling can only report a score that is not above the
/// current best, which the strict comparison rejects anyway.
pub fn best_move_pruned(
    board: &mut Board,
    player: Mark,
    depth_limit: Option<usize>,
) -> Option<usize> {
    let opponent = player.opponent()?;
    let mut best_score = i32::MIN;
    let mut best_index = None;

    for index in 0..CELL_COUNT {
        if !board.cells()[index].is_empty() {
            continue;
        }

        board.set(index, player);
        let score = alpha_beta(
            board,
            false,
            player,
            opponent,
            depth_limit,
            0,
            best_score,
            i32::MAX,
        );
        board.clear(index);

        if score > best_score {
            best_score = score;
            best_index = Some(index);
        }
    }

    best_index
}
