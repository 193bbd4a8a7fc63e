use crate::games::SessionRng;

use super::board::{Board, get_available_moves};

pub fn random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(board);
    rng.choose(&available_moves).copied()
}
