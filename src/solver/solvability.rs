use crate::board::{Board, BLANK};

/// Whether `goal` can be reached from `board` by sliding tiles.
///
/// Half of all layouts are unreachable from any given one,
/// the search must never be started for those - it would just exhaust the whole space.
pub fn solvable(board: &Board, goal: &Board) -> bool {
    board.size() == goal.size() && permutation_parity(board) == permutation_parity(goal)
}

/// Parity that no legal move changes.
///
/// Horizontal moves don't change the order of tiles at all.
/// A vertical move jumps a tile over `size - 1` others which on odd boards keeps the parity
/// of inversions. On even boards it flips it but the blank also changes row,
/// so the row is added to compensate.
pub fn permutation_parity(board: &Board) -> usize {
    let size = board.size();
    let blank_row = if size % 2 == 0 {
        usize::from(board.blank_pos().r)
    } else {
        0
    };
    (inversions(board) + size + blank_row) % 2
}

/// Number of pairs of (non-blank) tiles which are in the wrong order.
pub fn inversions(board: &Board) -> usize {
    let tiles: Vec<u8> = board.tiles().iter().cloned().filter(|&t| t != BLANK).collect();
    let mut sum = 0;
    for (i, &first) in tiles.iter().enumerate() {
        sum += tiles[i + 1..].iter().filter(|&&second| first > second).count();
    }
    sum
}
