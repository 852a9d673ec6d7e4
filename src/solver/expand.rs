use crate::board::Board;
use crate::data::DIRECTIONS;
use crate::state::BoardState;

use super::heuristic::Manhattan;

/// All states reachable from `parent` by one move of the blank.
///
/// Moves are generated in the order left, right, up, down, skipping those that would leave
/// the board, so there are always 2 to 4 of them.
pub fn successors(parent: &BoardState, goal: &Board, move_cost: u32) -> Vec<BoardState> {
    expand(parent, &Manhattan::new(goal), move_cost)
}

pub(crate) fn expand(parent: &BoardState, manhattan: &Manhattan, move_cost: u32) -> Vec<BoardState> {
    let board = &parent.board;
    let blank = board.blank_pos();

    DIRECTIONS
        .iter()
        .filter_map(|&dir| blank.neighbor(dir, board.size()))
        .map(|tile_pos| {
            let new_board = board.swapped(blank, tile_pos);
            let h = manhattan.estimate(&new_board);
            BoardState::new(new_board, parent.path_cost.saturating_add(move_cost), h)
        })
        .collect()
}
