use std::fmt::{self, Debug, Formatter};

use crate::board::Board;
use crate::board_formatter::BoardFormatter;

/// A board together with what the search knows about it.
///
/// Immutable after creation - the heuristic is computed once by whoever creates the state
/// and the total cost is always derived from its two parts.
/// The link to the predecessor is kept by the search storage, not here.
#[derive(Clone, PartialEq, Eq)]
pub struct BoardState {
    pub board: Board,
    pub path_cost: u32,
    pub heuristic: u32,
}

impl BoardState {
    pub fn new(board: Board, path_cost: u32, heuristic: u32) -> Self {
        BoardState {
            board,
            path_cost,
            heuristic,
        }
    }

    pub fn total_cost(&self) -> u32 {
        self.path_cost.saturating_add(self.heuristic)
    }

    pub fn format(&self) -> BoardFormatter<'_> {
        BoardFormatter::new(&self.board, Some(self))
    }
}

impl Debug for BoardState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} g={} h={}",
            self.board, self.path_cost, self.heuristic
        )
    }
}
