use crate::board::{Board, BLANK};
use crate::data::Pos;

/// Sum of Manhattan distances of all tiles except the blank to their goal cells.
///
/// Never overestimates and changes by at most one per move (only one tile moves),
/// which is what keeps A* optimal.
pub fn manhattan(board: &Board, goal: &Board) -> u32 {
    Manhattan::new(goal).estimate(board)
}

/// Manhattan distance with the goal cells looked up once instead of for every state.
#[derive(Debug, Clone)]
pub(crate) struct Manhattan {
    goal_positions: Vec<Pos>,
}

impl Manhattan {
    pub(crate) fn new(goal: &Board) -> Self {
        Manhattan {
            goal_positions: goal.positions(),
        }
    }

    pub(crate) fn estimate(&self, board: &Board) -> u32 {
        debug_assert_eq!(board.cell_count(), self.goal_positions.len());

        let size = board.size();
        board
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(i, &tile)| Pos::from_index(i, size).dist(self.goal_positions[usize::from(tile)]))
            .sum()
    }
}
