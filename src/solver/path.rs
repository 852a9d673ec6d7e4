use crate::data::Dir;
use crate::moves::Moves;
use crate::solution_formatter::SolutionFormatter;
use crate::state::BoardState;

/// States of a solution, the goal first and the start last,
/// the same order as walking the predecessors from the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    states: Vec<BoardState>,
}

impl Path {
    pub(crate) fn new(states: Vec<BoardState>) -> Self {
        debug_assert!(!states.is_empty());
        Path { states }
    }

    pub fn states(&self) -> &[BoardState] {
        &self.states
    }

    pub fn goal(&self) -> &BoardState {
        &self.states[0]
    }

    pub fn start(&self) -> &BoardState {
        &self.states[self.states.len() - 1]
    }

    /// Number of states including the start and the goal
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Blank moves from the start to the goal.
    pub fn moves(&self) -> Moves {
        let dirs = self
            .states
            .windows(2)
            .rev()
            .map(|pair| {
                let from = pair[1].board.blank_pos();
                let to = pair[0].board.blank_pos();
                from.dir_to(to)
                    .unwrap_or_else(|| unreachable!("{:?} doesn't follow {:?}", pair[0], pair[1]))
            })
            .collect::<Vec<Dir>>();
        Moves::new(dirs)
    }

    pub fn format(&self) -> SolutionFormatter<'_> {
        SolutionFormatter::new(self)
    }
}
