use std::fmt::{self, Debug, Display, Formatter};

use crate::solver::Path;

/// Every state of the path from the goal back to the start, then the moves from the start.
pub struct SolutionFormatter<'a> {
    path: &'a Path,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(path: &'a Path) -> Self {
        Self { path }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for state in self.path.states() {
            writeln!(f, "{}", state.format())?;
        }
        let moves = self.path.moves();
        writeln!(f, "{}", moves)?;
        writeln!(f, "Moves: {}", moves.move_cnt())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
