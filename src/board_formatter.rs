use std::fmt::{self, Debug, Display, Formatter};

use crate::board::{Board, BLANK};
use crate::state::BoardState;

pub struct BoardFormatter<'a> {
    board: &'a Board,
    state: Option<&'a BoardState>,
}

impl<'a> BoardFormatter<'a> {
    pub(crate) fn new(board: &'a Board, state: Option<&'a BoardState>) -> Self {
        Self { board, state }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // wide enough for the largest tile so bigger boards stay aligned
        let width = (self.board.cell_count() - 1).to_string().len();

        self.write_separator(width, f)?;
        for row in self.board.tiles().chunks(self.board.size()) {
            write!(f, "|")?;
            for &tile in row {
                if tile == BLANK {
                    write!(f, " {:>w$} |", "", w = width)?;
                } else {
                    write!(f, " {:>w$} |", tile, w = width)?;
                }
            }
            writeln!(f)?;
            self.write_separator(width, f)?;
        }

        if let Some(state) = self.state {
            writeln!(f, "PathCost = {}", state.path_cost)?;
            writeln!(f, "Heuristic = {}", state.heuristic)?;
        }
        Ok(())
    }

    fn write_separator(&self, width: usize, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "+")?;
        for _ in 0..self.board.size() {
            write!(f, "{}+", "-".repeat(width + 2))?;
        }
        writeln!(f)
    }
}

impl Display for BoardFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl Debug for BoardFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
