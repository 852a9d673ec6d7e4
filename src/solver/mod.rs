mod a_star;
mod arena;
pub mod expand;
pub mod heuristic;
mod path;
mod queue;
pub mod reachability;
pub mod solvability;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::config::BoardConfig;
use crate::Solve;

use self::solvability::solvable;

pub use self::a_star::Stats;
pub use self::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    SizeMismatch { board: usize, config: usize },
    /// The open list ran out even though the solvability check passed.
    Exhausted,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::SizeMismatch { board, config } => write!(
                f,
                "Board is {}x{} but the puzzle is configured as {}x{}",
                board, board, config, config
            ),
            SolverErr::Exhausted => write!(f, "Search exhausted all states without reaching the goal"),
        }
    }
}

impl Error for SolverErr {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    Solved(Path),
    /// The goal can't be reached, no search was done.
    Unsolvable,
}

pub struct SolverOk {
    pub solution: Solution,
    pub stats: Stats,
}

impl SolverOk {
    fn new(solution: Solution, stats: Stats) -> Self {
        Self { solution, stats }
    }

    pub fn path(&self) -> Option<&Path> {
        match self.solution {
            Solution::Solved(ref path) => Some(path),
            Solution::Unsolvable => None,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.solution {
            Solution::Unsolvable => writeln!(f, "Unsolvable")?,
            Solution::Solved(ref path) => writeln!(f, "Moves: {}", path.moves())?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Board {
    fn solve(&self, config: &BoardConfig, print_status: bool) -> Result<SolverOk, SolverErr> {
        solve(self, config, print_status)
    }
}

/// Checks the board can reach the goal and if so finds the shortest way there.
pub fn solve(board: &Board, config: &BoardConfig, print_status: bool) -> Result<SolverOk, SolverErr> {
    if board.size() != config.board_size() {
        return Err(SolverErr::SizeMismatch {
            board: board.size(),
            config: config.board_size(),
        });
    }

    if !solvable(board, config.goal_layout()) {
        info!("Unsolvable, skipping search");
        return Ok(SolverOk::new(Solution::Unsolvable, Stats::new()));
    }

    debug!("Solvable, searching...");
    match a_star::search(board, config, print_status) {
        (Some(path), stats) => {
            info!(
                "Found solution with cost {} after visiting {} states",
                path.goal().path_cost,
                stats.total_visited()
            );
            Ok(SolverOk::new(Solution::Solved(path), stats))
        }
        (None, stats) => {
            error!("Solvable board but no solution found:\n{:?}", stats);
            Err(SolverErr::Exhausted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solving() {
        let config = BoardConfig::default();
        let board = Board::new(3, vec![4, 1, 3, 0, 2, 5, 7, 8, 6]).unwrap();
        let solver_ok = board.solve(&config, false).unwrap();
        let path = solver_ok.path().unwrap();
        assert_eq!(path.goal().path_cost, 5);
        assert_eq!(path.moves().to_string(), "urdrd");
        assert_eq!(solver_ok.stats.total_visited(), 6);
        assert!(format!("{:?}", solver_ok).starts_with("Moves: urdrd\n"));
    }

    #[test]
    fn unsolvable_skips_search() {
        let config = BoardConfig::default();
        let board = Board::new(3, vec![1, 2, 3, 4, 5, 6, 8, 7, 0]).unwrap();
        let solver_ok = solve(&board, &config, false).unwrap();
        assert_eq!(solver_ok.solution, Solution::Unsolvable);
        assert!(solver_ok.path().is_none());
        assert_eq!(solver_ok.stats.total_created(), 0);
        assert_eq!(solver_ok.stats.total_visited(), 0);
    }

    #[test]
    fn start_is_goal() {
        let config = BoardConfig::default();
        let solver_ok = solve(config.goal_layout(), &config, false).unwrap();
        let path = solver_ok.path().unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.goal().path_cost, 0);
        assert_eq!(path.goal().heuristic, 0);
        assert_eq!(solver_ok.stats.total_visited(), 1);
    }

    #[test]
    fn wrong_size() {
        let config = BoardConfig::default();
        let board = Board::solved(4).unwrap();
        assert_eq!(
            solve(&board, &config, false).unwrap_err(),
            SolverErr::SizeMismatch {
                board: 4,
                config: 3
            }
        );
    }

    #[test]
    fn other_sizes() {
        let config = BoardConfig::new(4).unwrap();
        let board = Board::new(4, vec![1, 2, 3, 4, 5, 6, 0, 8, 9, 10, 7, 11, 13, 14, 15, 12])
            .unwrap();
        let path = solve(&board, &config, false).unwrap().solution;
        match path {
            Solution::Solved(path) => assert_eq!(path.moves().to_string(), "drd"),
            Solution::Unsolvable => panic!("should be solvable"),
        }
    }
}
