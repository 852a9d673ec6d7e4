use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::board::{Board, BoardErr};

/// Dimension used when nothing else is specified (the 8-puzzle)
pub const DEFAULT_SIZE: usize = 3;

/// Cost of sliding one tile
pub const PATH_COST: u32 = 1;

/// Highest accepted move cost, path costs must fit in a `u32` at any depth
pub const MAX_MOVE_COST: u32 = 1_000;

/// Longest path accepted by the interactive prompt
pub const MAX_FILE_LEN: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErr {
    Goal(BoardErr),
    GoalSize { expected: usize, found: usize },
    ZeroMoveCost,
    MoveCostTooHigh(u32),
}

impl Display for ConfigErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigErr::Goal(err) => write!(f, "Invalid goal layout: {}", err),
            ConfigErr::GoalSize { expected, found } => write!(
                f,
                "Goal layout is {}x{} but the board is {}x{}",
                found, found, expected, expected
            ),
            ConfigErr::ZeroMoveCost => write!(f, "Move cost must be positive"),
            ConfigErr::MoveCostTooHigh(cost) => {
                write!(f, "Move cost {} is higher than {}", cost, MAX_MOVE_COST)
            }
        }
    }
}

impl Error for ConfigErr {}

impl From<BoardErr> for ConfigErr {
    fn from(err: BoardErr) -> Self {
        ConfigErr::Goal(err)
    }
}

/// Everything about the puzzle that is not part of a particular board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    board_size: usize,
    move_cost: u32,
    goal_layout: Board,
}

impl BoardConfig {
    /// `board_size`x`board_size` with the canonical goal and unit move cost.
    pub fn new(board_size: usize) -> Result<Self, ConfigErr> {
        let goal_layout = Board::solved(board_size)?;
        Ok(BoardConfig {
            board_size,
            move_cost: PATH_COST,
            goal_layout,
        })
    }

    pub fn with_goal(mut self, goal_layout: Board) -> Result<Self, ConfigErr> {
        if goal_layout.size() != self.board_size {
            return Err(ConfigErr::GoalSize {
                expected: self.board_size,
                found: goal_layout.size(),
            });
        }
        self.goal_layout = goal_layout;
        Ok(self)
    }

    pub fn with_move_cost(mut self, move_cost: u32) -> Result<Self, ConfigErr> {
        if move_cost == 0 {
            return Err(ConfigErr::ZeroMoveCost);
        }
        if move_cost > MAX_MOVE_COST {
            return Err(ConfigErr::MoveCostTooHigh(move_cost));
        }
        self.move_cost = move_cost;
        Ok(self)
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn cell_count(&self) -> usize {
        self.board_size * self.board_size
    }

    pub fn move_cost(&self) -> u32 {
        self.move_cost
    }

    pub fn goal_layout(&self) -> &Board {
        &self.goal_layout
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            board_size: DEFAULT_SIZE,
            move_cost: PATH_COST,
            goal_layout: Board::solved(DEFAULT_SIZE)
                .unwrap_or_else(|err| unreachable!("default size rejected: {}", err)),
        }
    }
}
