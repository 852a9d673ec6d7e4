// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

#[macro_use]
extern crate log;

pub mod board;
pub mod board_formatter;
pub mod config;
pub mod data;
pub mod fs;
pub mod moves;
pub mod parser;
pub mod solution_formatter;
pub mod solver;
pub mod state;

use std::error::Error;

use crate::board::Board;
use crate::config::BoardConfig;
use crate::solver::{SolverErr, SolverOk};

pub trait LoadBoard {
    fn load_board(&self, size: usize) -> Result<Board, Box<dyn Error>>;
}

pub trait Solve {
    fn solve(&self, config: &BoardConfig, print_status: bool) -> Result<SolverOk, SolverErr>;
}
