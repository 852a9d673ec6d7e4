use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::board::{Board, BoardErr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    Token(usize, String),
    NotSquare(usize),
    Board(BoardErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Token(i, ref token) => write!(f, "Invalid tile at position {}: {}", i, token),
            ParserErr::NotSquare(count) => write!(f, "{} tiles don't form a square board", count),
            ParserErr::Board(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<BoardErr> for ParserErr {
    fn from(err: BoardErr) -> Self {
        ParserErr::Board(err)
    }
}

impl FromStr for Board {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses a board, guessing its size from the number of tiles.
pub fn parse(text: &str) -> Result<Board, ParserErr> {
    let tiles = parse_tiles(text)?;
    let size = (1..)
        .take_while(|s| s * s <= tiles.len())
        .last()
        .unwrap_or(0);
    if size == 0 || size * size != tiles.len() {
        return Err(ParserErr::NotSquare(tiles.len()));
    }
    Ok(Board::new(size, tiles)?)
}

/// Parses a `size`x`size` board.
///
/// The input is just the tiles in row-major order separated by any whitespace,
/// `0` being the blank.
pub fn parse_sized(text: &str, size: usize) -> Result<Board, ParserErr> {
    let tiles = parse_tiles(text)?;
    Ok(Board::new(size, tiles)?)
}

fn parse_tiles(text: &str) -> Result<Vec<u8>, ParserErr> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<u8>()
                .map_err(|_| ParserErr::Token(i, token.to_string()))
        })
        .collect()
}
