use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::board_formatter::BoardFormatter;
use crate::data::Pos;

pub const BLANK: u8 = 0;

/// Smallest board on which the blank can move at all
pub const MIN_SIZE: usize = 2;
/// Tiles are stored as u8 so the largest tile (size * size - 1) has to fit
pub const MAX_SIZE: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardErr {
    BadSize(usize),
    CellCount { expected: usize, found: usize },
    OutOfRange(usize),
    Duplicate(u8),
}

impl Display for BoardErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            BoardErr::BadSize(size) => write!(
                f,
                "Board size {} is not supported (must be between {} and {})",
                size, MIN_SIZE, MAX_SIZE
            ),
            BoardErr::CellCount { expected, found } => {
                write!(f, "Expected {} tiles, found {}", expected, found)
            }
            BoardErr::OutOfRange(value) => write!(f, "Tile {} is out of range", value),
            BoardErr::Duplicate(value) => write!(f, "Tile {} appears more than once", value),
        }
    }
}

impl Error for BoardErr {}

/// A configuration of tiles on a square board, stored row-major.
///
/// Always a permutation of `0..size*size`, `0` being the blank.
/// Equality only looks at the tiles, never at how the board was reached.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    tiles: Vec<u8>,
}

impl Board {
    pub fn new(size: usize, tiles: Vec<u8>) -> Result<Board, BoardErr> {
        check_size(size)?;

        let cell_count = size * size;
        if tiles.len() != cell_count {
            return Err(BoardErr::CellCount {
                expected: cell_count,
                found: tiles.len(),
            });
        }

        let mut seen = vec![false; cell_count];
        for &tile in &tiles {
            let index = usize::from(tile);
            if index >= cell_count {
                return Err(BoardErr::OutOfRange(index));
            }
            if seen[index] {
                return Err(BoardErr::Duplicate(tile));
            }
            seen[index] = true;
        }

        Ok(Board {
            size: size as u8,
            tiles,
        })
    }

    /// `1..size*size` in order followed by the blank.
    pub fn solved(size: usize) -> Result<Board, BoardErr> {
        check_size(size)?;

        let cell_count = size * size;
        let mut tiles: Vec<u8> = (1..cell_count).map(|t| t as u8).collect();
        tiles.push(BLANK);
        Ok(Board {
            size: size as u8,
            tiles,
        })
    }

    pub fn size(&self) -> usize {
        usize::from(self.size)
    }

    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    pub fn blank_index(&self) -> usize {
        // the permutation invariant guarantees there is exactly one
        self.tiles
            .iter()
            .position(|&t| t == BLANK)
            .unwrap_or_else(|| unreachable!("board without a blank"))
    }

    pub fn blank_pos(&self) -> Pos {
        Pos::from_index(self.blank_index(), self.size())
    }

    /// For each tile value, where it is on this board.
    pub fn positions(&self) -> Vec<Pos> {
        let mut positions = vec![Pos::new(0, 0); self.tiles.len()];
        for (i, &tile) in self.tiles.iter().enumerate() {
            positions[usize::from(tile)] = Pos::from_index(i, self.size());
        }
        positions
    }

    /// A copy with the tiles at the two positions exchanged.
    /// A swap of two cells is still a permutation so no validation is needed.
    pub(crate) fn swapped(&self, a: Pos, b: Pos) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(a.index(self.size()), b.index(self.size()));
        Board {
            size: self.size,
            tiles,
        }
    }

    pub fn format(&self) -> BoardFormatter<'_> {
        BoardFormatter::new(self, None)
    }
}

fn check_size(size: usize) -> Result<(), BoardErr> {
    if size < MIN_SIZE || size > MAX_SIZE {
        Err(BoardErr::BadSize(size))
    } else {
        Ok(())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.tiles)
    }
}
