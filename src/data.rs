use std::fmt::{self, Debug, Display, Formatter};

/// Position of a cell on the board, row first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    /// Converts a row-major linear index into a position.
    pub fn from_index(index: usize, size: usize) -> Pos {
        Pos::new((index / size) as u8, (index % size) as u8)
    }

    pub fn index(self, size: usize) -> usize {
        usize::from(self.r) * size + usize::from(self.c)
    }

    /// Manhattan distance
    pub fn dist(self, other: Pos) -> u32 {
        let dr = (i32::from(self.r) - i32::from(other.r)).abs();
        let dc = (i32::from(self.c) - i32::from(other.c)).abs();
        (dr + dc) as u32
    }

    /// The neighbor in direction `dir` if it's still on a `size`x`size` board.
    pub fn neighbor(self, dir: Dir, size: usize) -> Option<Pos> {
        let last = (size - 1) as u8;
        match dir {
            Dir::Left if self.c > 0 => Some(Pos::new(self.r, self.c - 1)),
            Dir::Right if self.c < last => Some(Pos::new(self.r, self.c + 1)),
            Dir::Up if self.r > 0 => Some(Pos::new(self.r - 1, self.c)),
            Dir::Down if self.r < last => Some(Pos::new(self.r + 1, self.c)),
            _ => None,
        }
    }

    /// Direction of an adjacent position, None if the two are not neighbors.
    pub fn dir_to(self, other: Pos) -> Option<Dir> {
        DIRECTIONS
            .iter()
            .cloned()
            .find(|&dir| self.neighbor(dir, usize::from(u8::max_value())) == Some(other))
    }
}

/// Direction the blank moves in.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Left,
    Right,
    Up,
    Down,
}

/// Order in which successors are generated.
/// Only affects tie-breaking in the open list, not the cost of the solution.
pub const DIRECTIONS: [Dir; 4] = [Dir::Left, Dir::Right, Dir::Up, Dir::Down];

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Left => write!(f, "l"),
            Dir::Right => write!(f, "r"),
            Dir::Up => write!(f, "u"),
            Dir::Down => write!(f, "d"),
        }
    }
}

impl Debug for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
