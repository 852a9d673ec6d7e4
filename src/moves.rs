use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;

/// Directions the blank moved in, from the start to the goal.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Dir>);

impl Moves {
    pub(crate) fn new(moves: Vec<Dir>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Dir> {
        self.0.iter()
    }
}

impl IntoIterator for Moves {
    type Item = Dir;
    type IntoIter = ::std::vec::IntoIter<Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Dir;
    type IntoIter = ::std::slice::Iter<'a, Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_moves() {
        let moves = Moves::new(vec![Dir::Up, Dir::Right, Dir::Down, Dir::Left]);
        assert_eq!(moves.to_string(), "urdl");
        assert_eq!(format!("{:?}", moves), "urdl");
        assert_eq!(Moves::default().to_string(), "");
    }

    #[test]
    fn iterating() {
        let v = vec![Dir::Left, Dir::Left, Dir::Down];
        let moves = Moves::new(v.clone());
        assert_eq!(moves.move_cnt(), 3);

        let mut v2 = Vec::new();
        for &m in &moves {
            v2.push(m);
        }
        for &m in moves.iter() {
            v2.push(m);
        }
        for m in moves {
            v2.push(m);
        }

        assert_eq!(v2.len(), 9);
        for chunk in v2.chunks(3) {
            assert_eq!(chunk, &v[..]);
        }
    }
}
