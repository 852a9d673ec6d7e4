use std::collections::VecDeque;

use fnv::{FnvHashMap, FnvHashSet};

use crate::board::Board;
use crate::data::DIRECTIONS;

/// Every layout reachable from `start`, found by a plain breadth-first search.
///
/// Only practical up to 3x3 (181,440 layouts), it's meant for verifying the solvability check
/// and the optimality of the A* search, not for solving.
pub fn reachable_boards(start: &Board) -> FnvHashSet<Board> {
    distances(start).into_iter().map(|(board, _)| board).collect()
}

/// Number of moves from `start` to every reachable layout.
pub fn distances(start: &Board) -> FnvHashMap<Board, u32> {
    let mut dists = FnvHashMap::default();
    let mut to_visit = VecDeque::new();

    dists.insert(start.clone(), 0);
    to_visit.push_back(start.clone());

    while let Some(cur) = to_visit.pop_front() {
        let dist = dists[&cur];
        let blank = cur.blank_pos();
        for &dir in &DIRECTIONS {
            if let Some(next_pos) = blank.neighbor(dir, cur.size()) {
                let next = cur.swapped(blank, next_pos);
                if !dists.contains_key(&next) {
                    dists.insert(next.clone(), dist + 1);
                    to_visit.push_back(next);
                }
            }
        }
    }

    debug!("BFS found {} reachable layouts", dists.len());
    dists
}
