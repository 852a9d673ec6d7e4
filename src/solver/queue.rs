use std::collections::VecDeque;

use crate::board::Board;

use super::arena::{NodeId, StateArena};

#[derive(Debug, Clone, Copy)]
struct Entry {
    id: NodeId,
    total_cost: u32,
}

/// List of states used as the open list (sorted inserts),
/// the closed list and the list of freshly generated children (unordered inserts).
///
/// The queue only holds handles, the states themselves live in the `StateArena`.
/// Don't mix sorted and unordered inserts on one queue.
#[derive(Debug, Default)]
pub(crate) struct StateQueue {
    entries: VecDeque<Entry>,
}

impl StateQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Inserts before the first entry with strictly greater total cost,
    /// so equal costs come out in insertion order.
    pub(crate) fn insert_sorted(&mut self, arena: &StateArena, id: NodeId) {
        let total_cost = arena[id].total_cost();
        let index = self
            .entries
            .iter()
            .position(|e| e.total_cost > total_cost)
            .unwrap_or_else(|| self.entries.len());
        self.entries.insert(index, Entry { id, total_cost });
    }

    pub(crate) fn insert_unordered(&mut self, arena: &StateArena, id: NodeId) {
        let total_cost = arena[id].total_cost();
        self.entries.push_back(Entry { id, total_cost });
    }

    /// Removes the front entry - the cheapest one if only sorted inserts were used.
    pub(crate) fn pop_min(&mut self) -> Option<NodeId> {
        self.entries.pop_front().map(|e| e.id)
    }

    /// First entry with the same board, costs don't matter.
    pub(crate) fn find_equal(&self, arena: &StateArena, target: &Board) -> Option<NodeId> {
        self.entries
            .iter()
            .map(|e| e.id)
            .find(|&id| arena[id].board == *target)
    }

    /// Removes exactly the state `id` (not any other state with the same board)
    /// and releases it from the arena.
    /// Returns false if it's not in this queue.
    pub(crate) fn remove_and_discard(&mut self, arena: &mut StateArena, id: NodeId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(index) => {
                self.entries.remove(index);
                arena.release(id);
                true
            }
            None => false,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::state::BoardState;

    fn add(arena: &mut StateArena, tiles: Vec<u8>, path_cost: u32, heuristic: u32) -> NodeId {
        let board = Board::new(2, tiles).unwrap();
        arena.add_root(BoardState::new(board, path_cost, heuristic))
    }

    #[test]
    fn sorted_inserts_are_stable() {
        let mut arena = StateArena::new();
        let a = add(&mut arena, vec![1, 2, 3, 0], 0, 3);
        let b = add(&mut arena, vec![1, 2, 0, 3], 1, 1);
        let c = add(&mut arena, vec![1, 0, 3, 2], 2, 1);
        let d = add(&mut arena, vec![0, 1, 3, 2], 1, 2);
        let e = add(&mut arena, vec![3, 1, 0, 2], 0, 0);

        let mut queue = StateQueue::new();
        for &id in &[a, b, c, d, e] {
            queue.insert_sorted(&arena, id);
        }
        assert_eq!(queue.count(), 5);

        // costs: a 3, b 2, c 3, d 3, e 0
        let popped: Vec<_> = (0..5).map(|_| queue.pop_min().unwrap()).collect();
        assert_eq!(popped, vec![e, b, a, c, d]);
        assert!(queue.is_empty());
        assert_eq!(queue.pop_min(), None);
    }

    #[test]
    fn unordered_inserts_keep_order() {
        let mut arena = StateArena::new();
        let a = add(&mut arena, vec![1, 2, 3, 0], 5, 5);
        let b = add(&mut arena, vec![1, 2, 0, 3], 0, 0);

        let mut queue = StateQueue::new();
        queue.insert_unordered(&arena, a);
        queue.insert_unordered(&arena, b);
        assert_eq!(queue.pop_min(), Some(a));
        assert_eq!(queue.pop_min(), Some(b));
    }

    #[test]
    fn finding_by_board() {
        let mut arena = StateArena::new();
        let a = add(&mut arena, vec![1, 2, 3, 0], 4, 0);
        let b = add(&mut arena, vec![1, 2, 0, 3], 1, 1);
        let a2 = add(&mut arena, vec![1, 2, 3, 0], 2, 0);

        let mut queue = StateQueue::new();
        queue.insert_unordered(&arena, a);
        queue.insert_unordered(&arena, b);
        queue.insert_unordered(&arena, a2);

        // the first match wins, costs are ignored
        assert_eq!(queue.find_equal(&arena, &arena[a2].board), Some(a));
        assert_eq!(queue.find_equal(&arena, &arena[b].board), Some(b));
        let missing = Board::new(2, vec![0, 1, 2, 3]).unwrap();
        assert_eq!(queue.find_equal(&arena, &missing), None);
    }

    #[test]
    fn removing_by_identity() {
        let mut arena = StateArena::new();
        let a = add(&mut arena, vec![1, 2, 3, 0], 4, 0);
        let a2 = add(&mut arena, vec![1, 2, 3, 0], 2, 0);
        let b = add(&mut arena, vec![1, 2, 0, 3], 1, 1);

        let mut queue = StateQueue::new();
        queue.insert_unordered(&arena, a);
        queue.insert_unordered(&arena, b);

        // same board but a different state
        assert!(!queue.remove_and_discard(&mut arena, a2));
        assert_eq!(queue.count(), 2);
        assert_eq!(arena.live(), 3);

        assert!(queue.remove_and_discard(&mut arena, a));
        assert_eq!(queue.count(), 1);
        assert_eq!(arena.live(), 2);
        assert_eq!(queue.find_equal(&arena, &arena[a2].board), None);
        assert_eq!(queue.pop_min(), Some(b));
    }
}
