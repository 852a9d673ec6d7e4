use std::fmt::{self, Debug, Display, Formatter};

use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use crate::board::Board;
use crate::config::BoardConfig;
use crate::state::BoardState;

use super::arena::{NodeId, StateArena};
use super::expand::expand;
use super::heuristic::Manhattan;
use super::path::Path;
use super::queue::StateQueue;

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Stats {
    created_states: Vec<u64>,
    visited_states: Vec<u64>,
    discarded_duplicates: Vec<u64>,
    replaced_duplicates: Vec<u64>,
    peak_stored: usize,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_created(&self) -> u64 {
        self.created_states.iter().sum::<u64>()
    }

    pub fn total_visited(&self) -> u64 {
        self.visited_states.iter().sum::<u64>()
    }

    pub fn total_discarded_duplicates(&self) -> u64 {
        self.discarded_duplicates.iter().sum::<u64>()
    }

    pub fn total_replaced_duplicates(&self) -> u64 {
        self.replaced_duplicates.iter().sum::<u64>()
    }

    pub(crate) fn add_created(&mut self, depth: usize) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    pub(crate) fn add_visited(&mut self, depth: usize) -> bool {
        Self::add(&mut self.visited_states, depth)
    }

    pub(crate) fn add_discarded_duplicate(&mut self, depth: usize) -> bool {
        Self::add(&mut self.discarded_duplicates, depth)
    }

    pub(crate) fn add_replaced_duplicate(&mut self, depth: usize) -> bool {
        Self::add(&mut self.replaced_duplicates, depth)
    }

    fn add(counts: &mut Vec<u64>, depth: usize) -> bool {
        let mut ret = false;

        // while because some depths might be skipped
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }

    fn depth_table(&self) -> Table {
        fn at(counts: &[u64], depth: usize) -> u64 {
            counts.get(depth).cloned().unwrap_or(0)
        }

        let mut table = Table::new();
        table.set_format(*FORMAT_CLEAN);
        table.set_titles(Row::new(vec![
            Cell::new("Depth"),
            Cell::new("Created"),
            Cell::new("Visited"),
            Cell::new("Discarded"),
            Cell::new("Replaced"),
        ]));
        // created_states should be the longest vec
        for depth in 0..self.created_states.len() {
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&at(&self.created_states, depth).separated_string()),
                Cell::new(&at(&self.visited_states, depth).separated_string()),
                Cell::new(&at(&self.discarded_duplicates, depth).separated_string()),
                Cell::new(&at(&self.replaced_duplicates, depth).separated_string()),
            ]));
        }
        table
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "discarded duplicates by depth: {:?}", self.discarded_duplicates)?;
        writeln!(f, "replaced duplicates by depth: {:?}", self.replaced_duplicates)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(f, "total visited: {}", self.total_visited().separated_string())?;
        writeln!(f, "peak stored: {}", self.peak_stored.separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "States created total: {}", self.total_created().separated_string())?;
        writeln!(f, "States visited total: {}", self.total_visited().separated_string())?;
        writeln!(
            f,
            "Duplicates discarded total: {}",
            self.total_discarded_duplicates().separated_string()
        )?;
        writeln!(
            f,
            "Duplicates replaced total: {}",
            self.total_replaced_duplicates().separated_string()
        )?;
        writeln!(f, "Most states stored: {}", self.peak_stored.separated_string())?;
        writeln!(f)?;
        write!(f, "{}", self.depth_table())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchStatus {
    Running,
    GoalFound(NodeId),
    /// Nothing left to expand - only possible for unsolvable boards
    Exhausted,
}

/// One A* search from a start board to the goal of a config.
///
/// Duplicates are only looked up in the closed list. A generated state that is cheaper than
/// its closed duplicate replaces it in the closed list but is not expanded again,
/// and the open list can hold the same board several times with different costs.
/// With a consistent heuristic (Manhattan distance is one) this still finds optimal paths.
pub(crate) struct AStar<'a> {
    goal: &'a Board,
    move_cost: u32,
    manhattan: Manhattan,
    arena: StateArena,
    open: StateQueue,
    closed: StateQueue,
    stats: Stats,
    status: SearchStatus,
    print_status: bool,
    #[cfg(test)]
    last_popped: Option<BoardState>,
}

impl<'a> AStar<'a> {
    pub(crate) fn new(start: &Board, config: &'a BoardConfig, print_status: bool) -> Self {
        let goal = config.goal_layout();
        let manhattan = Manhattan::new(goal);
        let root = BoardState::new(start.clone(), 0, manhattan.estimate(start));

        let mut stats = Stats::new();
        stats.add_created(0);

        let mut arena = StateArena::new();
        let mut open = StateQueue::new();
        let root = arena.add_root(root);
        open.insert_sorted(&arena, root);

        AStar {
            goal,
            move_cost: config.move_cost(),
            manhattan,
            arena,
            open,
            closed: StateQueue::new(),
            stats,
            status: SearchStatus::Running,
            print_status,
            #[cfg(test)]
            last_popped: None,
        }
    }

    pub(crate) fn status(&self) -> SearchStatus {
        self.status
    }

    /// The state taken from the open list by the last step.
    #[cfg(test)]
    pub(crate) fn last_popped(&self) -> Option<&BoardState> {
        self.last_popped.as_ref()
    }

    #[cfg(test)]
    fn record_popped(&mut self, cur: NodeId) {
        self.last_popped = Some(self.arena[cur].clone());
    }

    #[cfg(not(test))]
    fn record_popped(&mut self, _cur: NodeId) {}

    #[cfg(test)]
    pub(crate) fn stats(&self) -> &Stats {
        &self.stats
    }

    fn depth(&self, state: &BoardState) -> usize {
        (state.path_cost / self.move_cost) as usize
    }

    /// Takes the cheapest state from the open list and either finishes or expands it.
    pub(crate) fn step(&mut self) -> SearchStatus {
        if self.status != SearchStatus::Running {
            return self.status;
        }

        let cur = match self.open.pop_min() {
            Some(cur) => cur,
            None => {
                self.status = SearchStatus::Exhausted;
                return self.status;
            }
        };
        let cur_depth = self.depth(&self.arena[cur]);
        self.record_popped(cur);
        if self.stats.add_visited(cur_depth) && self.print_status {
            println!("Visited new depth: {}", cur_depth);
            println!("total created / visited / discarded duplicates:");
            println!(
                "{:<16}{:<16}{}",
                self.stats.total_created().separated_string(),
                self.stats.total_visited().separated_string(),
                self.stats.total_discarded_duplicates().separated_string()
            );
            println!();
        }

        if self.arena[cur].board == *self.goal {
            debug!("Goal found at depth {}", cur_depth);
            self.status = SearchStatus::GoalFound(cur);
            return self.status;
        }

        self.closed.insert_unordered(&self.arena, cur);

        let successors = expand(&self.arena[cur], &self.manhattan, self.move_cost);
        let mut children = StateQueue::new();
        for child in successors {
            let child = self.arena.add_child(child, cur);
            children.insert_unordered(&self.arena, child);
        }
        self.stats.peak_stored = self.arena.peak_live();

        while let Some(child) = children.pop_min() {
            let child_depth = self.depth(&self.arena[child]);
            self.stats.add_created(child_depth);

            match self.closed.find_equal(&self.arena, &self.arena[child].board) {
                Some(prior) => {
                    if self.arena[child].total_cost() < self.arena[prior].total_cost() {
                        trace!("Replacing {:?}", self.arena[prior]);
                        let removed = self.closed.remove_and_discard(&mut self.arena, prior);
                        debug_assert!(removed, "{:?} missing from the closed list", prior);
                        self.closed.insert_unordered(&self.arena, child);
                        self.stats.add_replaced_duplicate(child_depth);
                    } else {
                        // not any better than what we already have
                        self.arena.release(child);
                        self.stats.add_discarded_duplicate(child_depth);
                    }
                }
                None => self.open.insert_sorted(&self.arena, child),
            }
        }

        if self.open.is_empty() {
            self.status = SearchStatus::Exhausted;
        }
        self.status
    }

    /// Steps until the search is finished.
    ///
    /// The path is copied out of the search storage before it's dropped.
    pub(crate) fn run(mut self) -> (Option<Path>, Stats) {
        debug!("Search called");

        while self.step() == SearchStatus::Running {}

        let path = match self.status() {
            SearchStatus::GoalFound(goal) => {
                debug!("Reached goal state {:?}", self.arena[goal]);
                Some(Path::new(self.arena.chain(goal)))
            }
            SearchStatus::Exhausted => {
                debug!("Open list exhausted");
                None
            }
            SearchStatus::Running => unreachable!("search stopped while running"),
        };
        debug!(
            "Search finished, {} states still stored, {} open, {} closed",
            self.arena.live(),
            self.open.count(),
            self.closed.count()
        );
        (path, self.stats)
    }
}

/// Runs A* from `start` to the goal layout of `config`.
///
/// Must only be called for solvable boards, otherwise it searches the entire reachable half
/// of the state space before giving up.
pub(crate) fn search(start: &Board, config: &BoardConfig, print_status: bool) -> (Option<Path>, Stats) {
    AStar::new(start, config, print_status).run()
}
