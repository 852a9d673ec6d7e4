use std::ops::Index;

use crate::state::BoardState;

/// Stable handle of a state stored in a `StateArena`.
///
/// Two handles are equal only if they refer to the same stored state,
/// two different states with the same board always have different handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

#[derive(Debug)]
struct Node {
    state: BoardState,
    prev: Option<NodeId>,
    /// stored states whose `prev` is this one
    live_children: u32,
    released: bool,
}

/// Owns all states of one search and the links to their predecessors.
///
/// Releasing a state only frees its slot once no stored descendant roots through it,
/// so a chain reachable from a live state always stays intact.
#[derive(Debug, Default)]
pub(crate) struct StateArena {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    live: usize,
    peak_live: usize,
}

impl StateArena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_root(&mut self, state: BoardState) -> NodeId {
        self.add(state, None)
    }

    pub(crate) fn add_child(&mut self, state: BoardState, prev: NodeId) -> NodeId {
        self.node_mut(prev).live_children += 1;
        self.add(state, Some(prev))
    }

    fn add(&mut self, state: BoardState, prev: Option<NodeId>) -> NodeId {
        let node = Node {
            state,
            prev,
            live_children: 0,
            released: false,
        };

        self.live += 1;
        if self.live > self.peak_live {
            self.peak_live = self.live;
        }

        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    pub(crate) fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).prev
    }

    /// The owner of `id` no longer needs it.
    ///
    /// The handle must not be used afterwards by the caller,
    /// the state itself stays around while it has descendants.
    pub(crate) fn release(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        debug_assert!(!node.released, "{:?} released twice", id);
        node.released = true;
        self.sweep(id);
    }

    fn sweep(&mut self, mut id: NodeId) {
        loop {
            let (reclaim, prev) = {
                let node = self.node(id);
                (node.released && node.live_children == 0, node.prev)
            };
            if !reclaim {
                return;
            }

            self.slots[id.0] = None;
            self.free.push(id.0);
            self.live -= 1;

            match prev {
                Some(prev) => {
                    self.node_mut(prev).live_children -= 1;
                    id = prev;
                }
                None => return,
            }
        }
    }

    /// States from `id` back to the root, `id` first.
    pub(crate) fn chain(&self, id: NodeId) -> Vec<BoardState> {
        let mut states = Vec::new();
        let mut cur = Some(id);
        while let Some(id) = cur {
            states.push(self[id].clone());
            cur = self.prev(id);
        }
        states
    }

    /// Number of states currently stored, including released ones kept for their descendants.
    pub(crate) fn live(&self) -> usize {
        self.live
    }

    pub(crate) fn peak_live(&self) -> usize {
        self.peak_live
    }

    fn node(&self, id: NodeId) -> &Node {
        self.slots[id.0]
            .as_ref()
            .unwrap_or_else(|| unreachable!("{:?} used after being freed", id))
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.slots[id.0]
            .as_mut()
            .unwrap_or_else(|| unreachable!("{:?} used after being freed", id))
    }
}

impl Index<NodeId> for StateArena {
    type Output = BoardState;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.node(id).state
    }
}
