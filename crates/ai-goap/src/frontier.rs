//! Priority frontier with lazy decrease-key.
//!
//! The ordering is supplied by the caller on every operation because it depends on the goal and
//! on node states that live outside the frontier. Entries snapshot their cost when pushed; when a
//! queued node is re-parented onto a cheaper route a fresh entry is pushed and the old one is
//! left behind, to be discarded when it surfaces.

use core::cmp::Ordering;
use std::collections::BTreeSet;

use crate::node::NodeId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FrontierEntry {
    pub node: NodeId,
    /// Best-known cost when the entry was pushed.
    pub cost: f32,
    /// Node generation when the entry was pushed.
    pub generation: u32,
    /// Insertion counter, the final tie-break.
    pub seq: u64,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Frontier {
    heap: Vec<FrontierEntry>,
    open: BTreeSet<NodeId>,
    next_seq: u64,
}

impl Frontier {
    /// Number of distinct open nodes (stale heap entries excluded).
    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.open.contains(&node)
    }

    pub fn open_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.open.iter().copied()
    }

    pub fn push<F>(&mut self, node: NodeId, cost: f32, generation: u32, cmp: F)
    where
        F: Fn(&FrontierEntry, &FrontierEntry) -> Ordering,
    {
        let entry = FrontierEntry {
            node,
            cost,
            generation,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.open.insert(node);
        self.heap.push(entry);
        self.sift_up(self.heap.len() - 1, &cmp);
    }

    /// Drop `node` from the open set. Any heap entries it still has become stale.
    pub fn remove(&mut self, node: NodeId) -> bool {
        self.open.remove(&node)
    }

    /// Pop the minimum live entry. `is_current` rejects entries whose generation is outdated.
    pub fn pop<F, L>(&mut self, is_current: L, cmp: F) -> Option<NodeId>
    where
        F: Fn(&FrontierEntry, &FrontierEntry) -> Ordering,
        L: Fn(&FrontierEntry) -> bool,
    {
        while let Some(entry) = self.pop_entry(&cmp) {
            if self.open.contains(&entry.node) && is_current(&entry) {
                self.open.remove(&entry.node);
                return Some(entry.node);
            }
        }
        None
    }

    /// The live entry that [`pop`](Frontier::pop) would return, found by a linear scan.
    pub fn peek<F, L>(&self, is_current: L, cmp: F) -> Option<NodeId>
    where
        F: Fn(&FrontierEntry, &FrontierEntry) -> Ordering,
        L: Fn(&FrontierEntry) -> bool,
    {
        self.heap
            .iter()
            .filter(|e| self.open.contains(&e.node) && is_current(e))
            .min_by(|a, b| cmp(a, b))
            .map(|e| e.node)
    }

    fn pop_entry<F>(&mut self, cmp: &F) -> Option<FrontierEntry>
    where
        F: Fn(&FrontierEntry, &FrontierEntry) -> Ordering,
    {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let entry = self.heap.pop();
        if !self.heap.is_empty() {
            self.sift_down(0, cmp);
        }
        entry
    }

    fn sift_up<F>(&mut self, mut idx: usize, cmp: &F)
    where
        F: Fn(&FrontierEntry, &FrontierEntry) -> Ordering,
    {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if cmp(&self.heap[idx], &self.heap[parent]) != Ordering::Less {
                break;
            }
            self.heap.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down<F>(&mut self, mut idx: usize, cmp: &F)
    where
        F: Fn(&FrontierEntry, &FrontierEntry) -> Ordering,
    {
        let len = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;
            if left < len && cmp(&self.heap[left], &self.heap[smallest]) == Ordering::Less {
                smallest = left;
            }
            if right < len && cmp(&self.heap[right], &self.heap[smallest]) == Ordering::Less {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.heap.swap(idx, smallest);
            idx = smallest;
        }
    }
}
