use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::config::TieBreak;

/// Reference into the node table, ordered for `BinaryHeap` so that the
/// smallest `f` pops first and equal `f` values pop by `rank`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    rank: i64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse on f so the max-heap pops smallest f first; higher rank wins ties.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| self.rank.cmp(&other.rank))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

/// Frontier of discovered-but-unexpanded nodes.
///
/// Entries are never removed early: an entry whose node was re-queued at a
/// lower cost or already closed is left in the heap and discarded by the
/// caller when it pops.
#[derive(Debug, Default)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<NodeRef>,
    seq: i64,
    tie_break: TieBreak,
}

impl OpenSet {
    /// Empty the set and start a fresh insertion sequence.
    pub(crate) fn reset(&mut self, tie_break: TieBreak) {
        self.heap.clear();
        self.seq = 0;
        self.tie_break = tie_break;
    }

    pub(crate) fn push(&mut self, idx: usize, f: f64) {
        self.seq += 1;
        let rank = match self.tie_break {
            TieBreak::LastInserted => self.seq,
            TieBreak::FirstInserted => -self.seq,
        };
        self.heap.push(NodeRef { idx, f, rank });
    }

    pub(crate) fn pop(&mut self) -> Option<NodeRef> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(open: &mut OpenSet) -> Vec<usize> {
        std::iter::from_fn(|| open.pop().map(|r| r.idx)).collect()
    }

    #[test]
    fn lowest_f_first() {
        let mut open = OpenSet::default();
        open.reset(TieBreak::LastInserted);
        open.push(0, 5.0);
        open.push(1, 2.5);
        open.push(2, 9.0);
        open.push(3, 0.0);
        assert_eq!(open.len(), 4);
        assert_eq!(drain(&mut open), vec![3, 1, 0, 2]);
    }

    #[test]
    fn last_inserted_wins_ties() {
        let mut open = OpenSet::default();
        open.reset(TieBreak::LastInserted);
        open.push(10, 4.0);
        open.push(11, 4.0);
        open.push(12, 3.0);
        open.push(13, 4.0);
        assert_eq!(drain(&mut open), vec![12, 13, 11, 10]);
    }

    #[test]
    fn first_inserted_wins_ties() {
        let mut open = OpenSet::default();
        open.reset(TieBreak::FirstInserted);
        open.push(10, 4.0);
        open.push(11, 4.0);
        open.push(12, 3.0);
        open.push(13, 4.0);
        assert_eq!(drain(&mut open), vec![12, 10, 11, 13]);
    }

    #[test]
    fn reset_clears_entries() {
        let mut open = OpenSet::default();
        open.reset(TieBreak::LastInserted);
        open.push(1, 1.0);
        open.reset(TieBreak::FirstInserted);
        assert_eq!(open.len(), 0);
        assert!(open.pop().is_none());
    }
}
