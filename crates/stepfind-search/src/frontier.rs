//! The [`Frontier`] — A*'s open set, with deterministic tie-breaking.

use std::collections::{BinaryHeap, HashSet};

use stepfind_core::Point;

/// A frontier entry, ordered by `(f, seq)` for use in `BinaryHeap`.
///
/// `seq` is the enqueue counter: on equal f-score the first-enqueued entry
/// wins, giving a total order without comparing points or relying on hash
/// order.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry {
    f: i32,
    seq: u64,
    pos: Point,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so BinaryHeap (max-heap) pops smallest (f, seq) first.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority structure over discovered-but-not-yet-expanded nodes,
/// with O(1) membership testing.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    members: HashSet<Point>,
    seq: u64,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `pos` with priority `f`.
    ///
    /// Callers check [`contains`](Self::contains) first; pushing a node that
    /// is already a member is a bug.
    pub fn push(&mut self, pos: Point, f: i32) {
        debug_assert!(!self.members.contains(&pos), "{pos} already in frontier");
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry { f, seq, pos });
        self.members.insert(pos);
    }

    /// Remove and return the node with the smallest `(f, seq)`, or `None`
    /// if the frontier is empty.
    pub fn pop_min(&mut self) -> Option<Point> {
        let entry = self.heap.pop()?;
        self.members.remove(&entry.pos);
        Some(entry.pos)
    }

    /// Whether `pos` is currently enqueued.
    #[inline]
    pub fn contains(&self, pos: Point) -> bool {
        self.members.contains(&pos)
    }

    /// Number of pending entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no entries remain.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop all entries and restart the enqueue counter.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.members.clear();
        self.seq = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_f_order() {
        let mut frontier = Frontier::new();
        frontier.push(Point::new(0, 0), 5);
        frontier.push(Point::new(1, 0), 2);
        frontier.push(Point::new(2, 0), 9);
        frontier.push(Point::new(3, 0), 3);
        assert_eq!(frontier.pop_min(), Some(Point::new(1, 0)));
        assert_eq!(frontier.pop_min(), Some(Point::new(3, 0)));
        assert_eq!(frontier.pop_min(), Some(Point::new(0, 0)));
        assert_eq!(frontier.pop_min(), Some(Point::new(2, 0)));
        assert_eq!(frontier.pop_min(), None);
    }

    #[test]
    fn equal_f_pops_fifo() {
        let mut frontier = Frontier::new();
        frontier.push(Point::new(4, 4), 7);
        frontier.push(Point::new(1, 1), 7);
        frontier.push(Point::new(3, 3), 7);
        assert_eq!(frontier.pop_min(), Some(Point::new(4, 4)));
        assert_eq!(frontier.pop_min(), Some(Point::new(1, 1)));
        assert_eq!(frontier.pop_min(), Some(Point::new(3, 3)));
    }

    #[test]
    fn membership_tracks_push_and_pop() {
        let mut frontier = Frontier::new();
        let p = Point::new(2, 3);
        assert!(!frontier.contains(p));
        frontier.push(p, 1);
        assert!(frontier.contains(p));
        assert_eq!(frontier.len(), 1);
        frontier.pop_min();
        assert!(!frontier.contains(p));
        assert!(frontier.is_empty());
    }

    #[test]
    fn pop_empty_is_none() {
        let mut frontier = Frontier::new();
        assert_eq!(frontier.pop_min(), None);
    }

    #[test]
    fn clear_resets_state() {
        let mut frontier = Frontier::new();
        frontier.push(Point::new(0, 0), 1);
        frontier.push(Point::new(1, 0), 2);
        frontier.clear();
        assert!(frontier.is_empty());
        assert!(!frontier.contains(Point::new(0, 0)));
        assert_eq!(frontier.pop_min(), None);
    }
}
