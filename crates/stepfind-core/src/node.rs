//! The [`Node`] cell type and its traversal [`NodeState`].

use crate::geom::Point;

/// Traversal state of a single grid cell.
///
/// `Open`, `Closed` and `Path` are written by the search layer; the rest are
/// written by the input collaborator. Transitions are last-write-wins.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeState {
    #[default]
    Empty,
    Barrier,
    Start,
    End,
    Open,
    Closed,
    Path,
}

/// A single grid cell: its traversal state plus a cached list of passable
/// cardinal neighbours.
///
/// A node's identity is its position in the grid, fixed at build time; the
/// neighbour list stores coordinates rather than references. The list is
/// only meaningful after [`Grid::recompute_neighbors`](crate::Grid::recompute_neighbors)
/// has run since the last barrier edit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    pub(crate) state: NodeState,
    pub(crate) neighbors: Vec<Point>,
}

impl Node {
    /// Current traversal state.
    #[inline]
    pub fn state(&self) -> NodeState {
        self.state
    }

    /// Cached passable cardinal neighbours, in up/right/down/left order.
    #[inline]
    pub fn neighbors(&self) -> &[Point] {
        &self.neighbors
    }

    pub fn mark_empty(&mut self) {
        self.state = NodeState::Empty;
    }

    pub fn mark_barrier(&mut self) {
        self.state = NodeState::Barrier;
    }

    pub fn mark_start(&mut self) {
        self.state = NodeState::Start;
    }

    pub fn mark_end(&mut self) {
        self.state = NodeState::End;
    }

    pub fn mark_open(&mut self) {
        self.state = NodeState::Open;
    }

    pub fn mark_closed(&mut self) {
        self.state = NodeState::Closed;
    }

    pub fn mark_path(&mut self) {
        self.state = NodeState::Path;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state == NodeState::Empty
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.state == NodeState::Barrier
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.state == NodeState::Start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.state == NodeState::End
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state == NodeState::Open
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.state == NodeState::Closed
    }

    #[inline]
    pub fn is_path(&self) -> bool {
        self.state == NodeState::Path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let node = Node::default();
        assert!(node.is_empty());
        assert_eq!(node.state(), NodeState::Empty);
        assert!(node.neighbors().is_empty());
    }

    #[test]
    fn transitions_are_last_write_wins() {
        let mut node = Node::default();
        node.mark_barrier();
        assert!(node.is_barrier());
        node.mark_start();
        assert!(node.is_start());
        assert!(!node.is_barrier());
        node.mark_open();
        node.mark_closed();
        node.mark_path();
        assert!(node.is_path());
        node.mark_empty();
        assert!(node.is_empty());
    }

    #[test]
    fn predicates_match_state() {
        let mut node = Node::default();
        node.mark_end();
        assert!(node.is_end());
        assert!(!node.is_start());
        assert!(!node.is_open());
        assert!(!node.is_closed());
        assert!(!node.is_path());
    }
}
