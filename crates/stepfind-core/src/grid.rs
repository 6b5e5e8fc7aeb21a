//! The [`Grid`] — a square array of [`Node`]s with shared-view semantics.
//!
//! A `Grid` is a view into a shared backing buffer. Cloning a `Grid` yields
//! another handle to the **same** storage, so the search engine and the
//! rendering/input collaborator can each hold one without argument-passing
//! through the step callback. Single-threaded by construction (`Rc`).

use std::cell::RefCell;
use std::rc::Rc;

use crate::geom::Point;
use crate::node::{Node, NodeState};

#[derive(Debug)]
struct GridBuffer {
    nodes: Vec<Node>,
    rows: i32,
    cell_px: i32,
}

impl GridBuffer {
    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.rows + p.x) as usize
    }
}

/// A square `rows × rows` grid of [`Node`]s behind shared storage.
///
/// Row/column addressing maps to [`Point`] as `x = column`, `y = row`.
/// All mutation goes through the positional `mark_*` operations; out-of-bounds
/// writes are no-ops and out-of-bounds reads return `None`.
#[derive(Debug, Clone)]
pub struct Grid {
    buf: Rc<RefCell<GridBuffer>>,
}

impl Grid {
    /// Build a `rows × rows` grid of empty nodes.
    ///
    /// `pixel_width` is the total rendered width; each cell is assigned a
    /// side length of `pixel_width / rows`. The pixel geometry is carried
    /// purely for the rendering collaborator and has no effect on search.
    pub fn build(rows: i32, pixel_width: i32) -> Self {
        let rows = rows.max(0);
        let cell_px = if rows > 0 { pixel_width / rows } else { 0 };
        Self {
            buf: Rc::new(RefCell::new(GridBuffer {
                nodes: vec![Node::default(); (rows * rows) as usize],
                rows,
                cell_px,
            })),
        }
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn rows(&self) -> i32 {
        self.buf.borrow().rows
    }

    /// Side length of one cell in pixels.
    #[inline]
    pub fn cell_px(&self) -> i32 {
        self.buf.borrow().cell_px
    }

    /// Top-left pixel of the cell at `p`, for the renderer.
    #[inline]
    pub fn pixel_origin(&self, p: Point) -> Point {
        p * self.cell_px()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        let rows = self.buf.borrow().rows;
        p.x >= 0 && p.y >= 0 && p.x < rows && p.y < rows
    }

    /// Bounds-checked node lookup. Returns a snapshot of the node at `p`,
    /// or `None` if `p` is outside the grid.
    pub fn node(&self, p: Point) -> Option<Node> {
        if !self.contains(p) {
            return None;
        }
        let buf = self.buf.borrow();
        let idx = buf.index(p);
        Some(buf.nodes[idx].clone())
    }

    /// State of the node at `p`, or `None` if out of bounds.
    pub fn state(&self, p: Point) -> Option<NodeState> {
        if !self.contains(p) {
            return None;
        }
        let buf = self.buf.borrow();
        let idx = buf.index(p);
        Some(buf.nodes[idx].state())
    }

    fn set_state(&self, p: Point, state: NodeState) {
        if !self.contains(p) {
            return;
        }
        let mut buf = self.buf.borrow_mut();
        let idx = buf.index(p);
        buf.nodes[idx].state = state;
    }

    pub fn mark_empty(&self, p: Point) {
        self.set_state(p, NodeState::Empty);
    }

    pub fn mark_barrier(&self, p: Point) {
        self.set_state(p, NodeState::Barrier);
    }

    pub fn mark_start(&self, p: Point) {
        self.set_state(p, NodeState::Start);
    }

    pub fn mark_end(&self, p: Point) {
        self.set_state(p, NodeState::End);
    }

    pub fn mark_open(&self, p: Point) {
        self.set_state(p, NodeState::Open);
    }

    pub fn mark_closed(&self, p: Point) {
        self.set_state(p, NodeState::Closed);
    }

    pub fn mark_path(&self, p: Point) {
        self.set_state(p, NodeState::Path);
    }

    /// Whether the node at `p` is a barrier (false out of bounds).
    pub fn is_barrier(&self, p: Point) -> bool {
        self.state(p) == Some(NodeState::Barrier)
    }

    /// Whether the node at `p` is the start (false out of bounds).
    pub fn is_start(&self, p: Point) -> bool {
        self.state(p) == Some(NodeState::Start)
    }

    /// Whether the node at `p` is the end (false out of bounds).
    pub fn is_end(&self, p: Point) -> bool {
        self.state(p) == Some(NodeState::End)
    }

    /// Append the cached neighbours of the node at `p` into `buf`.
    ///
    /// The caller clears `buf` beforehand; nothing is appended for an
    /// out-of-bounds `p`.
    pub fn neighbors_into(&self, p: Point, out: &mut Vec<Point>) {
        if !self.contains(p) {
            return;
        }
        let buf = self.buf.borrow();
        let idx = buf.index(p);
        out.extend_from_slice(&buf.nodes[idx].neighbors);
    }

    /// Rebuild every node's neighbour list from the four cardinal
    /// adjacencies that are in bounds and not Barrier.
    ///
    /// Adjacency is cached, not live: this must be called after any barrier
    /// edit and before a search. Callers edit barriers in bursts, so
    /// refreshing on every access would be wasted work.
    pub fn recompute_neighbors(&self) {
        let mut buf = self.buf.borrow_mut();
        let rows = buf.rows;
        let barrier: Vec<bool> = buf.nodes.iter().map(|n| n.is_barrier()).collect();
        for y in 0..rows {
            for x in 0..rows {
                let p = Point::new(x, y);
                let mut list = Vec::with_capacity(4);
                for n in p.neighbors_4() {
                    let in_bounds = n.x >= 0 && n.y >= 0 && n.x < rows && n.y < rows;
                    if in_bounds && !barrier[(n.y * rows + n.x) as usize] {
                        list.push(n);
                    }
                }
                let idx = buf.index(p);
                buf.nodes[idx].neighbors = list;
            }
        }
    }

    /// Reset every node to Empty with no cached neighbours, as if the grid
    /// had been rebuilt fresh.
    pub fn clear(&self) {
        let mut buf = self.buf.borrow_mut();
        for node in buf.nodes.iter_mut() {
            *node = Node::default();
        }
    }

    /// Row-major iterator over `(Point, NodeState)` pairs.
    ///
    /// Iterates over a snapshot, so the grid may be mutated while iterating.
    pub fn iter(&self) -> GridIter {
        let buf = self.buf.borrow();
        let rows = buf.rows;
        let items: Vec<(Point, NodeState)> = (0..rows)
            .flat_map(|y| (0..rows).map(move |x| Point::new(x, y)))
            .map(|p| (p, buf.nodes[buf.index(p)].state()))
            .collect();
        GridIter { items, pos: 0 }
    }
}

/// Iterator over `(Point, NodeState)` pairs of a [`Grid`] snapshot.
pub struct GridIter {
    items: Vec<(Point, NodeState)>,
    pos: usize,
}

impl Iterator for GridIter {
    type Item = (Point, NodeState);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.pos).copied()?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridIter {}

impl IntoIterator for &Grid {
    type Item = (Point, NodeState);
    type IntoIter = GridIter;

    fn into_iter(self) -> GridIter {
        self.iter()
    }
}
