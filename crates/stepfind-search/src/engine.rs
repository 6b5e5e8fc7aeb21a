//! The [`SearchEngine`] — the A* driver.

use std::collections::HashMap;

use stepfind_core::{Grid, Point};

use crate::distance::manhattan;
use crate::frontier::Frontier;
use crate::reconstruct::reconstruct_path;

/// Cost value meaning "not yet reached".
pub const UNREACHABLE: i32 = i32::MAX;

/// Returned by the step callback to either let the search continue or
/// request cooperative cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepControl {
    Continue,
    Cancel,
}

/// A* driver over a [`Grid`], with a per-expansion observation callback.
///
/// The engine owns all per-search scratch (cost tables, predecessor map,
/// frontier, neighbour buffer) and reuses it across calls, so repeated
/// searches mostly reuse existing capacity.
#[derive(Default)]
pub struct SearchEngine {
    /// Best known distance from start. Absent keys read as [`UNREACHABLE`].
    g: HashMap<Point, i32>,
    /// Estimated total cost through a node (`g + heuristic-to-end`).
    f: HashMap<Point, i32>,
    predecessors: HashMap<Point, Point>,
    frontier: Frontier,
    nbuf: Vec<Point>,
}

impl SearchEngine {
    /// Create a new engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Search for a shortest path from `start` to `end` on `grid`.
    ///
    /// Requires that `start` and `end` are distinct points inside the grid,
    /// and that [`Grid::recompute_neighbors`] has been called since the last
    /// barrier edit — adjacency is read from the cached neighbour lists.
    ///
    /// `on_step` is invoked once per node dequeued from the frontier
    /// (including the terminal match), after that node's neighbours have
    /// been relaxed, and once per node marked during path reconstruction.
    /// Returning [`StepControl::Cancel`] stops the search; the cancellation
    /// is observed immediately after the callback returns, and only at the
    /// expansion boundary.
    ///
    /// On success every node strictly between `start` and `end` on the
    /// discovered route is marked Path and `true` is returned; `start` and
    /// `end` are re-marked with their own states. If no path exists (or the
    /// search is cancelled) `false` is returned, leaving only Open/Closed
    /// residue on the grid.
    pub fn find_path<F>(&mut self, grid: &Grid, start: Point, end: Point, mut on_step: F) -> bool
    where
        F: FnMut() -> StepControl,
    {
        assert!(start != end, "start and end must be distinct");
        assert!(grid.contains(start), "start {start} outside the grid");
        assert!(grid.contains(end), "end {end} outside the grid");

        log::debug!("find_path: {start} -> {end}");

        self.g.clear();
        self.f.clear();
        self.predecessors.clear();
        self.frontier.clear();

        let f_start = manhattan(start, end);
        self.g.insert(start, 0);
        self.f.insert(start, f_start);
        self.frontier.push(start, f_start);

        while let Some(current) = self.frontier.pop_min() {
            if current == end {
                if on_step() == StepControl::Cancel {
                    log::debug!("find_path: cancelled at goal");
                    return false;
                }
                reconstruct_path(grid, &self.predecessors, end, &mut on_step);
                grid.mark_start(start);
                grid.mark_end(end);
                let cost = self.g.get(&end).copied().unwrap_or(UNREACHABLE);
                log::debug!("find_path: path found, cost {cost}");
                return true;
            }

            let current_g = self.g.get(&current).copied().unwrap_or(UNREACHABLE);

            self.nbuf.clear();
            grid.neighbors_into(current, &mut self.nbuf);
            for &neighbor in self.nbuf.iter() {
                let tentative = current_g + 1;
                let known = self.g.get(&neighbor).copied().unwrap_or(UNREACHABLE);
                // Strictly less: a tie keeps the first-discovered predecessor.
                if tentative < known {
                    self.predecessors.insert(neighbor, current);
                    self.g.insert(neighbor, tentative);
                    let f = tentative + manhattan(neighbor, end);
                    self.f.insert(neighbor, f);
                    if !self.frontier.contains(neighbor) {
                        self.frontier.push(neighbor, f);
                        grid.mark_open(neighbor);
                    }
                }
            }

            if on_step() == StepControl::Cancel {
                log::debug!("find_path: cancelled");
                return false;
            }

            if current != start {
                grid.mark_closed(current);
            }
        }

        log::debug!("find_path: frontier exhausted, no path");
        false
    }
}
