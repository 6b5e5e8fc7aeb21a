//! Path reconstruction: walking the predecessor chain back from the goal.

use std::collections::HashMap;

use stepfind_core::{Grid, Point};

use crate::engine::StepControl;

/// Walk `predecessors` backward from `end`, marking every strictly
/// intermediate node as Path and invoking `on_step` once per marked node.
///
/// The walk stops at the node with no predecessor entry (the start node).
/// Neither `end` nor the start node is marked; they keep their own states.
/// The callback's return value is ignored here: cancellation is polled only
/// at the engine's expansion boundary.
pub(crate) fn reconstruct_path<F>(
    grid: &Grid,
    predecessors: &HashMap<Point, Point>,
    end: Point,
    on_step: &mut F,
) where
    F: FnMut() -> StepControl,
{
    let mut current = end;
    while let Some(&prev) = predecessors.get(&current) {
        current = prev;
        if !predecessors.contains_key(&current) {
            // Reached the start node.
            break;
        }
        grid.mark_path(current);
        let _ = on_step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepfind_core::NodeState;

    #[test]
    fn marks_intermediate_nodes_goal_to_start() {
        let grid = Grid::build(4, 40);
        // Chain (0,0) -> (1,0) -> (2,0) -> (3,0).
        let mut predecessors = HashMap::new();
        predecessors.insert(Point::new(3, 0), Point::new(2, 0));
        predecessors.insert(Point::new(2, 0), Point::new(1, 0));
        predecessors.insert(Point::new(1, 0), Point::new(0, 0));

        let mut visits = Vec::new();
        let view = grid.clone();
        reconstruct_path(&grid, &predecessors, Point::new(3, 0), &mut || {
            let marked: Vec<_> = view
                .iter()
                .filter(|&(_, s)| s == NodeState::Path)
                .map(|(p, _)| p)
                .collect();
            visits.push(marked.len());
            StepControl::Continue
        });

        assert_eq!(grid.state(Point::new(2, 0)), Some(NodeState::Path));
        assert_eq!(grid.state(Point::new(1, 0)), Some(NodeState::Path));
        assert_eq!(grid.state(Point::new(0, 0)), Some(NodeState::Empty));
        assert_eq!(grid.state(Point::new(3, 0)), Some(NodeState::Empty));
        // One callback per marked node, observing incremental progress.
        assert_eq!(visits, vec![1, 2]);
    }

    #[test]
    fn adjacent_endpoints_mark_nothing() {
        let grid = Grid::build(3, 30);
        let mut predecessors = HashMap::new();
        predecessors.insert(Point::new(1, 0), Point::new(0, 0));

        let mut calls = 0;
        reconstruct_path(&grid, &predecessors, Point::new(1, 0), &mut || {
            calls += 1;
            StepControl::Continue
        });

        assert_eq!(calls, 0);
        assert!(grid.iter().all(|(_, s)| s != NodeState::Path));
    }
}
