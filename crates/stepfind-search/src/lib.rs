//! **stepfind-search** — step-observable A* search over stepfind grids.
//!
//! The search runs one node expansion at a time and hands control back to the
//! caller through a synchronous step callback after each one, so an external
//! observer (a renderer, or a recording test harness) can inspect the grid as
//! the search unfolds. The callback can also request cooperative cancellation.
//!
//! Determinism: frontier ties on equal f-score are broken by enqueue order
//! (FIFO), so identical grid configurations always produce identical
//! expansion sequences and identical paths.
//!
//! # Example
//!
//! ```
//! use stepfind_core::{Grid, Point};
//! use stepfind_search::{SearchEngine, StepControl};
//!
//! let grid = Grid::build(10, 600);
//! let (start, end) = (Point::new(0, 0), Point::new(9, 9));
//! grid.mark_start(start);
//! grid.mark_end(end);
//! grid.recompute_neighbors();
//!
//! let mut engine = SearchEngine::new();
//! let found = engine.find_path(&grid, start, end, || StepControl::Continue);
//! assert!(found);
//! ```

mod distance;
mod engine;
mod frontier;
mod reconstruct;

pub use distance::manhattan;
pub use engine::{SearchEngine, StepControl, UNREACHABLE};
pub use frontier::Frontier;
