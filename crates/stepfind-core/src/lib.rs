//! **stepfind-core** — grid and node model for step-observable pathfinding.
//!
//! This crate provides the data model the search layer operates on: a
//! [`Point`] geometry primitive, the per-cell [`Node`] with its traversal
//! [`NodeState`], and the shared-view [`Grid`].
//!
//! A `Grid` is a *view* into shared storage: cloning it yields another handle
//! to the same cells. A rendering or input collaborator keeps its own clone
//! and observes search progress without any argument-passing through the
//! step callback.

pub mod geom;
pub mod grid;
pub mod node;

pub use geom::Point;
pub use grid::Grid;
pub use node::{Node, NodeState};
