//! Classical weighted graph algorithms over dense vertex ids: Dijkstra,
//! Bellman-Ford, Floyd-Warshall, Johnson, A* and Prim, built on a shared
//! decrease-key priority queue.
//!
//! Every algorithm is a function that computes its whole result before
//! returning it; the results are read through immutable accessors.

pub mod error;
pub mod graphs;
pub mod queue;
pub mod search;
pub mod spanning_tree;
pub mod utility;

pub use error::{GraphError, Result};
