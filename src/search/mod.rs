use crate::graphs::{Distance, Vertex};

pub mod astar;
pub mod bellman_ford;
pub mod collections;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod johnson;
pub mod path;

/// Estimated remaining cost from a vertex to the goal set of an A* search.
///
/// A* returns a cheapest path only if the estimate is consistent:
/// `estimate(u) <= cost(u, v) + estimate(v)` for every edge `(u, v)` and
/// zero on the goals. This is not validated.
pub trait Heuristic {
    fn estimate(&self, vertex: Vertex) -> Distance;
}

impl<F> Heuristic for F
where
    F: Fn(Vertex) -> Distance,
{
    fn estimate(&self, vertex: Vertex) -> Distance {
        self(vertex)
    }
}

/// Estimates zero everywhere, which turns A* into Dijkstra with early exit.
pub struct ZeroHeuristic {}

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _vertex: Vertex) -> Distance {
        0.0
    }
}
