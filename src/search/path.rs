use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::graphs::{edge::WeightedEdge, Distance, Vertex};

/// Represents a path in a graph.
///
/// The path is stored as its edge sequence. The cost of every edge is
/// recovered from the distance labels of its endpoints, so the edge costs
/// add up to the total cost of the path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub source: Vertex,
    pub target: Vertex,
    pub edges: Vec<WeightedEdge>,
    pub cost: Distance,
}

impl Path {
    /// Builds the path through `vertices` (source first) where `distance`
    /// gives the label of every vertex relative to the source.
    pub fn from_vertices<F>(vertices: &[Vertex], distance: F) -> Option<Path>
    where
        F: Fn(Vertex) -> Distance,
    {
        let source = *vertices.first()?;
        let target = *vertices.last()?;

        let edges = vertices
            .iter()
            .tuple_windows()
            .map(|(&tail, &head)| WeightedEdge::new(tail, head, distance(head) - distance(tail)))
            .collect();

        Some(Path {
            source,
            target,
            edges,
            cost: distance(target) - distance(source),
        })
    }

    /// Vertices along the path, source first.
    pub fn vertices(&self) -> Vec<Vertex> {
        std::iter::once(self.source)
            .chain(self.edges.iter().map(|edge| edge.head()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
