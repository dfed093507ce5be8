use serde::{Deserialize, Serialize};

use crate::{
    error::{check_vertex, Result},
    graphs::{edge::WeightedEdge, Distance, Vertex},
};

pub mod prim;

/// Minimum spanning tree of a connected undirected graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpanningTree {
    predecessors: Vec<Option<Vertex>>,
    keys: Vec<Distance>,
}

impl SpanningTree {
    /// Tree edges `(predecessor(v), v)` in order of `v`, each with the cost
    /// of the edge that connects `v` to the tree.
    pub fn edges(&self) -> Vec<WeightedEdge> {
        self.predecessors
            .iter()
            .zip(&self.keys)
            .enumerate()
            .filter_map(|(vertex, (predecessor, &key))| {
                predecessor.map(|predecessor| WeightedEdge::new(predecessor, vertex as Vertex, key))
            })
            .collect()
    }

    /// Sum of the tree edge costs.
    pub fn cost(&self) -> Distance {
        self.keys.iter().sum()
    }

    pub fn predecessor(&self, vertex: Vertex) -> Result<Option<Vertex>> {
        check_vertex(vertex, self.predecessors.len() as u32)?;
        Ok(self.predecessors[vertex as usize])
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.predecessors.len() as u32
    }
}
