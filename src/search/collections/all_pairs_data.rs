use serde::{Deserialize, Serialize};

use crate::{
    error::{check_vertex, GraphError, Result},
    graphs::{Distance, Vertex},
    search::path::Path,
};

/// Result of an all-pairs search. `distances[u][v]` is the cost of the
/// shortest path from `u` to `v` and `predecessors[u][v]` the vertex right
/// before `v` on it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AllPairsShortestPaths {
    distances: Vec<Vec<Distance>>,
    predecessors: Vec<Vec<Option<Vertex>>>,
}

impl AllPairsShortestPaths {
    pub fn new(
        distances: Vec<Vec<Distance>>,
        predecessors: Vec<Vec<Option<Vertex>>>,
    ) -> AllPairsShortestPaths {
        AllPairsShortestPaths {
            distances,
            predecessors,
        }
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.distances.len() as u32
    }

    fn check_pair(&self, source: Vertex, target: Vertex) -> Result<()> {
        check_vertex(source, self.number_of_vertices())?;
        check_vertex(target, self.number_of_vertices())
    }

    /// Raw distance label; `+inf` if `target` is unreachable from `source`.
    pub fn distance(&self, source: Vertex, target: Vertex) -> Result<Distance> {
        self.check_pair(source, target)?;
        Ok(self.distances[source as usize][target as usize])
    }

    pub fn has_path(&self, source: Vertex, target: Vertex) -> Result<bool> {
        self.check_pair(source, target)?;
        Ok(source == target || self.predecessors[source as usize][target as usize].is_some())
    }

    pub fn cost(&self, source: Vertex, target: Vertex) -> Result<Distance> {
        if !self.has_path(source, target)? {
            return Err(no_path(source, target));
        }
        Ok(self.distances[source as usize][target as usize])
    }

    pub fn predecessor(&self, source: Vertex, target: Vertex) -> Result<Option<Vertex>> {
        self.check_pair(source, target)?;
        Ok(self.predecessors[source as usize][target as usize])
    }

    /// Edges of the shortest path from `source` to `target`, found by
    /// walking `predecessors[source]` back from `target`.
    pub fn path(&self, source: Vertex, target: Vertex) -> Result<Path> {
        if !self.has_path(source, target)? {
            return Err(no_path(source, target));
        }

        let predecessors = &self.predecessors[source as usize];
        let mut vertices = vec![target];
        let mut current = target;
        while current != source {
            current = predecessors[current as usize].ok_or_else(|| no_path(source, target))?;
            vertices.push(current);
            if vertices.len() > self.distances.len() {
                return Err(GraphError::NegativeCycle);
            }
        }
        vertices.reverse();

        let distances = &self.distances[source as usize];
        Path::from_vertices(&vertices, |vertex| distances[vertex as usize])
            .ok_or_else(|| no_path(source, target))
    }

    pub fn distances(&self) -> &[Vec<Distance>] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Vec<Option<Vertex>>] {
        &self.predecessors
    }
}

fn no_path(from: Vertex, to: Vertex) -> GraphError {
    GraphError::NoPath { from, to }
}
