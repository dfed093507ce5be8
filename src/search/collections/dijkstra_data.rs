use serde::{Deserialize, Serialize};

use crate::{
    error::{check_vertex, GraphError, Result},
    graphs::{Distance, Vertex},
    search::path::Path,
};

/// Per-vertex labels of a running single-source search, stored as parallel
/// vectors indexed by vertex.
pub struct DijkstraData {
    source: Vertex,
    distances: Vec<Distance>,
    predecessors: Vec<Option<Vertex>>,
}

impl DijkstraData {
    /// Every distance is `+inf` except the source, which starts at zero.
    pub fn new(number_of_vertices: u32, source: Vertex) -> DijkstraData {
        let mut distances = vec![Distance::INFINITY; number_of_vertices as usize];
        distances[source as usize] = 0.0;

        DijkstraData {
            source,
            distances,
            predecessors: vec![None; number_of_vertices as usize],
        }
    }

    pub fn distance(&self, vertex: Vertex) -> Distance {
        self.distances[vertex as usize]
    }

    pub fn predecessors(&self) -> &[Option<Vertex>] {
        &self.predecessors
    }

    /// Relaxes the edge `(tail, head)`: if going through `tail` is cheaper
    /// than the best known way to `head`, `head` takes the new distance and
    /// `tail` becomes its predecessor. Returns whether `head` changed.
    pub fn relax(&mut self, tail: Vertex, head: Vertex, cost: Distance) -> bool {
        let alternative_distance = self.distances[tail as usize] + cost;
        if self.distances[head as usize] > alternative_distance {
            self.distances[head as usize] = alternative_distance;
            self.predecessors[head as usize] = Some(tail);
            return true;
        }
        false
    }

    /// Whether relaxing `(tail, head)` would still improve `head`.
    pub fn can_relax(&self, tail: Vertex, head: Vertex, cost: Distance) -> bool {
        self.distances[head as usize] > self.distances[tail as usize] + cost
    }

    pub fn into_tree(self) -> ShortestPathTree {
        ShortestPathTree {
            source: self.source,
            distances: self.distances,
            predecessors: self.predecessors,
        }
    }
}

/// Immutable result of a single-source search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShortestPathTree {
    source: Vertex,
    distances: Vec<Distance>,
    predecessors: Vec<Option<Vertex>>,
}

impl ShortestPathTree {
    pub fn source(&self) -> Vertex {
        self.source
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.distances.len() as u32
    }

    /// Raw distance label of `vertex`; `+inf` if it was never reached.
    pub fn distance(&self, vertex: Vertex) -> Result<Distance> {
        check_vertex(vertex, self.number_of_vertices())?;
        Ok(self.distances[vertex as usize])
    }

    pub fn has_path(&self, vertex: Vertex) -> Result<bool> {
        check_vertex(vertex, self.number_of_vertices())?;
        Ok(vertex == self.source || self.predecessors[vertex as usize].is_some())
    }

    /// Cost of the shortest path from the source to `vertex`.
    pub fn cost(&self, vertex: Vertex) -> Result<Distance> {
        if !self.has_path(vertex)? {
            return Err(self.no_path(vertex));
        }
        Ok(self.distances[vertex as usize])
    }

    pub fn predecessor(&self, vertex: Vertex) -> Result<Option<Vertex>> {
        check_vertex(vertex, self.number_of_vertices())?;
        Ok(self.predecessors[vertex as usize])
    }

    /// Edges of the shortest path from the source to `target`.
    pub fn path(&self, target: Vertex) -> Result<Path> {
        let vertices = self.path_vertices(target)?;
        Path::from_vertices(&vertices, |vertex| self.distances[vertex as usize])
            .ok_or_else(|| self.no_path(target))
    }

    /// Walks the predecessors back from `target` to the source. A walk
    /// longer than the number of vertices can only be caused by a
    /// predecessor cycle, which a negative cycle leaves behind.
    fn path_vertices(&self, target: Vertex) -> Result<Vec<Vertex>> {
        if !self.has_path(target)? {
            return Err(self.no_path(target));
        }

        let mut vertices = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current as usize].ok_or_else(|| self.no_path(target))?;
            vertices.push(current);
            if vertices.len() > self.distances.len() {
                return Err(GraphError::NegativeCycle);
            }
        }

        vertices.reverse();
        Ok(vertices)
    }

    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<Vertex>] {
        &self.predecessors
    }

    fn no_path(&self, target: Vertex) -> GraphError {
        GraphError::NoPath {
            from: self.source,
            to: target,
        }
    }
}
