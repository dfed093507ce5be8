use serde::{Deserialize, Serialize};

use super::{
    edge::{TaillessWeightedEdge, WeightedEdge},
    Graph, Vertex,
};
use crate::error::{check_vertex, GraphError, Result};

/// Undirected graph. Every edge `{u, v}` is kept once in `edges` and once
/// per direction in the adjacency lists, so `out_edges(u)` and
/// `out_edges(v)` both see it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UndirectedGraph {
    adjacency: Vec<Vec<TaillessWeightedEdge>>,
    edges: Vec<WeightedEdge>,
}

impl UndirectedGraph {
    pub fn new(number_of_vertices: u32) -> UndirectedGraph {
        UndirectedGraph {
            adjacency: vec![Vec::new(); number_of_vertices as usize],
            edges: Vec::new(),
        }
    }

    pub fn from_edges(number_of_vertices: u32, edges: &[WeightedEdge]) -> Result<UndirectedGraph> {
        let mut graph = UndirectedGraph::new(number_of_vertices);
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Adds the undirected edge `{tail, head}`. Returns `false` if the two
    /// vertices are already joined by an edge.
    pub fn add_edge(&mut self, edge: &WeightedEdge) -> Result<bool> {
        check_vertex(edge.tail(), self.number_of_vertices())?;
        check_vertex(edge.head(), self.number_of_vertices())?;
        if edge.cost().is_nan() {
            return Err(GraphError::InvalidCost {
                tail: edge.tail(),
                head: edge.head(),
            });
        }

        if self.adjacency[edge.tail() as usize]
            .iter()
            .any(|other| other.head() == edge.head())
        {
            return Ok(false);
        }

        self.adjacency[edge.tail() as usize].push(edge.tailless());
        if edge.tail() != edge.head() {
            self.adjacency[edge.head() as usize].push(edge.reversed().tailless());
        }
        self.edges.push(*edge);

        Ok(true)
    }

    /// Every edge exactly once, in insertion order.
    pub fn undirected_edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    pub fn degree(&self, vertex: Vertex) -> Result<usize> {
        check_vertex(vertex, self.number_of_vertices())?;
        Ok(self.adjacency[vertex as usize].len())
    }
}

impl Graph for UndirectedGraph {
    fn number_of_vertices(&self) -> u32 {
        self.adjacency.len() as u32
    }

    fn out_edges(
        &self,
        source: Vertex,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        let incident = self
            .adjacency
            .get(source as usize)
            .map_or(&[][..], |incident| incident.as_slice());

        Box::new(
            incident
                .iter()
                .map(move |tailless_edge| tailless_edge.set_tail(source)),
        )
    }
}
