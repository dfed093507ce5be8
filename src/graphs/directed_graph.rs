use serde::{Deserialize, Serialize};

use super::{
    edge::{TaillessWeightedEdge, WeightedEdge},
    Graph, Vertex,
};
use crate::error::{check_vertex, GraphError, Result};

/// Directed graph stored as one adjacency vector per vertex. Every
/// adjacency vector is kept sorted by head, so an edge `(tail, head)` is
/// found by binary search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DirectedGraph {
    edges: Vec<Vec<TaillessWeightedEdge>>,
    number_of_edges: u32,
}

impl DirectedGraph {
    pub fn new(number_of_vertices: u32) -> DirectedGraph {
        DirectedGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
            number_of_edges: 0,
        }
    }

    /// Builds a graph from an edge list. Of several parallel edges only the
    /// cheapest one is kept.
    pub fn from_edges(number_of_vertices: u32, edges: &[WeightedEdge]) -> Result<DirectedGraph> {
        let mut graph = DirectedGraph::new(number_of_vertices);

        for edge in edges {
            graph.check_edge(edge)?;
            match graph.get_edge_cost(edge.tail(), edge.head()) {
                Some(current_cost) if edge.cost() < current_cost => {
                    graph.set_edge_cost(edge.tail(), edge.head(), edge.cost())?
                }
                Some(_) => {}
                None => {
                    graph.add_edge(edge)?;
                }
            }
        }

        Ok(graph)
    }

    /// Adds `edge` to the graph. Returns `false` and leaves the graph
    /// untouched if an edge with the same tail and head already exists.
    pub fn add_edge(&mut self, edge: &WeightedEdge) -> Result<bool> {
        self.check_edge(edge)?;

        let edges_sharing_tail = &mut self.edges[edge.tail() as usize];
        match edges_sharing_tail.binary_search_by_key(&edge.head(), |other| other.head()) {
            Ok(_) => Ok(false),
            Err(index) => {
                edges_sharing_tail.insert(index, edge.tailless());
                self.number_of_edges += 1;
                Ok(true)
            }
        }
    }

    fn set_edge_cost(&mut self, tail: Vertex, head: Vertex, cost: f64) -> Result<()> {
        self.check_edge(&WeightedEdge::new(tail, head, cost))?;

        let edges_sharing_tail = &mut self.edges[tail as usize];
        if let Ok(index) = edges_sharing_tail.binary_search_by_key(&head, |other| other.head()) {
            edges_sharing_tail[index] = TaillessWeightedEdge::new(head, cost);
        }
        Ok(())
    }

    pub fn get_edge_cost(&self, tail: Vertex, head: Vertex) -> Option<f64> {
        // Retrieve the vector of edges sharing the same tail, if it exists.
        let edges_sharing_tail = self.edges.get(tail as usize)?;

        let edge_index = edges_sharing_tail
            .binary_search_by_key(&head, |tailless_edge| tailless_edge.head())
            .ok()?;

        Some(edges_sharing_tail[edge_index].cost())
    }

    fn check_edge(&self, edge: &WeightedEdge) -> Result<()> {
        check_vertex(edge.tail(), self.number_of_vertices())?;
        check_vertex(edge.head(), self.number_of_vertices())?;
        if edge.cost().is_nan() {
            return Err(GraphError::InvalidCost {
                tail: edge.tail(),
                head: edge.head(),
            });
        }
        Ok(())
    }
}

impl Graph for DirectedGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn out_edges(
        &self,
        tail: Vertex,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        // The tail is not stored in the adjacency vector, so the iterator
        // carries it and attaches it to every edge it yields.
        struct OutEdgeIterator<'a> {
            edge_iter: std::slice::Iter<'a, TaillessWeightedEdge>,
            tail: Vertex,
        }

        impl<'a> Iterator for OutEdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                self.edge_iter
                    .next()
                    .map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.edge_iter.size_hint()
            }
        }

        impl<'a> ExactSizeIterator for OutEdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_iter.len()
            }
        }

        let edge_iter = self
            .edges
            .get(tail as usize)
            .map_or(&[][..], |edges_sharing_tail| edges_sharing_tail.as_slice())
            .iter();

        Box::new(OutEdgeIterator { edge_iter, tail })
    }

    fn number_of_edges(&self) -> u32 {
        self.number_of_edges
    }

    fn edge_cost(&self, tail: Vertex, head: Vertex) -> Option<f64> {
        self.get_edge_cost(tail, head)
    }
}
