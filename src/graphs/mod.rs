use std::ops::Range;

use self::edge::WeightedEdge;

pub mod directed_graph;
pub mod edge;
pub mod graph_factory;
pub mod graph_functions;
pub mod matrix_graph;
pub mod undirected_graph;

pub type Vertex = u32;
pub type Distance = f64;

/// Read-only view of a graph with dense vertex ids `0..number_of_vertices`.
///
/// The view performs no filtering of its own. Negative costs are passed
/// through unchanged and each engine checks its own preconditions.
pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    /// Outgoing edges of `source`. For undirected graphs these are the
    /// incident edges, oriented away from `source`.
    fn out_edges(
        &self,
        source: Vertex,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;

    fn vertices(&self) -> Range<Vertex> {
        0..self.number_of_vertices()
    }

    /// Every edge of the graph, grouped by tail in vertex order.
    fn edges(&self) -> Box<dyn Iterator<Item = WeightedEdge> + Send + '_> {
        Box::new(self.vertices().flat_map(|vertex| self.out_edges(vertex)))
    }

    fn number_of_edges(&self) -> u32 {
        self.vertices()
            .map(|vertex| self.out_edges(vertex).len() as u32)
            .sum::<u32>()
    }

    /// Cost of the cheapest edge from `tail` to `head`, if there is one.
    fn edge_cost(&self, tail: Vertex, head: Vertex) -> Option<Distance> {
        if tail >= self.number_of_vertices() {
            return None;
        }
        self.out_edges(tail)
            .filter(|edge| edge.head() == head)
            .map(|edge| edge.cost())
            .min_by(|a, b| a.total_cmp(b))
    }
}
