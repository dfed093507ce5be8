use std::ops::Range;

use itertools::Itertools;
use rand::Rng;

use super::{
    directed_graph::DirectedGraph, edge::WeightedEdge, undirected_graph::UndirectedGraph,
    Distance, Graph, Vertex,
};
use crate::error::{GraphError, Result};

pub fn all_edges(graph: &dyn Graph) -> Vec<WeightedEdge> {
    graph.edges().collect()
}

/// Fails with [`GraphError::NegativeEdgeWeight`] on the first edge with a
/// negative cost.
pub fn check_non_negative(graph: &dyn Graph) -> Result<()> {
    match graph.edges().find(|edge| edge.cost() < 0.0) {
        Some(edge) => Err(GraphError::NegativeEdgeWeight {
            tail: edge.tail(),
            head: edge.head(),
            cost: edge.cost(),
        }),
        None => Ok(()),
    }
}

/// Copy of `graph` with every edge flipped.
pub fn reversed(graph: &dyn Graph) -> Result<DirectedGraph> {
    let edges = graph.edges().map(|edge| edge.reversed()).collect_vec();
    DirectedGraph::from_edges(graph.number_of_vertices(), &edges)
}

/// Connected components of the unweighted view of `graph`.
///
/// Returns the component id of every vertex together with the number of
/// components. Ids are assigned in order of the smallest vertex of each
/// component.
pub fn connected_components(graph: &UndirectedGraph) -> (Vec<u32>, u32) {
    let number_of_vertices = graph.number_of_vertices() as usize;
    let mut component = vec![u32::MAX; number_of_vertices];
    let mut number_of_components = 0;
    let mut stack = Vec::new();

    for root in graph.vertices() {
        if component[root as usize] != u32::MAX {
            continue;
        }

        component[root as usize] = number_of_components;
        stack.push(root);
        while let Some(vertex) = stack.pop() {
            for edge in graph.out_edges(vertex) {
                if component[edge.head() as usize] == u32::MAX {
                    component[edge.head() as usize] = number_of_components;
                    stack.push(edge.head());
                }
            }
        }

        number_of_components += 1;
    }

    (component, number_of_components)
}

pub fn is_connected(graph: &UndirectedGraph) -> bool {
    connected_components(graph).1 == 1
}

/// Random directed graph with `number_of_edges` distinct, loop free edges
/// whose costs are drawn uniformly from `costs`.
///
/// `number_of_edges` is capped at `n * (n - 1)`.
pub fn random_graph<R: Rng>(
    number_of_vertices: u32,
    number_of_edges: u32,
    costs: Range<Distance>,
    rng: &mut R,
) -> Result<DirectedGraph> {
    let mut graph = DirectedGraph::new(number_of_vertices);
    let n = number_of_vertices as u64;
    let max_edges = n * n.saturating_sub(1);
    let number_of_edges = (number_of_edges as u64).min(max_edges);

    while (graph.number_of_edges() as u64) < number_of_edges {
        let tail = rng.gen_range(0..number_of_vertices);
        let head = rng.gen_range(0..number_of_vertices);
        if tail == head {
            continue;
        }
        let cost = if costs.is_empty() {
            costs.start
        } else {
            rng.gen_range(costs.clone())
        };
        graph.add_edge(&WeightedEdge::new(tail, head, cost))?;
    }

    Ok(graph)
}

/// Sum of the edge costs along `vertices`, or `None` if two consecutive
/// vertices are not joined by an edge.
pub fn path_cost(graph: &dyn Graph, vertices: &[Vertex]) -> Option<Distance> {
    vertices
        .iter()
        .tuple_windows()
        .map(|(&tail, &head)| graph.edge_cost(tail, head))
        .sum()
}
