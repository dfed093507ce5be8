use itertools::Itertools;
use tracing::{debug, trace, warn};

use super::{
    bellman_ford::bellman_ford, collections::all_pairs_data::AllPairsShortestPaths,
    dijkstra::dijkstra_with_queue,
};
use crate::{
    error::{GraphError, Result},
    graphs::{directed_graph::DirectedGraph, edge::WeightedEdge, Distance, Graph, Vertex},
    queue::heap_queue::HeapQueue,
};

/// All-pairs shortest paths for graphs that may have negative edges but no
/// negative cycle.
///
/// A Bellman-Ford search from an extra vertex joined to every vertex by a
/// zero cost edge yields potentials `h`. Reweighting each edge to
/// `w(u, v) + h(u) - h(v)` makes all costs non-negative, so Dijkstra can
/// run from every vertex; `d(u, v) = d'(u, v) + h(v) - h(u)` recovers the
/// true costs. Fails with `NegativeCycle` if the graph has one.
#[tracing::instrument(skip(graph), fields(number_of_vertices = graph.number_of_vertices()))]
pub fn johnson(graph: &dyn Graph) -> Result<AllPairsShortestPaths> {
    let number_of_vertices = graph.number_of_vertices();

    let potentials = vertex_potentials(graph)?;

    let reweighted_edges = graph
        .edges()
        .map(|edge| {
            let cost = edge.cost() + potentials[edge.tail() as usize]
                - potentials[edge.head() as usize];
            // Rounding in the potentials may push a zero cost just below
            // zero, which would break Dijkstra's precondition.
            edge.with_cost(cost.max(0.0))
        })
        .collect_vec();
    let reweighted = DirectedGraph::from_edges(number_of_vertices, &reweighted_edges)?;

    let mut distances = Vec::with_capacity(number_of_vertices as usize);
    let mut predecessors = Vec::with_capacity(number_of_vertices as usize);
    let mut queue = HeapQueue::new(number_of_vertices);

    for source in graph.vertices() {
        trace!(source, "dijkstra on reweighted graph");
        let tree = dijkstra_with_queue(&reweighted, source, &mut queue)?;

        let row = tree
            .distances()
            .iter()
            .enumerate()
            .map(|(target, &reweighted_distance)| {
                if target as Vertex == source {
                    0.0
                } else if reweighted_distance == Distance::INFINITY {
                    Distance::INFINITY
                } else {
                    reweighted_distance + potentials[target] - potentials[source as usize]
                }
            })
            .collect_vec();

        distances.push(row);
        predecessors.push(tree.predecessors().to_vec());
    }

    debug!(number_of_vertices, "johnson finished");
    Ok(AllPairsShortestPaths::new(distances, predecessors))
}

/// Shortest path costs from an auxiliary vertex `n` that has a zero cost
/// edge to every vertex of `graph`.
fn vertex_potentials(graph: &dyn Graph) -> Result<Vec<Distance>> {
    let number_of_vertices = graph.number_of_vertices();
    let extra_vertex = number_of_vertices;

    let augmented_edges = graph
        .edges()
        .chain(
            graph
                .vertices()
                .map(|vertex| WeightedEdge::new(extra_vertex, vertex, 0.0)),
        )
        .collect_vec();
    let augmented = DirectedGraph::from_edges(number_of_vertices + 1, &augmented_edges)?;

    let search = bellman_ford(&augmented, extra_vertex)?;
    if search.has_negative_cycle() {
        warn!(
            cycle = ?search.negative_cycle(),
            "graph has a negative cycle, aborting johnson"
        );
        return Err(GraphError::NegativeCycle);
    }

    let mut potentials = search.tree().distances().to_vec();
    potentials.truncate(number_of_vertices as usize);
    Ok(potentials)
}
