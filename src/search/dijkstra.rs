use tracing::debug;

use super::collections::dijkstra_data::{DijkstraData, ShortestPathTree};
use crate::{
    error::{check_vertex, Result},
    graphs::{graph_functions::check_non_negative, Graph, Vertex},
    queue::{heap_queue::HeapQueue, DecreaseKeyQueue, QueueEntry},
};

/// Shortest paths from `source` to every vertex of a graph without
/// negative edge costs.
///
/// Fails with `InvalidVertex` for a source outside the graph and with
/// `NegativeEdgeWeight` if any edge is negative; both are checked before
/// the search starts.
#[tracing::instrument(skip(graph), fields(number_of_vertices = graph.number_of_vertices()))]
pub fn dijkstra(graph: &dyn Graph, source: Vertex) -> Result<ShortestPathTree> {
    let mut queue = HeapQueue::new(graph.number_of_vertices());
    dijkstra_with_queue(graph, source, &mut queue)
}

/// Same as [`dijkstra`] with a caller supplied queue. The queue is cleared
/// before use, so one queue can serve many searches in a row.
pub fn dijkstra_with_queue(
    graph: &dyn Graph,
    source: Vertex,
    queue: &mut dyn DecreaseKeyQueue,
) -> Result<ShortestPathTree> {
    check_vertex(source, graph.number_of_vertices())?;
    check_non_negative(graph)?;

    let mut data = DijkstraData::new(graph.number_of_vertices(), source);

    queue.clear();
    for vertex in graph.vertices() {
        queue.insert(vertex, data.distance(vertex))?;
    }

    while let Some(QueueEntry { vertex: tail, .. }) = queue.extract_min() {
        for edge in graph.out_edges(tail) {
            if data.relax(tail, edge.head(), edge.cost()) {
                queue.decrease_key(edge.head(), data.distance(edge.head()))?;
            }
        }
    }

    let tree = data.into_tree();
    debug!(
        source,
        reached = tree.distances().iter().filter(|distance| distance.is_finite()).count(),
        "dijkstra finished"
    );
    Ok(tree)
}
