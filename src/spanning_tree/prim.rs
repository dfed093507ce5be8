use tracing::debug;

use super::SpanningTree;
use crate::{
    error::{GraphError, Result},
    graphs::{
        graph_functions::connected_components, undirected_graph::UndirectedGraph, Distance,
        Graph, Vertex,
    },
    queue::{heap_queue::HeapQueue, DecreaseKeyQueue, QueueEntry},
};

const ROOT: Vertex = 0;

/// Minimum spanning tree grown from vertex 0.
///
/// `key[v]` is the cost of the cheapest known edge joining `v` to the tree;
/// the queue hands out the vertex with the smallest key next. Fails with
/// `Disconnected` if the graph does not consist of exactly one connected
/// component. Negative edge costs are fine.
#[tracing::instrument(skip(graph), fields(number_of_vertices = graph.number_of_vertices()))]
pub fn prim(graph: &UndirectedGraph) -> Result<SpanningTree> {
    let mut queue = HeapQueue::new(graph.number_of_vertices());
    prim_with_queue(graph, &mut queue)
}

pub fn prim_with_queue(
    graph: &UndirectedGraph,
    queue: &mut dyn DecreaseKeyQueue,
) -> Result<SpanningTree> {
    let (_, components) = connected_components(graph);
    if components != 1 {
        return Err(GraphError::Disconnected { components });
    }

    let number_of_vertices = graph.number_of_vertices() as usize;
    let mut keys = vec![Distance::INFINITY; number_of_vertices];
    let mut predecessors = vec![None; number_of_vertices];
    keys[ROOT as usize] = 0.0;

    queue.clear();
    for vertex in graph.vertices() {
        queue.insert(vertex, keys[vertex as usize])?;
    }

    while let Some(QueueEntry { vertex: tail, .. }) = queue.extract_min() {
        for edge in graph.out_edges(tail) {
            let head = edge.head();
            if queue.contains(head) && edge.cost() < keys[head as usize] {
                keys[head as usize] = edge.cost();
                predecessors[head as usize] = Some(tail);
                queue.decrease_key(head, edge.cost())?;
            }
        }
    }

    let tree = SpanningTree { predecessors, keys };
    debug!(cost = tree.cost(), "prim finished");
    Ok(tree)
}
