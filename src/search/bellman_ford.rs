use tracing::{debug, warn};

use super::{
    collections::dijkstra_data::{DijkstraData, ShortestPathTree},
    path::Path,
};
use crate::{
    error::{check_vertex, Result},
    graphs::{edge::WeightedEdge, graph_functions::all_edges, Distance, Graph, Vertex},
};

/// Result of a Bellman-Ford run.
///
/// If a negative cycle is reachable from the source the labels only
/// reflect the relaxations that were performed and are not shortest path
/// costs. Check [`BellmanFord::has_negative_cycle`] before trusting them.
#[derive(Clone, Debug)]
pub struct BellmanFord {
    tree: ShortestPathTree,
    has_negative_cycle: bool,
    negative_cycle: Option<Vec<WeightedEdge>>,
}

/// Shortest paths from `source`, tolerating negative edge costs.
///
/// Runs `n - 1` rounds that relax every edge once, then one more pass that
/// looks for an edge that could still be relaxed. Such an edge proves a
/// negative cycle reachable from the source.
#[tracing::instrument(skip(graph), fields(number_of_vertices = graph.number_of_vertices()))]
pub fn bellman_ford(graph: &dyn Graph, source: Vertex) -> Result<BellmanFord> {
    let number_of_vertices = graph.number_of_vertices();
    check_vertex(source, number_of_vertices)?;

    let edges = all_edges(graph);
    let mut data = DijkstraData::new(number_of_vertices, source);

    for _ in 1..number_of_vertices {
        for edge in &edges {
            data.relax(edge.tail(), edge.head(), edge.cost());
        }
    }

    let has_negative_cycle = edges
        .iter()
        .any(|edge| data.can_relax(edge.tail(), edge.head(), edge.cost()));

    let negative_cycle = if has_negative_cycle {
        let cycle = find_negative_cycle(graph, &edges, &data);
        warn!(
            source,
            cycle_length = cycle.as_ref().map(|cycle| cycle.len()),
            "negative cycle reachable from source"
        );
        cycle
    } else {
        None
    };

    debug!(
        source,
        number_of_edges = edges.len(),
        has_negative_cycle,
        "bellman-ford finished"
    );

    Ok(BellmanFord {
        tree: data.into_tree(),
        has_negative_cycle,
        negative_cycle,
    })
}

/// Performs one more relaxation round on a scratch copy of the labels. A
/// vertex improved in this round has a negative cycle among its
/// predecessors, and stepping back `n` times from it lands on that cycle.
fn find_negative_cycle(
    graph: &dyn Graph,
    edges: &[WeightedEdge],
    data: &DijkstraData,
) -> Option<Vec<WeightedEdge>> {
    let number_of_vertices = graph.number_of_vertices();
    let mut distances: Vec<Distance> = graph.vertices().map(|vertex| data.distance(vertex)).collect();
    let mut predecessors = data.predecessors().to_vec();

    let mut last_improved = None;
    for edge in edges {
        let alternative_distance = distances[edge.tail() as usize] + edge.cost();
        if distances[edge.head() as usize] > alternative_distance {
            distances[edge.head() as usize] = alternative_distance;
            predecessors[edge.head() as usize] = Some(edge.tail());
            last_improved = Some(edge.head());
        }
    }

    let mut on_cycle = last_improved?;
    for _ in 0..number_of_vertices {
        on_cycle = predecessors[on_cycle as usize]?;
    }

    // Collect the cycle backwards, then flip it into edge order.
    let mut cycle = Vec::new();
    let mut head = on_cycle;
    loop {
        let tail = predecessors[head as usize]?;
        cycle.push(WeightedEdge::new(tail, head, graph.edge_cost(tail, head)?));
        head = tail;
        if head == on_cycle || cycle.len() > number_of_vertices as usize {
            break;
        }
    }
    if head != on_cycle {
        return None;
    }
    cycle.reverse();

    Some(cycle)
}

impl BellmanFord {
    pub fn has_negative_cycle(&self) -> bool {
        self.has_negative_cycle
    }

    /// Edges `<u, v>, <v, w>, ..., <x, u>` of a negative cycle reachable
    /// from the source, if there is one.
    pub fn negative_cycle(&self) -> Option<&[WeightedEdge]> {
        self.negative_cycle.as_deref()
    }

    pub fn tree(&self) -> &ShortestPathTree {
        &self.tree
    }

    pub fn source(&self) -> Vertex {
        self.tree.source()
    }

    pub fn distance(&self, vertex: Vertex) -> Result<Distance> {
        self.tree.distance(vertex)
    }

    pub fn has_path(&self, vertex: Vertex) -> Result<bool> {
        self.tree.has_path(vertex)
    }

    pub fn cost(&self, vertex: Vertex) -> Result<Distance> {
        self.tree.cost(vertex)
    }

    pub fn predecessor(&self, vertex: Vertex) -> Result<Option<Vertex>> {
        self.tree.predecessor(vertex)
    }

    pub fn path(&self, vertex: Vertex) -> Result<Path> {
        self.tree.path(vertex)
    }
}
