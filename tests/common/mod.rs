#![allow(dead_code)]

use classic_paths::{
    graphs::{
        directed_graph::DirectedGraph, edge::WeightedEdge, undirected_graph::UndirectedGraph,
        Distance, Vertex,
    },
    search::path::Path,
};

pub const EPSILON: Distance = 1e-9;

pub fn assert_close(actual: Distance, expected: Distance) {
    if expected.is_infinite() {
        assert_eq!(actual, expected);
    } else {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }
}

pub fn directed(number_of_vertices: u32, edges: &[(Vertex, Vertex, Distance)]) -> DirectedGraph {
    let edges: Vec<_> = edges
        .iter()
        .map(|&(tail, head, cost)| WeightedEdge::new(tail, head, cost))
        .collect();
    DirectedGraph::from_edges(number_of_vertices, &edges).unwrap()
}

pub fn undirected(number_of_vertices: u32, edges: &[(Vertex, Vertex, Distance)]) -> UndirectedGraph {
    let edges: Vec<_> = edges
        .iter()
        .map(|&(tail, head, cost)| WeightedEdge::new(tail, head, cost))
        .collect();
    UndirectedGraph::from_edges(number_of_vertices, &edges).unwrap()
}

/// s = 0, t = 1, x = 2, y = 3, z = 4
pub fn non_negative_graph() -> DirectedGraph {
    directed(
        5,
        &[
            (0, 1, 10.0),
            (0, 3, 5.0),
            (1, 2, 1.0),
            (1, 3, 2.0),
            (3, 1, 3.0),
            (3, 2, 9.0),
            (3, 4, 2.0),
            (2, 4, 4.0),
            (4, 2, 6.0),
            (4, 0, 7.0),
        ],
    )
}

/// Same naming as [`non_negative_graph`], with negative edges but no
/// negative cycle.
pub fn negative_edge_graph() -> DirectedGraph {
    directed(
        5,
        &[
            (0, 1, 6.0),
            (0, 3, 7.0),
            (1, 2, 5.0),
            (1, 3, 8.0),
            (1, 4, -4.0),
            (2, 1, -2.0),
            (3, 2, -3.0),
            (3, 4, 9.0),
            (4, 0, 2.0),
            (4, 2, 7.0),
        ],
    )
}

/// All-pairs example with negative edges.
pub fn all_pairs_graph() -> DirectedGraph {
    directed(
        5,
        &[
            (0, 1, 3.0),
            (0, 2, 8.0),
            (0, 4, -4.0),
            (1, 3, 1.0),
            (1, 4, 7.0),
            (2, 1, 4.0),
            (3, 0, 2.0),
            (3, 2, -5.0),
            (4, 3, 6.0),
        ],
    )
}

pub fn all_pairs_distances() -> Vec<Vec<Distance>> {
    vec![
        vec![0.0, 1.0, -3.0, 2.0, -4.0],
        vec![3.0, 0.0, -4.0, 1.0, -1.0],
        vec![7.0, 4.0, 0.0, 5.0, 3.0],
        vec![2.0, -1.0, -5.0, 0.0, -2.0],
        vec![8.0, 5.0, 1.0, 6.0, 0.0],
    ]
}

pub fn negative_cycle_graph() -> DirectedGraph {
    directed(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, -3.0)])
}

/// Sum of the recovered edge costs of `path`.
pub fn edge_cost_sum(path: &Path) -> Distance {
    path.edges.iter().map(|edge| edge.cost()).sum()
}
