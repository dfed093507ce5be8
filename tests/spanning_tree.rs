mod common;

use classic_paths::{
    graphs::{edge::WeightedEdge, Graph},
    queue::keyed_queue::KeyedQueue,
    spanning_tree::prim::{prim, prim_with_queue},
    GraphError,
};
use common::*;

#[test]
fn prim_square_with_diagonal() {
    let graph = undirected(
        4,
        &[
            (0, 1, 1.0),
            (1, 2, 2.0),
            (2, 3, 1.0),
            (3, 0, 4.0),
            (0, 2, 3.0),
        ],
    );
    let tree = prim(&graph).unwrap();

    assert_close(tree.cost(), 4.0);
    let edges: Vec<_> = tree
        .edges()
        .iter()
        .map(|edge| (edge.tail(), edge.head()))
        .collect();
    assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3)]);
    assert_eq!(tree.predecessor(0).unwrap(), None);
    assert_eq!(tree.number_of_vertices(), 4);
}

#[test]
fn prim_tree_spans_graph() {
    let graph = undirected(
        6,
        &[
            (0, 1, 4.0),
            (0, 2, 4.0),
            (1, 2, 2.0),
            (2, 3, 3.0),
            (2, 5, 2.0),
            (2, 4, 4.0),
            (3, 4, 3.0),
            (5, 4, 3.0),
        ],
    );
    let tree = prim(&graph).unwrap();

    assert_close(tree.cost(), 14.0);
    assert_eq!(tree.edges().len(), graph.number_of_vertices() as usize - 1);
    for edge in tree.edges() {
        assert_close(edge.cost(), graph.edge_cost(edge.tail(), edge.head()).unwrap());
    }
}

#[test]
fn prim_negative_costs() {
    let graph = undirected(3, &[(0, 1, -2.0), (1, 2, 5.0), (0, 2, -1.0)]);
    let tree = prim(&graph).unwrap();
    assert_close(tree.cost(), -3.0);
}

#[test]
fn prim_single_vertex() {
    let graph = undirected(1, &[]);
    let tree = prim(&graph).unwrap();

    assert!(tree.edges().is_empty());
    assert_close(tree.cost(), 0.0);
}

#[test]
fn prim_rejects_disconnected_graph() {
    let graph = undirected(4, &[(0, 1, 1.0), (2, 3, 1.0)]);
    assert!(matches!(
        prim(&graph),
        Err(GraphError::Disconnected { components: 2 })
    ));

    let graph = undirected(0, &[]);
    assert!(matches!(
        prim(&graph),
        Err(GraphError::Disconnected { components: 0 })
    ));
}

#[test]
fn prim_keyed_queue() {
    let graph = undirected(4, &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 1.0), (0, 3, 4.0)]);
    let mut queue = KeyedQueue::new();
    let tree = prim_with_queue(&graph, &mut queue).unwrap();

    assert_close(tree.cost(), 4.0);
    assert_eq!(
        tree.edges(),
        vec![
            WeightedEdge::new(0, 1, 1.0),
            WeightedEdge::new(1, 2, 2.0),
            WeightedEdge::new(2, 3, 1.0),
        ]
    );
}
