mod common;

use std::io::Cursor;

use classic_paths::{
    graphs::{
        directed_graph::DirectedGraph,
        edge::WeightedEdge,
        graph_factory::GraphFactory,
        graph_functions::{
            all_edges, check_non_negative, connected_components, is_connected, path_cost,
            random_graph, reversed,
        },
        matrix_graph::cost_matrix,
        undirected_graph::UndirectedGraph,
        Distance, Graph,
    },
    GraphError,
};
use common::*;
use rand::{rngs::StdRng, SeedableRng};

const GRAPH_FILE: &str = "# three vertices
3
3

0 1 1.5
1 2 2
# closing edge
2 0 -1
";

#[test]
fn read_edge_list() {
    let (number_of_vertices, edges) = GraphFactory::read_edges(Cursor::new(GRAPH_FILE)).unwrap();

    assert_eq!(number_of_vertices, 3);
    assert_eq!(
        edges,
        vec![
            WeightedEdge::new(0, 1, 1.5),
            WeightedEdge::new(1, 2, 2.0),
            WeightedEdge::new(2, 0, -1.0),
        ]
    );
}

#[test]
fn write_then_read_edge_list() {
    let graph = non_negative_graph();
    let mut buffer = Vec::new();
    GraphFactory::write_edges(&mut buffer, graph.number_of_vertices(), &all_edges(&graph)).unwrap();

    let (number_of_vertices, edges) = GraphFactory::read_edges(Cursor::new(buffer)).unwrap();
    let read = DirectedGraph::from_edges(number_of_vertices, &edges).unwrap();
    assert_eq!(all_edges(&read), all_edges(&graph));
}

#[test]
fn graph_file_on_disk() {
    let path = std::env::temp_dir().join(format!("classic_paths_{}.graph", std::process::id()));
    std::fs::write(&path, GRAPH_FILE).unwrap();

    let directed = GraphFactory::directed_from_file(&path).unwrap();
    let undirected = GraphFactory::undirected_from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(directed.number_of_edges(), 3);
    assert_eq!(undirected.number_of_edges(), 6);
    assert_eq!(undirected.undirected_edges().len(), 3);
}

#[test]
fn missing_file() {
    let path = std::env::temp_dir().join("classic_paths_does_not_exist.graph");
    assert!(matches!(
        GraphFactory::directed_from_file(&path),
        Err(GraphError::Io(_))
    ));
}

fn parse_error(input: &str) -> (usize, String) {
    match GraphFactory::read_edges(Cursor::new(input)) {
        Err(GraphError::Parse { line, reason }) => (line, reason),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn malformed_edge_lists() {
    assert_eq!(parse_error("").0, 1);
    assert_eq!(parse_error("3\n").0, 2);
    assert_eq!(parse_error("three\n0\n").0, 1);
    assert_eq!(parse_error("3\n1\n0 x 1\n").0, 3);
    assert_eq!(parse_error("3\n1\n0 1\n").0, 3);
    assert_eq!(parse_error("3\n1\n0 1 2 3\n").0, 3);
    assert_eq!(parse_error("3\n1\n0 1 2\n1 2 3\n").0, 4);

    let (line, reason) = parse_error("3\n2\n0 1 2\n");
    assert_eq!(line, 3);
    assert!(reason.contains("expected 2 edges"));

    let (line, reason) = parse_error("2\n18446744073709551615\n0 1 1.0\n");
    assert_eq!(line, 3);
    assert!(reason.contains("found 1"));
    assert_eq!(parse_error("2\n99999999999999999999999\n").0, 2);
}

#[test]
fn vertex_out_of_range() {
    let edges = [WeightedEdge::new(0, 3, 1.0)];
    assert!(matches!(
        DirectedGraph::from_edges(3, &edges),
        Err(GraphError::InvalidVertex {
            vertex: 3,
            number_of_vertices: 3
        })
    ));
    assert!(matches!(
        UndirectedGraph::from_edges(2, &edges),
        Err(GraphError::InvalidVertex { .. })
    ));
}

#[test]
fn nan_cost_rejected() {
    let edges = [WeightedEdge::new(0, 1, Distance::NAN)];
    assert!(matches!(
        DirectedGraph::from_edges(2, &edges),
        Err(GraphError::InvalidCost { tail: 0, head: 1 })
    ));
}

#[test]
fn directed_parallel_edges() {
    let mut graph = DirectedGraph::new(2);
    assert!(graph.add_edge(&WeightedEdge::new(0, 1, 3.0)).unwrap());
    assert!(!graph.add_edge(&WeightedEdge::new(0, 1, 1.0)).unwrap());
    assert_eq!(graph.get_edge_cost(0, 1), Some(3.0));

    let graph = directed(2, &[(0, 1, 3.0), (0, 1, 1.0), (0, 1, 2.0)]);
    assert_eq!(graph.number_of_edges(), 1);
    assert_eq!(graph.edge_cost(0, 1), Some(1.0));
    assert_eq!(graph.edge_cost(1, 0), None);
}

#[test]
fn undirected_edges_go_both_ways() {
    let mut graph = UndirectedGraph::new(3);
    assert!(graph.add_edge(&WeightedEdge::new(0, 1, 2.0)).unwrap());
    assert!(!graph.add_edge(&WeightedEdge::new(1, 0, 5.0)).unwrap());
    assert!(graph.add_edge(&WeightedEdge::new(2, 2, 1.0)).unwrap());

    assert_eq!(graph.edge_cost(1, 0), Some(2.0));
    assert_eq!(graph.degree(0).unwrap(), 1);
    assert_eq!(graph.degree(2).unwrap(), 1);
    assert!(graph.out_edges(1).all(|edge| edge.tail() == 1));
}

#[test]
fn edges_and_reversal() {
    let graph = non_negative_graph();
    assert_eq!(graph.number_of_edges(), 10);
    assert_eq!(graph.edges().count(), 10);
    assert_eq!(graph.out_edges(3).len(), 3);
    assert_eq!(graph.out_edges(42).len(), 0);

    let reversed = reversed(&graph).unwrap();
    for edge in graph.edges() {
        assert_eq!(reversed.edge_cost(edge.head(), edge.tail()), Some(edge.cost()));
    }
}

#[test]
fn non_negative_check() {
    assert!(check_non_negative(&non_negative_graph()).is_ok());
    assert!(matches!(
        check_non_negative(&negative_cycle_graph()),
        Err(GraphError::NegativeEdgeWeight {
            tail: 2,
            head: 0,
            ..
        })
    ));
}

#[test]
fn dense_cost_matrix() {
    let graph = directed(3, &[(0, 1, 2.0), (1, 1, -1.0), (2, 0, 4.0)]);
    let costs = cost_matrix(&graph);
    let infinity = Distance::INFINITY;

    assert_eq!(
        costs,
        vec![
            vec![0.0, 2.0, infinity],
            vec![infinity, 0.0, infinity],
            vec![4.0, infinity, 0.0],
        ]
    );
}

#[test]
fn components() {
    let graph = undirected(6, &[(0, 1, 1.0), (1, 2, 1.0), (3, 4, 1.0)]);
    let (component, number_of_components) = connected_components(&graph);

    assert_eq!(number_of_components, 3);
    assert_eq!(component, vec![0, 0, 0, 1, 1, 2]);
    assert!(!is_connected(&graph));
    assert!(is_connected(&undirected(2, &[(1, 0, 7.0)])));
}

#[test]
fn cost_along_vertices() {
    let graph = non_negative_graph();
    assert_eq!(path_cost(&graph, &[0, 3, 1, 2]), Some(9.0));
    assert_eq!(path_cost(&graph, &[2]), Some(0.0));
    assert_eq!(path_cost(&graph, &[2, 0]), None);
}

#[test]
fn random_graph_shape() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = random_graph(10, 30, 1.0..5.0, &mut rng).unwrap();

    assert_eq!(graph.number_of_vertices(), 10);
    assert_eq!(graph.number_of_edges(), 30);
    for edge in graph.edges() {
        assert_ne!(edge.tail(), edge.head());
        assert!((1.0..5.0).contains(&edge.cost()));
    }

    let complete = random_graph(4, 100, 1.0..1.0, &mut rng).unwrap();
    assert_eq!(complete.number_of_edges(), 12);
    assert!(complete.edges().all(|edge| edge.cost() == 1.0));
}
