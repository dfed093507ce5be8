use tracing::debug;

use super::collections::all_pairs_data::AllPairsShortestPaths;
use crate::{
    error::{GraphError, Result},
    graphs::{
        matrix_graph::{cost_matrix, CostMatrix},
        Distance, Graph, Vertex,
    },
};

/// All-pairs shortest paths by dynamic programming over a cost matrix.
///
/// `costs` must be square with a zero diagonal and `+inf` for missing
/// edges. The matrix is copied, the caller's copy is never modified. The
/// result is unspecified if the matrix contains a negative cycle.
#[tracing::instrument(skip(costs), fields(number_of_vertices = costs.len()))]
pub fn floyd_warshall(costs: &[Vec<Distance>]) -> Result<AllPairsShortestPaths> {
    let number_of_vertices = costs.len();
    for (row_index, row) in costs.iter().enumerate() {
        if row.len() != number_of_vertices {
            return Err(GraphError::MalformedMatrix {
                row: row_index,
                expected: number_of_vertices,
                found: row.len(),
            });
        }
        if let Some(column) = row.iter().position(|cost| cost.is_nan()) {
            return Err(GraphError::InvalidCost {
                tail: row_index as Vertex,
                head: column as Vertex,
            });
        }
    }

    let mut distances: CostMatrix = costs.to_vec();
    let mut predecessors: Vec<Vec<Option<Vertex>>> = distances
        .iter()
        .enumerate()
        .map(|(tail, row)| {
            row.iter()
                .enumerate()
                .map(|(head, cost)| (tail != head && cost.is_finite()).then_some(tail as Vertex))
                .collect()
        })
        .collect();

    for via in 0..number_of_vertices {
        for tail in 0..number_of_vertices {
            let to_via = distances[tail][via];
            if to_via == Distance::INFINITY {
                continue;
            }
            for head in 0..number_of_vertices {
                let alternative_distance = to_via + distances[via][head];
                if alternative_distance < distances[tail][head] {
                    distances[tail][head] = alternative_distance;
                    predecessors[tail][head] = predecessors[via][head];
                }
            }
        }
    }

    debug!(number_of_vertices, "floyd-warshall finished");
    Ok(AllPairsShortestPaths::new(distances, predecessors))
}

/// [`floyd_warshall`] on the cost matrix of `graph`.
pub fn floyd_warshall_graph(graph: &dyn Graph) -> Result<AllPairsShortestPaths> {
    floyd_warshall(&cost_matrix(graph))
}
