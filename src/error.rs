//! Error type shared by every graph container and search engine.

use thiserror::Error;

use crate::{
    graphs::{Distance, Vertex},
    queue::QueueError,
};

/// Errors reported by graph construction, the search engines and their
/// result accessors.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("vertex {vertex} does not belong to a graph with {number_of_vertices} vertices")]
    InvalidVertex {
        vertex: Vertex,
        number_of_vertices: u32,
    },

    #[error("edge ({tail}, {head}) has negative cost {cost}")]
    NegativeEdgeWeight {
        tail: Vertex,
        head: Vertex,
        cost: Distance,
    },

    #[error("graph contains a negative cycle")]
    NegativeCycle,

    /// Returned by the spanning tree. Queries for an unreachable vertex
    /// report [`GraphError::NoPath`] instead.
    #[error("graph is not connected ({components} connected components)")]
    Disconnected { components: u32 },

    #[error("no path from {from} to {to}")]
    NoPath { from: Vertex, to: Vertex },

    #[error("no goal vertex is reachable from {start}")]
    GoalUnreachable { start: Vertex },

    #[error("cost matrix is not square: row {row} has {found} entries, expected {expected}")]
    MalformedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("edge ({tail}, {head}) has no numeric cost")]
    InvalidCost { tail: Vertex, head: Vertex },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("priority queue misuse: {0}")]
    Queue(#[from] QueueError),
}

pub type Result<T> = std::result::Result<T, GraphError>;

/// Fails with [`GraphError::InvalidVertex`] unless `vertex` lies in
/// `[0, number_of_vertices)`.
pub fn check_vertex(vertex: Vertex, number_of_vertices: u32) -> Result<()> {
    if vertex >= number_of_vertices {
        return Err(GraphError::InvalidVertex {
            vertex,
            number_of_vertices,
        });
    }
    Ok(())
}
