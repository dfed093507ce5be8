use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
    str::FromStr,
};

use tracing::debug;

use super::{
    directed_graph::DirectedGraph, edge::WeightedEdge, undirected_graph::UndirectedGraph, Vertex,
};
use crate::error::{GraphError, Result};

const PREALLOCATED_EDGES: usize = 4096;

/// Reads and writes graphs in the edge list format
///
/// ```text
/// # comment lines and blank lines are skipped
/// <number of vertices>
/// <number of edges>
/// <tail> <head> <cost>
/// ...
/// ```
#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    pub fn directed_from_file(path: &Path) -> Result<DirectedGraph> {
        let reader = BufReader::new(File::open(path)?);
        let (number_of_vertices, edges) = Self::read_edges(reader)?;
        debug!(
            path = %path.display(),
            number_of_vertices,
            number_of_edges = edges.len(),
            "read directed graph"
        );
        DirectedGraph::from_edges(number_of_vertices, &edges)
    }

    pub fn undirected_from_file(path: &Path) -> Result<UndirectedGraph> {
        let reader = BufReader::new(File::open(path)?);
        let (number_of_vertices, edges) = Self::read_edges(reader)?;
        debug!(
            path = %path.display(),
            number_of_vertices,
            number_of_edges = edges.len(),
            "read undirected graph"
        );
        UndirectedGraph::from_edges(number_of_vertices, &edges)
    }

    /// Parses the vertex count and the edge list. Vertex ranges are checked
    /// later, when the edges are inserted into a graph.
    ///
    /// The vertex count is returned as read. Building a graph from it
    /// allocates one adjacency list per vertex, so callers reading files
    /// from untrusted sources should bound it first.
    pub fn read_edges<R: BufRead>(reader: R) -> Result<(u32, Vec<WeightedEdge>)> {
        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line))
            .filter(|(_, line)| match line {
                Ok(line) => {
                    let line = line.trim();
                    !line.is_empty() && !line.starts_with('#')
                }
                Err(_) => true,
            });

        let (line_number, line) = lines.next().ok_or_else(|| GraphError::Parse {
            line: 1,
            reason: "missing number of vertices".to_string(),
        })?;
        let number_of_vertices: u32 = parse_value(line_number, line?.trim(), "number of vertices")?;

        let (line_number, line) = lines.next().ok_or_else(|| GraphError::Parse {
            line: line_number + 1,
            reason: "missing number of edges".to_string(),
        })?;
        let number_of_edges: usize = parse_value(line_number, line?.trim(), "number of edges")?;

        // The announced count is untrusted until the edges are counted.
        let mut edges = Vec::with_capacity(number_of_edges.min(PREALLOCATED_EDGES));
        let mut last_line_number = line_number;
        for (line_number, line) in lines {
            let line = line?;
            if edges.len() == number_of_edges {
                return Err(GraphError::Parse {
                    line: line_number,
                    reason: format!("more than the announced {} edges", number_of_edges),
                });
            }

            // tail head cost
            let mut values = line.split_whitespace();
            let tail: Vertex = parse_value(line_number, values.next().unwrap_or(""), "tail")?;
            let head: Vertex = parse_value(line_number, values.next().unwrap_or(""), "head")?;
            let cost: f64 = parse_value(line_number, values.next().unwrap_or(""), "cost")?;
            if values.next().is_some() {
                return Err(GraphError::Parse {
                    line: line_number,
                    reason: "trailing values after edge cost".to_string(),
                });
            }

            edges.push(WeightedEdge::new(tail, head, cost));
            last_line_number = line_number;
        }

        if edges.len() != number_of_edges {
            return Err(GraphError::Parse {
                line: last_line_number,
                reason: format!("expected {} edges, found {}", number_of_edges, edges.len()),
            });
        }

        Ok((number_of_vertices, edges))
    }

    pub fn write_edges<W: Write>(
        writer: W,
        number_of_vertices: u32,
        edges: &[WeightedEdge],
    ) -> Result<()> {
        let mut writer = BufWriter::new(writer);
        writeln!(writer, "{}", number_of_vertices)?;
        writeln!(writer, "{}", edges.len())?;
        for edge in edges {
            writeln!(writer, "{} {} {}", edge.tail(), edge.head(), edge.cost())?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn write_to_file(path: &Path, number_of_vertices: u32, edges: &[WeightedEdge]) -> Result<()> {
        Self::write_edges(File::create(path)?, number_of_vertices, edges)
    }
}

fn parse_value<T: FromStr>(line: usize, value: &str, what: &str) -> Result<T> {
    value.parse().map_err(|_| GraphError::Parse {
        line,
        reason: format!("unable to parse {} from {:?}", what, value),
    })
}
