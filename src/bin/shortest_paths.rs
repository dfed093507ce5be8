use std::{
    error::Error,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path as FilePath, PathBuf},
};

use ahash::HashSet;
use clap::{Parser, ValueEnum};
use classic_paths::{
    graphs::{
        directed_graph::DirectedGraph, edge::WeightedEdge, graph_factory::GraphFactory,
        Distance, Graph, Vertex,
    },
    search::{
        astar::astar, bellman_ford::bellman_ford,
        collections::all_pairs_data::AllPairsShortestPaths, dijkstra::dijkstra_with_queue,
        floyd_warshall::floyd_warshall_graph, johnson::johnson, path::Path, ZeroHeuristic,
    },
    queue::heap_queue::HeapQueue,
    spanning_tree::prim::prim,
    utility::{get_progressbar, init_tracing},
};
use indicatif::ProgressIterator;
use serde::Serialize;
use tracing::info;

#[derive(Debug, ValueEnum, Clone, Copy)]
enum Algorithm {
    Dijkstra,
    BellmanFord,
    FloydWarshall,
    Johnson,
    /// Dijkstra from every vertex
    AllDijkstra,
    Astar,
    /// Minimum spanning tree; reads the graph as undirected
    Prim,
}

/// Runs one of the shortest path or spanning tree algorithms on a graph
/// file and writes the result as JSON, or as bincode if the output path
/// ends in `.bincode`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph file: vertex count, edge count, then one `tail head cost` per line
    #[arg(short, long)]
    graph: PathBuf,
    #[arg(short, long, value_enum)]
    algorithm: Algorithm,
    /// Source vertex of single-source searches and path queries
    #[arg(short, long, default_value = "0")]
    source: Vertex,
    /// Reconstruct the path from the source to this vertex
    #[arg(short, long)]
    target: Option<Vertex>,
    /// Goal vertices of the A* search
    #[arg(long, value_delimiter = ',')]
    goals: Vec<Vertex>,
    /// Output file; stdout if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct SingleSourceReport {
    source: Vertex,
    /// `None` for unreachable vertices
    costs: Vec<Option<Distance>>,
    negative_cycle: Option<Vec<WeightedEdge>>,
    path: Option<Path>,
}

#[derive(Serialize)]
struct AllPairsReport {
    costs: Vec<Vec<Option<Distance>>>,
    path: Option<Path>,
}

#[derive(Serialize)]
struct AStarReport {
    source: Vertex,
    reached_goal: Vertex,
    cost: Distance,
    path: Path,
}

#[derive(Serialize)]
struct SpanningTreeReport {
    cost: Distance,
    edges: Vec<WeightedEdge>,
}

fn finite(distance: Distance) -> Option<Distance> {
    distance.is_finite().then_some(distance)
}

fn all_pairs_report(
    all_pairs: &AllPairsShortestPaths,
    source: Vertex,
    target: Option<Vertex>,
) -> classic_paths::Result<AllPairsReport> {
    let costs = all_pairs
        .distances()
        .iter()
        .map(|row| row.iter().copied().map(finite).collect())
        .collect();
    let path = target
        .map(|target| all_pairs.path(source, target))
        .transpose()?;
    Ok(AllPairsReport { costs, path })
}

fn all_dijkstra(graph: &DirectedGraph) -> classic_paths::Result<AllPairsShortestPaths> {
    let mut queue = HeapQueue::new(graph.number_of_vertices());
    let mut distances = Vec::new();
    let mut predecessors = Vec::new();

    for source in graph.vertices().progress_with(get_progressbar(
        "Dijkstra from every vertex",
        graph.number_of_vertices() as u64,
    )) {
        let tree = dijkstra_with_queue(graph, source, &mut queue)?;
        distances.push(tree.distances().to_vec());
        predecessors.push(tree.predecessors().to_vec());
    }

    Ok(AllPairsShortestPaths::new(distances, predecessors))
}

fn write_report<T: Serialize>(report: &T, output: Option<&FilePath>) -> Result<(), Box<dyn Error>> {
    match output {
        Some(path) if path.extension().is_some_and(|extension| extension == "bincode") => {
            let writer = BufWriter::new(File::create(path)?);
            bincode::serialize_into(writer, report)?;
        }
        Some(path) => {
            let writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(writer, report)?;
        }
        None => {
            let mut writer = io::stdout().lock();
            serde_json::to_writer_pretty(&mut writer, report)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn load_directed(path: &FilePath) -> classic_paths::Result<DirectedGraph> {
    let graph = GraphFactory::directed_from_file(path)?;
    info!(
        number_of_vertices = graph.number_of_vertices(),
        number_of_edges = graph.number_of_edges(),
        "graph loaded"
    );
    Ok(graph)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);
    let output = args.output.as_deref();

    match args.algorithm {
        Algorithm::Dijkstra | Algorithm::BellmanFord => {
            let graph = load_directed(&args.graph)?;
            let (tree, negative_cycle) = if let Algorithm::Dijkstra = args.algorithm {
                let mut queue = HeapQueue::new(graph.number_of_vertices());
                (dijkstra_with_queue(&graph, args.source, &mut queue)?, None)
            } else {
                let search = bellman_ford(&graph, args.source)?;
                let negative_cycle = search.negative_cycle().map(|cycle| cycle.to_vec());
                (search.tree().clone(), negative_cycle)
            };

            let path = match args.target {
                Some(target) if negative_cycle.is_none() => Some(tree.path(target)?),
                _ => None,
            };
            let report = SingleSourceReport {
                source: args.source,
                costs: tree.distances().iter().copied().map(finite).collect(),
                negative_cycle,
                path,
            };
            write_report(&report, output)
        }
        Algorithm::FloydWarshall => {
            let all_pairs = floyd_warshall_graph(&load_directed(&args.graph)?)?;
            write_report(&all_pairs_report(&all_pairs, args.source, args.target)?, output)
        }
        Algorithm::Johnson => {
            let all_pairs = johnson(&load_directed(&args.graph)?)?;
            write_report(&all_pairs_report(&all_pairs, args.source, args.target)?, output)
        }
        Algorithm::AllDijkstra => {
            let all_pairs = all_dijkstra(&load_directed(&args.graph)?)?;
            write_report(&all_pairs_report(&all_pairs, args.source, args.target)?, output)
        }
        Algorithm::Astar => {
            let goals: HashSet<Vertex> = args.goals.iter().copied().collect();
            if goals.is_empty() {
                return Err("a* needs at least one goal, see --goals".into());
            }
            let graph = load_directed(&args.graph)?;
            let search = astar(&graph, args.source, &goals, &ZeroHeuristic {})?;
            let report = AStarReport {
                source: args.source,
                reached_goal: search.reached_goal(),
                cost: search.cost(),
                path: search.path()?,
            };
            write_report(&report, output)
        }
        Algorithm::Prim => {
            let graph = GraphFactory::undirected_from_file(&args.graph)?;
            let tree = prim(&graph)?;
            info!(cost = tree.cost(), "spanning tree computed");
            let report = SpanningTreeReport {
                cost: tree.cost(),
                edges: tree.edges(),
            };
            write_report(&report, output)
        }
    }
}
