use std::{error::Error, path::PathBuf};

use clap::Parser;
use classic_paths::{
    graphs::{
        graph_factory::GraphFactory,
        graph_functions::{all_edges, random_graph},
        Graph,
    },
    utility::init_tracing,
};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

/// Writes a random directed graph in the edge list format read by
/// `shortest_paths`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path where the graph will be saved
    #[arg(short, long)]
    graph: PathBuf,
    #[arg(short, long, default_value = "100")]
    number_of_vertices: u32,
    /// Capped at n * (n - 1)
    #[arg(short = 'm', long, default_value = "500")]
    number_of_edges: u32,
    /// Smallest edge cost; negative values may produce negative cycles
    #[arg(long, default_value = "1.0", allow_hyphen_values = true)]
    min_cost: f64,
    #[arg(long, default_value = "100.0", allow_hyphen_values = true)]
    max_cost: f64,
    #[arg(short, long, default_value = "0")]
    seed: u64,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut rng = StdRng::seed_from_u64(args.seed);
    let graph = random_graph(
        args.number_of_vertices,
        args.number_of_edges,
        args.min_cost..args.max_cost,
        &mut rng,
    )?;

    GraphFactory::write_to_file(&args.graph, graph.number_of_vertices(), &all_edges(&graph))?;
    info!(
        path = %args.graph.display(),
        number_of_vertices = graph.number_of_vertices(),
        number_of_edges = graph.number_of_edges(),
        "graph written"
    );

    Ok(())
}
