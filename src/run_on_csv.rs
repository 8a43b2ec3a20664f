use anyhow::{Context, Result};
use clap::Parser;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wayfinder::{shortest_path, WeightMatrix};

#[derive(Parser, Debug)]
#[command(name = "csv")]
#[command(about = "Build a weight matrix from a CSV with from,to,weight per row and time shortest-path queries over it.", long_about = None)]
struct Cli {
    /// Path to the .csv file
    #[arg(short, long)]
    csv: String,

    /// Number of runs. Run i queries source i % n to destination (n - 1 - i) % n.
    #[arg(short, long)]
    num_runs: usize,
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    from: usize,
    to: usize,
    weight: f64,
}

fn parse_csv_and_build_matrix(path: &str) -> Result<WeightMatrix> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path))?;

    let mut edges = Vec::new();
    for (row, result) in rdr.deserialize::<EdgeRecord>().enumerate() {
        let EdgeRecord { from, to, weight } =
            result.with_context(|| format!("row {} of {}", row + 1, path))?;
        edges.push((from, to, weight));
    }

    let len = edges
        .iter()
        .map(|&(u, v, _)| u.max(v) + 1)
        .max()
        .unwrap_or(0);
    let mut matrix = WeightMatrix::new(len);
    for (row, &(u, v, w)) in edges.iter().enumerate() {
        matrix
            .set(u, v, w)
            .with_context(|| format!("row {} of {}", row + 1, path))?;
    }
    Ok(matrix)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let matrix = parse_csv_and_build_matrix(&cli.csv)?;
    let n = matrix.len();
    info!("Matrix: {} nodes, {} directed edges", n, matrix.edge_count());
    if n == 0 {
        return Ok(());
    }

    let mut duration_millis = Vec::with_capacity(cli.num_runs);
    let mut reachable = 0;
    for run in 0..cli.num_runs {
        let (source, destination) = (run % n, (n - 1 - run % n) % n);
        let now = Instant::now();
        let result = shortest_path(&matrix, source, destination)?;
        duration_millis.push(now.elapsed().as_secs_f64() * 1000.0);
        debug!(source, destination, distance = result.distance, "query done");
        if result.reachable {
            reachable += 1;
        }
    }
    info!("{} of {} queries reachable", reachable, cli.num_runs);
    println!("{:?}", duration_millis);

    Ok(())
}
