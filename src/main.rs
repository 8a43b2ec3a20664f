use anyhow::{bail, Context, Result};
use clap::Parser;
use csv::Writer;
use tracing::info;
use wayfinder::{shortest_path, Calibration, Graph, MapDescription};

#[derive(Parser, Debug)]
#[command(name = "route")]
#[command(about = "Find the shortest route between two nodes of a map and estimate the walking time.", long_about = None)]
struct Cli {
    /// Node CSV (x,y per row, row order = node index). Defaults to the built-in campus map.
    #[arg(short, long, requires = "connections")]
    nodes: Option<String>,

    /// Connection CSV (from,to per row), each row connects both directions
    #[arg(short, long, requires = "nodes")]
    connections: Option<String>,

    /// Source node index
    #[arg(short, long)]
    source: usize,

    /// Destination node index
    #[arg(short, long)]
    destination: usize,

    /// Use coordinates as given instead of applying the map overlay calibration
    #[arg(long, default_value_t = false)]
    raw_coordinates: bool,

    /// Output CSV (step, node, x, y, cumulative_distance). If omitted, prints the route to stdout.
    #[arg(short, long)]
    out: Option<String>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let description = match (&cli.nodes, &cli.connections) {
        (Some(nodes), Some(connections)) => MapDescription::from_paths(nodes, connections)
            .with_context(|| format!("loading map from {} and {}", nodes, connections))?,
        _ => MapDescription::reference_campus().context("loading built-in campus map")?,
    };
    let calibration = if cli.raw_coordinates {
        Calibration::IDENTITY
    } else {
        Calibration::MAP_OVERLAY
    };

    let graph = Graph::from_description(&description, calibration).context("building graph")?;
    info!(
        "Graph: {} nodes, {} directed edges",
        graph.len(),
        graph.weight_matrix().edge_count()
    );

    let result = shortest_path(graph.weight_matrix(), cli.source, cli.destination)
        .with_context(|| format!("routing {} -> {}", cli.source, cli.destination))?;

    let Some(minutes) = result.estimated_minutes() else {
        bail!("no route from {} to {}", cli.source, cli.destination);
    };

    if let Some(out_path) = cli.out {
        let mut wtr =
            Writer::from_path(&out_path).with_context(|| format!("creating CSV {}", &out_path))?;
        wtr.write_record(["step", "node", "x", "y", "cumulative_distance"])?;
        let mut travelled = 0.0;
        let mut previous = None;
        for (step, &node_id) in result.path.iter().enumerate() {
            if let Some(prev) = previous {
                travelled += graph.weight_matrix().weight(prev, node_id).unwrap_or_default();
            }
            previous = Some(node_id);
            let node = &graph.nodes()[node_id];
            wtr.write_record(&[
                step.to_string(),
                node_id.to_string(),
                format!("{:.6}", node.x),
                format!("{:.6}", node.y),
                format!("{:.6}", travelled),
            ])?;
        }
        wtr.flush()?;
        info!("Wrote {} route steps to {}", result.path.len(), out_path);
    } else {
        let path: Vec<String> = result.path.iter().map(|n| n.to_string()).collect();
        println!("Path: {}", path.join(" -> "));
        println!("Distance: {:.2}", result.distance);
        println!("Estimated time to reach: {} mins", minutes);
    }

    Ok(())
}
