use thiserror::Error;

use crate::graph::NodeIndex;

/// Failures raised by the graph model and the shortest-path engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("node index {index} is out of range for a graph of {len} nodes")]
    InvalidIndex { index: NodeIndex, len: usize },

    #[error("edge {from} -> {to} has invalid weight {weight} (weights must lie in 0..=1e300)")]
    InvalidWeight { from: NodeIndex, to: NodeIndex, weight: f64 },
}

/// Failures while loading a map description.
#[derive(Error, Debug)]
pub enum MapError {
    #[error("reading map csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("connection {row} refers to node {index}, but the map only has {len} nodes")]
    UnknownNode { row: usize, index: NodeIndex, len: usize },
}
