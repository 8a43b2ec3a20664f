//! Shortest routes over a small, fixed map graph.
//!
//! A [`Graph`] is built once from node coordinates and connections (usually a
//! [`MapDescription`]); queries then run dense Dijkstra over its [`WeightMatrix`].

pub mod dijkstra;
pub mod error;
pub mod geo;
pub mod graph;
pub mod map;

pub use dijkstra::{shortest_path, travel_minutes, PathResult};
pub use error::{MapError, RouteError};
pub use geo::Calibration;
pub use graph::{Graph, GraphEvent, Node, NodeIndex, Weight, WeightMatrix, MAX_WEIGHT};
pub use map::MapDescription;
