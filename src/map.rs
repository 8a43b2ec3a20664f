use std::io;
use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;

use crate::error::MapError;
use crate::graph::NodeIndex;

const CAMPUS_NODES: &str = include_str!("../data/campus_nodes.csv");
const CAMPUS_CONNECTIONS: &str = include_str!("../data/campus_connections.csv");

#[derive(Debug, Deserialize)]
struct NodeRecord {
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
struct ConnectionRecord {
    from: NodeIndex,
    to: NodeIndex,
}

/// Declarative description of a map: node coordinates in index order and undirected connections.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapDescription {
    pub nodes: Vec<(f64, f64)>,
    pub connections: Vec<(NodeIndex, NodeIndex)>,
}

impl MapDescription {
    /// Reads `x,y` node rows and `from,to` connection rows (both with a header line).
    pub fn from_readers<N: io::Read, C: io::Read>(nodes: N, connections: C) -> Result<Self, MapError> {
        let mut description = MapDescription::default();

        let mut rdr = ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(nodes);
        for result in rdr.deserialize() {
            let NodeRecord { x, y } = result?;
            description.nodes.push((x, y));
        }

        let mut rdr = ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(connections);
        for (row, result) in rdr.deserialize().enumerate() {
            let ConnectionRecord { from, to } = result?;
            for index in [from, to] {
                if index >= description.nodes.len() {
                    return Err(MapError::UnknownNode {
                        row: row + 1,
                        index,
                        len: description.nodes.len(),
                    });
                }
            }
            description.connections.push((from, to));
        }

        Ok(description)
    }

    pub fn from_paths(nodes: impl AsRef<Path>, connections: impl AsRef<Path>) -> Result<Self, MapError> {
        let nodes = std::fs::File::open(nodes).map_err(csv::Error::from)?;
        let connections = std::fs::File::open(connections).map_err(csv::Error::from)?;
        Self::from_readers(nodes, connections)
    }

    /// The 48-node campus map, in raw (uncalibrated) coordinates.
    pub fn reference_campus() -> Result<Self, MapError> {
        Self::from_readers(CAMPUS_NODES.as_bytes(), CAMPUS_CONNECTIONS.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_nodes_and_connections() {
        let nodes = "x,y\n0,0\n3,0\n3, 4\n";
        let connections = "from,to\n0,1\n1,2\n";
        let description = MapDescription::from_readers(nodes.as_bytes(), connections.as_bytes()).unwrap();
        assert_eq!(description.nodes, vec![(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]);
        assert_eq!(description.connections, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn unknown_node_is_reported_with_its_row() {
        let nodes = "x,y\n0,0\n1,1\n";
        let connections = "from,to\n0,1\n1,5\n";
        let err = MapDescription::from_readers(nodes.as_bytes(), connections.as_bytes()).unwrap_err();
        assert!(matches!(err, MapError::UnknownNode { row: 2, index: 5, len: 2 }));
    }

    #[test]
    fn malformed_row_is_a_csv_error() {
        let nodes = "x,y\n0,zero\n";
        let err = MapDescription::from_readers(nodes.as_bytes(), "from,to\n".as_bytes()).unwrap_err();
        assert!(matches!(err, MapError::Csv(_)));
    }

    #[test]
    fn reference_campus_loads() {
        let campus = MapDescription::reference_campus().unwrap();
        assert_eq!(campus.nodes.len(), 48);
        assert_eq!(campus.connections.len(), 84);
        assert_eq!(campus.nodes[0], (100.0, 45.0));
        assert_eq!(campus.nodes[47], (1425.0, 213.0));
    }
}
