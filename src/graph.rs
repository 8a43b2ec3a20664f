use tracing::warn;

use crate::error::RouteError;
use crate::geo::{self, Calibration};
use crate::map::MapDescription;

pub type NodeIndex = usize;
pub type Weight = f64;

/// Largest weight a matrix entry may hold. Any path of fewer than ~1.7e8 edges sums to a
/// finite distance, so relaxation never overflows to infinity.
pub const MAX_WEIGHT: Weight = 1e300;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Node {
    pub index: NodeIndex,
    pub x: f64,
    pub y: f64,
}

/// Dense V x V table of directed edge weights. An entry of `0.0` means "no edge", so a
/// genuinely zero-length edge cannot be stored. Entries are capped at [`MAX_WEIGHT`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightMatrix {
    rows: Vec<Vec<Weight>>,
}

impl WeightMatrix {
    pub fn new(len: usize) -> Self {
        Self { rows: vec![vec![0.0; len]; len] }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Weights of all edges leaving `from`, indexed by destination. Panics if `from` is out of range.
    pub fn row(&self, from: NodeIndex) -> &[Weight] {
        &self.rows[from]
    }

    /// Weight of the edge `from -> to`, or `None` when there is no such edge (or either index is out of range).
    pub fn weight(&self, from: NodeIndex, to: NodeIndex) -> Option<Weight> {
        self.rows
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .filter(|&w| w != 0.0)
    }

    pub fn set(&mut self, from: NodeIndex, to: NodeIndex, weight: Weight) -> Result<(), RouteError> {
        self.check_index(from)?;
        self.check_index(to)?;
        if !(0.0..=MAX_WEIGHT).contains(&weight) {
            return Err(RouteError::InvalidWeight { from, to, weight });
        }
        self.rows[from][to] = weight;
        Ok(())
    }

    /// Number of directed edges (non-zero entries).
    pub fn edge_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&w| w != 0.0).count())
            .sum()
    }

    pub fn check_index(&self, index: NodeIndex) -> Result<(), RouteError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(RouteError::InvalidIndex { index, len: self.len() })
        }
    }

    fn grow(&mut self) {
        for row in self.rows.iter_mut() {
            row.push(0.0);
        }
        let len = self.rows.len() + 1;
        self.rows.push(vec![0.0; len]);
    }
}

/// Notifications for whoever draws the graph.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphEvent {
    NodeAdded(Node),
    EdgeAdded { from: NodeIndex, to: NodeIndex, weight: Weight },
}

type Listener = Box<dyn FnMut(&GraphEvent) + Send>;

/// Nodes placed on the map plus the directed weight matrix derived from their coordinates.
///
/// The graph is meant to be built once and then only read: queries borrow
/// [`Graph::weight_matrix`] and never mutate it.
#[derive(Default)]
pub struct Graph {
    calibration: Calibration,
    nodes: Vec<Node>,
    matrix: WeightMatrix,
    listeners: Vec<Listener>,
}

impl Graph {
    pub fn new() -> Self {
        Self::with_calibration(Calibration::IDENTITY)
    }

    pub fn with_calibration(calibration: Calibration) -> Self {
        Self {
            calibration,
            nodes: Vec::new(),
            matrix: WeightMatrix::default(),
            listeners: Vec::new(),
        }
    }

    /// Builds a graph from a map description, connecting every pair in both directions.
    pub fn from_description(description: &MapDescription, calibration: Calibration) -> Result<Self, RouteError> {
        let mut graph = Graph::with_calibration(calibration);
        for &(x, y) in &description.nodes {
            graph.add_node(x, y);
        }
        for &(a, b) in &description.connections {
            graph.connect(a, b)?;
        }
        Ok(graph)
    }

    /// Registers a repaint hook, called after every node or edge is added.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&GraphEvent) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn add_node(&mut self, x: f64, y: f64) -> NodeIndex {
        let node = Node {
            index: self.nodes.len(),
            x: self.calibration.apply(x),
            y: self.calibration.apply(y),
        };
        self.nodes.push(node);
        self.matrix.grow();
        self.notify(GraphEvent::NodeAdded(node));
        node.index
    }

    /// Adds the directed edge `from -> to` weighted by the distance between the two nodes and
    /// returns that weight. The reverse edge is not added; see [`Graph::connect`].
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) -> Result<Weight, RouteError> {
        let (a, b) = (self.node_at(from)?, self.node_at(to)?);
        let weight = geo::euclidean(a.x, a.y, b.x, b.y);
        if weight == 0.0 {
            warn!(from, to, "nodes share a position; zero-length edge is indistinguishable from no edge");
        }
        self.matrix.set(from, to, weight)?;
        self.notify(GraphEvent::EdgeAdded { from, to, weight });
        Ok(weight)
    }

    /// Adds `a -> b` and `b -> a`.
    pub fn connect(&mut self, a: NodeIndex, b: NodeIndex) -> Result<Weight, RouteError> {
        let weight = self.add_edge(a, b)?;
        self.add_edge(b, a)?;
        Ok(weight)
    }

    pub fn weight_matrix(&self) -> &WeightMatrix {
        &self.matrix
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node_at(&self, index: NodeIndex) -> Result<Node, RouteError> {
        self.nodes
            .get(index)
            .copied()
            .ok_or(RouteError::InvalidIndex { index, len: self.nodes.len() })
    }

    fn notify(&mut self, event: GraphEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("calibration", &self.calibration)
            .field("nodes", &self.nodes)
            .field("edges", &self.matrix.edge_count())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
