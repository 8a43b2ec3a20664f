use tracing::{debug, trace};

use crate::error::RouteError;
use crate::graph::{NodeIndex, Weight, WeightMatrix};

/// Walking pace of the reference tool: 100 distance units take 0.6 minutes.
pub fn travel_minutes(distance: Weight) -> f64 {
    (distance / 100.0) * 0.6
}

#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    /// Source to destination inclusive; empty when unreachable.
    pub path: Vec<NodeIndex>,
    /// `f64::INFINITY` when unreachable.
    pub distance: Weight,
    pub reachable: bool,
}

impl PathResult {
    fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            distance: f64::INFINITY,
            reachable: false,
        }
    }

    pub fn estimated_minutes(&self) -> Option<f64> {
        self.reachable.then(|| travel_minutes(self.distance))
    }

    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

// First unsettled vertex with the smallest finite distance. Scanning in ascending index
// order with a strict `<` means ties go to the lowest index.
fn closest_unsettled(dist: &[Weight], settled: &[bool]) -> Option<NodeIndex> {
    let mut best = None;
    let mut min = f64::INFINITY;
    for (node_id, &d) in dist.iter().enumerate() {
        if !settled[node_id] && d < min {
            min = d;
            best = Some(node_id);
        }
    }
    best
}

/// Dense O(V^2) Dijkstra from `source`, stopping as soon as `destination` is the closest
/// unsettled vertex. Zero entries in `matrix` are treated as missing edges.
pub fn shortest_path(
    matrix: &WeightMatrix,
    source: NodeIndex,
    destination: NodeIndex,
) -> Result<PathResult, RouteError> {
    matrix.check_index(source)?;
    matrix.check_index(destination)?;

    let n = matrix.len();
    let mut dist = vec![f64::INFINITY; n];
    let mut settled = vec![false; n];
    let mut predecessor: Vec<Option<NodeIndex>> = vec![None; n];
    dist[source] = 0.0;

    for _ in 1..n {
        let Some(u) = closest_unsettled(&dist, &settled) else {
            break;
        };
        if u == destination {
            break;
        }
        settled[u] = true;
        trace!(node = u, dist = dist[u], "settled");

        for (v, &weight) in matrix.row(u).iter().enumerate() {
            if weight == 0.0 {
                continue;
            }
            let candidate = dist[u] + weight;
            if candidate < dist[v] {
                dist[v] = candidate;
                predecessor[v] = Some(u);
            }
        }
    }

    if dist[destination].is_infinite() {
        debug!(source, destination, "destination unreachable");
        return Ok(PathResult::unreachable());
    }

    let mut path = vec![destination];
    let mut current = destination;
    while let Some(prev) = predecessor[current] {
        path.push(prev);
        current = prev;
    }
    path.reverse();

    debug!(source, destination, distance = dist[destination], hops = path.len() - 1, "route found");
    Ok(PathResult {
        path,
        distance: dist[destination],
        reachable: true,
    })
}
