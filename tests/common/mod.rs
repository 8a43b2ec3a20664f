use wayfinder::WeightMatrix;

/// All-pairs distances by Floyd–Warshall, `f64::INFINITY` where there is no path.
pub fn floyd_warshall(matrix: &WeightMatrix) -> Vec<Vec<f64>> {
    let n = matrix.len();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for u in 0..n {
        dist[u][u] = 0.0;
        for v in 0..n {
            if let Some(w) = matrix.weight(u, v) {
                dist[u][v] = dist[u][v].min(w);
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                }
            }
        }
    }
    dist
}

/// Sum of the edge weights along `path`, or `None` if some step has no edge.
pub fn path_weight(matrix: &WeightMatrix, path: &[usize]) -> Option<f64> {
    path.windows(2)
        .map(|pair| matrix.weight(pair[0], pair[1]))
        .sum()
}
