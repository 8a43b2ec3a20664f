/// Straight-line distance between two points on the map plane.
pub fn euclidean(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt()
}

/// Linear shrink-and-shift applied to raw map coordinates before they are stored.
///
/// The campus map coordinates were measured against a larger image than the one they are
/// drawn over, so every coordinate is shrunk by `shrink_percent` percent and shifted by
/// `offset`. `apply` evaluates `v - (v / 100) * shrink_percent + offset` in that order so
/// that stored coordinates (and therefore edge weights) match the reference layout exactly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Calibration {
    pub shrink_percent: f64,
    pub offset: f64,
}

impl Calibration {
    pub const IDENTITY: Calibration = Calibration { shrink_percent: 0.0, offset: 0.0 };
    pub const MAP_OVERLAY: Calibration = Calibration { shrink_percent: 30.0, offset: 10.0 };

    pub fn apply(&self, value: f64) -> f64 {
        value - (value / 100.0) * self.shrink_percent + self.offset
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Calibration::IDENTITY
    }
}
