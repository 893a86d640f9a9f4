//! Arc-length measurement along a curve.

use crate::types::Point;

use super::Curve;

/// Flattening tolerance used when measuring, in pixels.
pub const MEASURE_TOLERANCE: f32 = 0.25;

/// A flattened curve with cumulative arc lengths, for evaluating positions by
/// distance travelled from the start.
#[derive(Debug, Clone)]
pub struct PathMeasure {
    points: Vec<Point>,
    /// `lengths[i]` is the distance from the start to `points[i]`.
    lengths: Vec<f32>,
}

impl PathMeasure {
    pub fn new(curve: &Curve) -> Self {
        Self::from_polyline(curve.flatten(MEASURE_TOLERANCE))
    }

    pub fn from_polyline(points: Vec<Point>) -> Self {
        let mut lengths = Vec::with_capacity(points.len());
        let mut total = 0.0f32;
        for (i, point) in points.iter().enumerate() {
            if i > 0 {
                total += points[i - 1].distance(*point);
            }
            lengths.push(total);
        }
        Self { points, lengths }
    }

    /// Total arc length.
    pub fn length(&self) -> f32 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// The flattened polyline.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Position `distance` pixels along the path, clamped to its ends.
    /// `None` for an empty path.
    pub fn position_at(&self, distance: f32) -> Option<Point> {
        let first = *self.points.first()?;
        let length = self.length();
        if distance.is_nan() || distance <= 0.0 || length == 0.0 {
            return Some(first);
        }
        if distance >= length {
            return self.points.last().copied();
        }

        // First vertex strictly past `distance`; zero-length pieces are skipped.
        let idx = self.lengths.partition_point(|&l| l <= distance);
        let (a, b) = (self.points[idx - 1], self.points[idx]);
        let (la, lb) = (self.lengths[idx - 1], self.lengths[idx]);
        let t = (distance - la) / (lb - la);
        Some(a.lerp(b, t))
    }
}
