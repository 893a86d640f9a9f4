//! Real-time smoothing of pointer samples into a curve.
//!
//! Each accepted sample adds a quadratic segment that uses the previous
//! sample as its control point and ends halfway between the two samples.
//! Corners of the raw polyline get rounded off without buffering the gesture.

use crate::types::Point;

use super::Curve;

/// Samples that move less than this many pixels on both axes are dropped.
pub const JITTER_THRESHOLD: f32 = 4.0;

/// Builds one gesture's curve from a stream of pointer samples.
#[derive(Debug, Clone)]
pub struct StrokeBuilder {
    curve: Curve,
    last: Point,
}

impl StrokeBuilder {
    /// Start a new curve at `p`.
    pub fn begin(p: Point) -> Self {
        Self {
            curve: Curve::starting_at(p),
            last: p,
        }
    }

    /// Feed a move sample. Returns `false` when the sample is within the
    /// jitter threshold of the last accepted one and was discarded.
    pub fn extend(&mut self, p: Point) -> bool {
        let dx = (p.x - self.last.x).abs();
        let dy = (p.y - self.last.y).abs();
        if dx < JITTER_THRESHOLD && dy < JITTER_THRESHOLD {
            return false;
        }

        self.curve.quad_to(self.last, self.last.midpoint(p));
        self.last = p;
        true
    }

    /// Close the gesture with a straight segment to `p` and hand back the curve.
    pub fn end(mut self, p: Point) -> Curve {
        self.curve.line_to(p);
        self.curve
    }

    /// The curve built so far, for live rendering.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The last accepted sample.
    pub fn last(&self) -> Point {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Segment;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_begin_starts_contour() {
        let builder = StrokeBuilder::begin(p(2.0, 3.0));
        assert_eq!(builder.curve().segments(), &[Segment::MoveTo(p(2.0, 3.0))]);
        assert_eq!(builder.last(), p(2.0, 3.0));
    }

    #[test]
    fn test_sub_threshold_moves_are_dropped() {
        let mut builder = StrokeBuilder::begin(p(0.0, 0.0));
        // Drift in small steps; every sample stays within 4px of the origin.
        for sample in [p(1.0, 1.0), p(3.9, -3.9), p(-3.5, 2.0), p(0.0, 3.99)] {
            assert!(!builder.extend(sample));
        }
        assert_eq!(builder.curve().segments().len(), 1);
        assert_eq!(builder.last(), p(0.0, 0.0));

        assert!(builder.extend(p(4.0, 0.0)));
        assert_eq!(builder.curve().segments().len(), 2);
    }

    #[test]
    fn test_threshold_is_per_axis() {
        let mut builder = StrokeBuilder::begin(p(0.0, 0.0));
        assert!(builder.extend(p(0.0, -4.0)));
        assert!(builder.extend(p(3.0, -8.0)));
    }

    #[test]
    fn test_extend_adds_quad_to_midpoint() {
        let mut builder = StrokeBuilder::begin(p(0.0, 0.0));
        assert!(builder.extend(p(10.0, 0.0)));
        assert!(builder.extend(p(10.0, 10.0)));

        assert_eq!(
            builder.curve().segments(),
            &[
                Segment::MoveTo(p(0.0, 0.0)),
                Segment::QuadTo { ctrl: p(0.0, 0.0), end: p(5.0, 0.0) },
                Segment::QuadTo { ctrl: p(10.0, 0.0), end: p(10.0, 5.0) },
            ]
        );
        assert_eq!(builder.last(), p(10.0, 10.0));
    }

    #[test]
    fn test_end_captures_final_position() {
        let mut builder = StrokeBuilder::begin(p(0.0, 0.0));
        builder.extend(p(10.0, 0.0));
        // Sub-threshold end point still lands in the curve.
        let curve = builder.end(p(11.0, 1.0));
        assert_eq!(curve.current_point(), Some(p(11.0, 1.0)));
        assert_eq!(curve.segments().last(), Some(&Segment::LineTo(p(11.0, 1.0))));
    }

    #[test]
    fn test_tap_without_moves() {
        let curve = StrokeBuilder::begin(p(5.0, 5.0)).end(p(5.0, 5.0));
        assert_eq!(
            curve.segments(),
            &[Segment::MoveTo(p(5.0, 5.0)), Segment::LineTo(p(5.0, 5.0))]
        );
    }
}
