//! Fixed-step resampling of curves, and the polyline rebuild used on load.
//!
//! Saving walks each curve's arc length in fixed steps and records the
//! position at each step. Control points are not kept, so a reloaded stroke
//! is a dense polyline rather than the original quadratics.

use tracing::warn;

use crate::geometry::{Curve, PathMeasure};
use crate::types::Point;

/// Distance between persisted samples, in pixels.
pub const SAMPLE_STEP: f32 = 1.0;

/// Most samples kept for one curve. Every sample index stays exactly
/// representable as an `f32` distance multiplier.
pub const MAX_SAMPLES: usize = 1 << 24;

/// Sample `curve` every `step` pixels of arc length, starting at distance 0
/// and stopping before the total length.
///
/// Zero-length curves produce no samples; curves shorter than `step`
/// produce exactly one. A non-positive `step` yields nothing, as does a
/// curve whose length overflows. At most `MAX_SAMPLES` points are returned.
pub fn resample(curve: &Curve, step: f32) -> Vec<Point> {
    resample_up_to(curve, step, MAX_SAMPLES)
}

fn resample_up_to(curve: &Curve, step: f32, limit: usize) -> Vec<Point> {
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }

    let measure = PathMeasure::new(curve);
    let length = measure.length();
    if !length.is_finite() {
        warn!(length, "curve length overflows, skipping samples");
        return Vec::new();
    }

    let wanted = (length / step).ceil();
    let count = if wanted >= limit as f32 {
        if wanted > limit as f32 {
            warn!(length, limit, "curve truncated to sample limit");
        }
        limit
    } else {
        wanted as usize
    };

    let mut samples = Vec::with_capacity(count);
    for i in 0..count {
        let distance = i as f32 * step;
        if distance >= length {
            break;
        }
        if let Some(point) = measure.position_at(distance) {
            samples.push(point);
        }
    }

    samples
}

/// Rebuild geometry from stored samples: straight segments between
/// consecutive points. Fewer than two points gives an empty curve.
pub fn polyline(points: &[Point]) -> Curve {
    match points {
        [first, rest @ ..] if !rest.is_empty() => {
            let mut curve = Curve::starting_at(*first);
            for &point in rest {
                curve.line_to(point);
            }
            curve
        }
        _ => Curve::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::StrokeBuilder;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_straight_gesture_samples_once_per_pixel() {
        let mut builder = StrokeBuilder::begin(p(0.0, 0.0));
        assert!(builder.extend(p(10.0, 0.0)));
        let curve = builder.end(p(10.0, 0.0));

        let samples = resample(&curve, SAMPLE_STEP);
        assert!((9..=11).contains(&samples.len()), "got {}", samples.len());
        for (i, s) in samples.iter().enumerate() {
            assert!((s.x - i as f32).abs() < 1e-3);
            assert!(s.y.abs() < 1e-3);
        }
    }

    #[test]
    fn test_zero_length_curve_has_no_samples() {
        let curve = StrokeBuilder::begin(p(3.0, 3.0)).end(p(3.0, 3.0));
        assert!(resample(&curve, SAMPLE_STEP).is_empty());
        assert!(resample(&Curve::new(), SAMPLE_STEP).is_empty());
    }

    #[test]
    fn test_sub_pixel_curve_has_one_sample() {
        let curve = StrokeBuilder::begin(p(3.0, 3.0)).end(p(3.5, 3.0));
        assert_eq!(resample(&curve, SAMPLE_STEP), vec![p(3.0, 3.0)]);
    }

    #[test]
    fn test_invalid_step_yields_nothing() {
        let curve = StrokeBuilder::begin(p(0.0, 0.0)).end(p(10.0, 0.0));
        assert!(resample(&curve, 0.0).is_empty());
        assert!(resample(&curve, -1.0).is_empty());
        assert!(resample(&curve, f32::NAN).is_empty());
    }

    #[test]
    fn test_samples_are_evenly_spaced_along_curve() {
        let mut builder = StrokeBuilder::begin(p(0.0, 0.0));
        builder.extend(p(20.0, 0.0));
        builder.extend(p(20.0, 20.0));
        builder.extend(p(40.0, 20.0));
        let curve = builder.end(p(40.0, 20.0));

        let samples = resample(&curve, SAMPLE_STEP);
        for pair in samples.windows(2) {
            // Chords are never longer than the arc step.
            assert!(pair[0].distance(pair[1]) <= SAMPLE_STEP + 1e-3);
        }
    }

    #[test]
    fn test_overflowing_length_yields_nothing() {
        let mut curve = Curve::starting_at(p(-3.0e38, 0.0));
        curve.line_to(p(3.0e38, 0.0));
        assert!(resample(&curve, SAMPLE_STEP).is_empty());
    }

    #[test]
    fn test_sample_count_is_capped() {
        let mut curve = Curve::starting_at(p(0.0, 0.0));
        curve.line_to(p(500.0, 0.0));
        let samples = resample_up_to(&curve, SAMPLE_STEP, 100);
        assert_eq!(samples.len(), 100);
        assert!((samples[99].x - 99.0).abs() < 1e-3);
    }

    #[test]
    fn test_long_curve_below_cap_is_complete() {
        let mut curve = Curve::starting_at(p(0.0, 0.0));
        curve.line_to(p(500.0, 0.0));
        assert_eq!(resample_up_to(&curve, SAMPLE_STEP, 1000).len(), 500);
    }

    #[test]
    fn test_polyline_degenerate() {
        assert!(polyline(&[]).is_empty());
        assert!(polyline(&[p(1.0, 1.0)]).is_empty());
    }

    #[test]
    fn test_polyline_connects_points() {
        let curve = polyline(&[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]);
        assert_eq!(curve.segments().len(), 3);
        assert_eq!(curve.start(), Some(p(0.0, 0.0)));
        assert_eq!(curve.current_point(), Some(p(1.0, 1.0)));
    }
}
