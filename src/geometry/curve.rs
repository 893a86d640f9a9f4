//! Path segments and the curve accumulator.

use crate::types::Point;

/// Upper bound on the pieces a single quadratic is split into when flattening.
const MAX_QUAD_SUBDIVISIONS: usize = 1024;

/// One path segment. Every segment implicitly starts where the previous
/// one ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { ctrl: Point, end: Point },
}

impl Segment {
    /// Where the pen sits after this segment.
    pub fn end(&self) -> Point {
        match *self {
            Segment::MoveTo(p) | Segment::LineTo(p) => p,
            Segment::QuadTo { end, .. } => end,
        }
    }
}

/// A single-contour path: one move-to followed by line and quadratic
/// segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Curve {
    segments: Vec<Segment>,
}

impl Curve {
    /// An empty curve. Draws as nothing and measures zero length.
    pub fn new() -> Self {
        Self::default()
    }

    /// A curve whose contour starts at `p`.
    pub fn starting_at(p: Point) -> Self {
        Self {
            segments: vec![Segment::MoveTo(p)],
        }
    }

    /// Straight segment to `p`. On an empty curve this starts the contour at `p`.
    pub fn line_to(&mut self, p: Point) {
        if self.segments.is_empty() {
            self.segments.push(Segment::MoveTo(p));
        } else {
            self.segments.push(Segment::LineTo(p));
        }
    }

    /// Quadratic segment through control point `ctrl` to `end`. On an empty
    /// curve the contour starts at `ctrl`.
    pub fn quad_to(&mut self, ctrl: Point, end: Point) {
        if self.segments.is_empty() {
            self.segments.push(Segment::MoveTo(ctrl));
        }
        self.segments.push(Segment::QuadTo { ctrl, end });
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// First point of the contour.
    pub fn start(&self) -> Option<Point> {
        self.segments.first().map(Segment::end)
    }

    /// Current pen position.
    pub fn current_point(&self) -> Option<Point> {
        self.segments.last().map(Segment::end)
    }

    /// Approximate the curve with a polyline whose distance from the true
    /// path stays within `tolerance` pixels.
    pub fn flatten(&self, tolerance: f32) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.segments.len() * 2);
        let mut pen = match self.start() {
            Some(p) => p,
            None => return points,
        };
        points.push(pen);

        for segment in &self.segments[1..] {
            match *segment {
                // A second move-to never comes out of the public API.
                Segment::MoveTo(p) | Segment::LineTo(p) => points.push(p),
                Segment::QuadTo { ctrl, end } => {
                    let n = quad_subdivisions(pen, ctrl, end, tolerance);
                    for i in 1..=n {
                        let t = i as f32 / n as f32;
                        points.push(quad_point(pen, ctrl, end, t));
                    }
                }
            }
            pen = segment.end();
        }

        points
    }
}

/// Evaluate a quadratic Bezier at parameter `t`.
pub fn quad_point(p0: Point, p1: Point, p2: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    Point::new(
        mt * mt * p0.x + 2.0 * mt * t * p1.x + t * t * p2.x,
        mt * mt * p0.y + 2.0 * mt * t * p1.y + t * t * p2.y,
    )
}

/// Number of uniform pieces needed to keep a quadratic within `tolerance`.
///
/// Uniform subdivision into `n` pieces deviates by at most
/// `|p0 - 2 p1 + p2| / (8 n^2)`.
fn quad_subdivisions(p0: Point, p1: Point, p2: Point, tolerance: f32) -> usize {
    let ddx = p0.x - 2.0 * p1.x + p2.x;
    let ddy = p0.y - 2.0 * p1.y + p2.y;
    let dd = ddx.hypot(ddy);
    let tolerance = tolerance.max(f32::EPSILON);
    let n = (dd / (8.0 * tolerance)).sqrt().ceil();
    if n.is_finite() {
        (n as usize).clamp(1, MAX_QUAD_SUBDIVISIONS)
    } else {
        1
    }
}
