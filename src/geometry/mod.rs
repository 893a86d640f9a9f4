//! Stroke geometry.
//!
//! - `Curve` - move/line/quadratic path accumulator
//! - `StrokeBuilder` - pointer samples to smoothed curve
//! - `PathMeasure` - arc-length evaluation used by the sampler and rasterizer

mod builder;
mod curve;
mod measure;

pub use builder::{StrokeBuilder, JITTER_THRESHOLD};
pub use curve::{quad_point, Curve, Segment};
pub use measure::{PathMeasure, MEASURE_TOLERANCE};
