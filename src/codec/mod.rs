//! Persistence of stroke lists.
//!
//! Encoding flattens every stroke into 1px arc-length samples; decoding
//! rebuilds each stroke as a polyline through those samples. The round trip
//! keeps stroke count, order, colour and width, but not curve control points.

mod format;
mod sampler;

pub use format::{decode, encode};
pub use sampler::{polyline, resample, MAX_SAMPLES, SAMPLE_STEP};
