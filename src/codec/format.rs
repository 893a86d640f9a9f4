//! Binary drawing format.
//!
//! All fields are little-endian:
//!
//! ```text
//! i32  stroke count
//! per stroke:
//!   i32  packed colour (0xFFRRGGBB)
//!   f32  width
//!   i32  point count
//!   per point: f32 x, f32 y
//! ```

use tracing::{debug, warn};

use crate::error::{PadError, Result};
use crate::types::{validate_width, Colour, Point, Stroke, MAX_COORDINATE};

use super::sampler::{polyline, resample, SAMPLE_STEP};

/// Bytes taken by one stored point.
const POINT_SIZE: usize = 8;

/// Bytes taken by a stroke header (colour, width, point count).
const STROKE_HEADER_SIZE: usize = 12;

/// Serialize strokes in order, resampling each curve at `SAMPLE_STEP`.
pub fn encode(strokes: &[Stroke]) -> Vec<u8> {
    let sampled: Vec<Vec<Point>> = strokes
        .iter()
        .map(|stroke| resample(stroke.curve(), SAMPLE_STEP))
        .collect();

    let points: usize = sampled.iter().map(Vec::len).sum();
    let mut buf = Vec::with_capacity(4 + strokes.len() * STROKE_HEADER_SIZE + points * POINT_SIZE);

    let strokes = &strokes[..clamp_count(strokes.len())];
    write_i32(&mut buf, strokes.len() as i32);

    for (stroke, samples) in strokes.iter().zip(&sampled) {
        write_i32(&mut buf, stroke.colour().to_packed());
        write_f32(&mut buf, stroke.width());

        let samples = &samples[..clamp_count(samples.len())];
        write_i32(&mut buf, samples.len() as i32);
        for point in samples {
            write_f32(&mut buf, point.x);
            write_f32(&mut buf, point.y);
        }
    }

    debug!(strokes = strokes.len(), points, bytes = buf.len(), "encoded drawing");
    buf
}

/// Parse a drawing. Fails on truncation, negative counts, point counts that
/// overrun the buffer, widths that are not finite and positive, and
/// coordinates that are not finite or exceed `MAX_COORDINATE`.
pub fn decode(bytes: &[u8]) -> Result<Vec<Stroke>> {
    let mut reader = Reader::new(bytes);

    let count = reader.read_count("stroke count")?;
    let mut strokes = Vec::with_capacity(count.min(reader.remaining() / STROKE_HEADER_SIZE));

    for index in 0..count {
        let colour = Colour::from_packed(reader.read_i32("stroke colour")?);

        let width_offset = reader.offset();
        let width = reader.read_f32("stroke width")?;
        validate_width(width).map_err(|_| {
            PadError::decode(format!(
                "stroke {} has invalid width {} at offset {}",
                index, width, width_offset
            ))
        })?;

        let points_offset = reader.offset();
        let point_count = reader.read_count("point count")?;
        let needed = point_count.checked_mul(POINT_SIZE);
        if needed.map_or(true, |n| n > reader.remaining()) {
            return Err(PadError::Decode {
                message: format!(
                    "stroke {} declares {} points at offset {} but only {} bytes remain",
                    index,
                    point_count,
                    points_offset,
                    reader.remaining()
                ),
                help: Some("The file is truncated or not a drawing".to_string()),
            });
        }

        let mut points = Vec::with_capacity(point_count);
        for _ in 0..point_count {
            let offset = reader.offset();
            let point = Point::new(reader.read_f32("x")?, reader.read_f32("y")?);
            if !point.in_bounds() {
                return Err(PadError::Decode {
                    message: format!(
                        "stroke {} has point ({}, {}) out of range at offset {}",
                        index, point.x, point.y, offset
                    ),
                    help: Some(format!(
                        "Coordinates must be finite and within ±{}",
                        MAX_COORDINATE
                    )),
                });
            }
            points.push(point);
        }

        strokes.push(Stroke::new(polyline(&points), colour, width)?);
    }

    if reader.remaining() > 0 {
        warn!(trailing = reader.remaining(), "ignoring bytes after last stroke");
    }
    debug!(strokes = strokes.len(), bytes = bytes.len(), "decoded drawing");

    Ok(strokes)
}

fn clamp_count(n: usize) -> usize {
    n.min(i32::MAX as usize)
}

fn write_i32(buf: &mut Vec<u8>, value: i32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn write_f32(buf: &mut Vec<u8>, value: f32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

/// Little-endian cursor over a byte slice.
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn offset(&self) -> usize {
        self.pos
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn take4(&mut self, what: &str) -> Result<[u8; 4]> {
        let end = self.pos + 4;
        let chunk = self.bytes.get(self.pos..end).ok_or_else(|| PadError::Decode {
            message: format!(
                "unexpected end of data reading {} at offset {} ({} bytes total)",
                what,
                self.pos,
                self.bytes.len()
            ),
            help: Some("The file is truncated or not a drawing".to_string()),
        })?;
        self.pos = end;
        let mut out = [0u8; 4];
        out.copy_from_slice(chunk);
        Ok(out)
    }

    fn read_i32(&mut self, what: &str) -> Result<i32> {
        self.take4(what).map(i32::from_le_bytes)
    }

    fn read_f32(&mut self, what: &str) -> Result<f32> {
        self.take4(what).map(f32::from_le_bytes)
    }

    fn read_count(&mut self, what: &str) -> Result<usize> {
        let offset = self.pos;
        let value = self.read_i32(what)?;
        usize::try_from(value).map_err(|_| {
            PadError::decode(format!("negative {} {} at offset {}", what, value, offset))
        })
    }
}
