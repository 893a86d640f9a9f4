//! Info command implementation.
//!
//! Loads a drawing and prints a per-stroke summary, as text or JSON.

use clap::Args;
use serde::Serialize;

use crate::canvas::Canvas;
use crate::error::{PadError, Result};
use crate::geometry::PathMeasure;
use crate::library::{DrawingLibrary, Settings};
use crate::store::StrokeStore;
use crate::types::Colour;

/// Describe the strokes in a drawing
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Drawing name
    #[arg(required = true)]
    pub name: String,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Summary of a loaded drawing.
#[derive(Debug, Clone, Serialize)]
pub struct DrawingInfo {
    pub name: String,
    pub bytes: usize,
    pub strokes: Vec<StrokeInfo>,
}

/// Summary of one stroke.
#[derive(Debug, Clone, Serialize)]
pub struct StrokeInfo {
    pub colour: Colour,
    pub width: f32,
    pub points: usize,
    pub length: f32,
}

impl DrawingInfo {
    pub fn from_store(name: &str, bytes: usize, store: &StrokeStore) -> Self {
        let strokes = store
            .iter()
            .map(|stroke| StrokeInfo {
                colour: stroke.colour(),
                width: stroke.width(),
                // Loaded strokes are polylines: one segment per stored point.
                points: stroke.curve().segments().len(),
                length: PathMeasure::new(stroke.curve()).length(),
            })
            .collect();

        Self {
            name: name.to_string(),
            bytes,
            strokes,
        }
    }
}

/// Human-readable rendering of a drawing summary.
pub fn format_info(info: &DrawingInfo) -> String {
    let total_points: usize = info.strokes.iter().map(|s| s.points).sum();
    let mut out = format!(
        "{}: {} strokes, {} points, {} bytes\n",
        info.name,
        info.strokes.len(),
        total_points,
        info.bytes
    );
    for (i, stroke) in info.strokes.iter().enumerate() {
        out.push_str(&format!(
            "  #{:<3} {}  width {:>5.1}  {:>5} points  {:>7.1}px\n",
            i, stroke.colour, stroke.width, stroke.points, stroke.length
        ));
    }
    out
}

pub fn run(args: InfoArgs, settings: &Settings) -> Result<()> {
    let library = DrawingLibrary::from_settings(settings);

    let (_, bytes) = library.read(&args.name)?;
    let mut canvas = Canvas::new();
    canvas.load(&bytes)?;

    let info = DrawingInfo::from_store(args.name.trim(), bytes.len(), canvas.store());

    if args.json {
        let json = serde_json::to_string_pretty(&info).map_err(|e| PadError::Parse {
            message: format!("Failed to serialize drawing info: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        print!("{}", format_info(&info));
    }

    Ok(())
}
