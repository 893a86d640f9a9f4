//! strokepad - freehand stroke engine
//!
//! Turns noisy pointer drags into smoothed curves, keeps them in an
//! undoable stroke list, and saves drawings in a compact resampled binary
//! format.

pub mod canvas;
pub mod cli;
pub mod codec;
pub mod error;
pub mod geometry;
pub mod library;
pub mod output;
pub mod render;
pub mod script;
pub mod store;
pub mod types;

pub use canvas::Canvas;
pub use codec::{decode, encode, SAMPLE_STEP};
pub use error::{PadError, Result};
pub use geometry::{Curve, PathMeasure, Segment, StrokeBuilder, JITTER_THRESHOLD};
pub use library::{DrawingLibrary, Settings};
pub use render::{render, render_canvas, write_png, RasterSurface, Surface};
pub use script::{Command, Script, ScriptSummary};
pub use store::StrokeStore;
pub use types::{BrushState, Colour, Point, Stroke};
