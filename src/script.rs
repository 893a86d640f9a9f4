//! Gesture scripts.
//!
//! A script is a JSON array of the events a UI would send to a canvas:
//!
//! ```json
//! [
//!   { "op": "colour", "value": "#FF0000" },
//!   { "op": "width", "value": 4 },
//!   { "op": "stroke", "points": [[10, 10], [40, 12], [80, 30]] },
//!   { "op": "down", "at": [0, 0] },
//!   { "op": "move", "at": [12, 0] },
//!   { "op": "up", "at": [20, 0] },
//!   { "op": "undo" },
//!   { "op": "clear" }
//! ]
//! ```
//!
//! In a `stroke`, the first point is the pointer down, the last is the
//! pointer up and everything between is a move.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::error::{PadError, Result};
use crate::types::{Colour, Point};

/// One scripted UI event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Command {
    #[serde(alias = "color")]
    Colour { value: Colour },
    Width { value: f32 },
    Stroke { points: Vec<Point> },
    Down { at: Point },
    Move { at: Point },
    Up { at: Point },
    Undo,
    Clear,
}

/// Counts of what a script did to a canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    pub strokes: usize,
    pub undone: usize,
    pub clears: usize,
}

/// An ordered list of commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    pub commands: Vec<Command>,
}

impl Script {
    /// Parse a script from JSON.
    pub fn parse(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| PadError::Parse {
            message: format!("Invalid gesture script: {}", e),
            help: Some("Expected a JSON array of {\"op\": ...} objects".to_string()),
        })
    }

    /// Read and parse a script file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| PadError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read script: {}", e),
        })?;
        Self::parse(&source)
    }

    /// Feed every command to `canvas` in order.
    ///
    /// An invalid brush width stops the script with an error; commands
    /// before it have already been applied.
    pub fn apply(&self, canvas: &mut Canvas) -> Result<ScriptSummary> {
        let mut summary = ScriptSummary::default();

        for (index, command) in self.commands.iter().enumerate() {
            match command {
                Command::Colour { value } => canvas.set_brush_colour(*value),
                Command::Width { value } => {
                    canvas.set_brush_width(*value).map_err(|e| PadError::Validation {
                        message: format!("command {}: {}", index, e),
                        help: Some("Brush width must be a positive number of pixels".to_string()),
                    })?;
                }
                Command::Stroke { points } => {
                    if let Some((&first, rest)) = points.split_first() {
                        canvas.gesture_start(first);
                        let (last, moves) = rest.split_last().map_or((first, &[][..]), |(l, m)| (*l, m));
                        for &point in moves {
                            canvas.gesture_move(point);
                        }
                        if canvas.gesture_end(last) {
                            summary.strokes += 1;
                        }
                    }
                }
                Command::Down { at } => canvas.gesture_start(*at),
                Command::Move { at } => {
                    canvas.gesture_move(*at);
                }
                Command::Up { at } => {
                    if canvas.gesture_end(*at) {
                        summary.strokes += 1;
                    }
                }
                Command::Undo => {
                    if canvas.undo() {
                        summary.undone += 1;
                    }
                }
                Command::Clear => {
                    canvas.clear();
                    summary.clears += 1;
                }
            }
        }

        Ok(summary)
    }
}
