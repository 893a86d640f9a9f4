//! Draw command implementation.
//!
//! Plays a gesture script onto a canvas and saves the result as a named
//! drawing.

use std::path::PathBuf;

use clap::Args;

use crate::canvas::Canvas;
use crate::error::Result;
use crate::library::{DrawingLibrary, Settings};
use crate::output::{display_path, plural, Printer};
use crate::script::Script;

/// Play a gesture script onto a drawing and save it
#[derive(Args, Debug)]
pub struct DrawArgs {
    /// Gesture script (JSON)
    #[arg(required = true)]
    pub script: PathBuf,

    /// Name to save the drawing under
    #[arg(long, short)]
    pub name: String,

    /// Start from the existing drawing of that name instead of a blank canvas
    #[arg(long)]
    pub append: bool,
}

pub fn run(args: DrawArgs, settings: &Settings, printer: &Printer) -> Result<()> {
    let library = DrawingLibrary::from_settings(settings);
    let script = Script::load(&args.script)?;

    let mut canvas = Canvas::with_brush(settings.brush);
    if args.append && library.exists(&args.name) {
        let path = library.load(&args.name, &mut canvas)?;
        printer.info(
            "Loaded",
            &format!("{} from {}", plural(canvas.store().len(), "stroke", "strokes"), display_path(&path)),
        );
    }

    let summary = script.apply(&mut canvas)?;
    printer.status(
        "Drew",
        &format!(
            "{} ({} undone, {} cleared)",
            plural(summary.strokes, "stroke", "strokes"),
            summary.undone,
            summary.clears
        ),
    );

    let path = library.save(&args.name, &canvas)?;
    printer.success(
        "Saved",
        &format!("{} to {}", plural(canvas.store().len(), "stroke", "strokes"), display_path(&path)),
    );

    Ok(())
}
