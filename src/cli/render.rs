//! Render command implementation.
//!
//! Loads a drawing and rasterizes it to a PNG image.

use std::path::PathBuf;

use clap::Args;

use crate::canvas::Canvas;
use crate::error::Result;
use crate::library::{DrawingLibrary, Settings};
use crate::output::{display_path, plural, Printer};
use crate::render::{render_canvas, write_png, RasterSurface};

/// Render a drawing to PNG
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Drawing name
    #[arg(required = true)]
    pub name: String,

    /// Output PNG path (default: <name>.png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Canvas width in pixels (overrides settings)
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels (overrides settings)
    #[arg(long)]
    pub height: Option<u32>,

    /// Scale factor for output (integer upscaling)
    #[arg(long)]
    pub scale: Option<u32>,
}

pub fn run(args: RenderArgs, settings: &Settings, printer: &Printer) -> Result<()> {
    let library = DrawingLibrary::from_settings(settings);

    let mut canvas = Canvas::new();
    let source = library.load(&args.name, &mut canvas)?;

    let width = args.width.unwrap_or(settings.canvas.width).max(1);
    let height = args.height.unwrap_or(settings.canvas.height).max(1);
    let scale = args.scale.unwrap_or_else(|| settings.effective_scale());

    let mut surface = RasterSurface::new(width, height, settings.canvas.background);
    render_canvas(&mut surface, &canvas);

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}.png", args.name.trim())));
    write_png(&surface, &output, scale)?;

    printer.success(
        "Rendered",
        &format!(
            "{} from {} -> {} ({}x{})",
            plural(canvas.store().len(), "stroke", "strokes"),
            display_path(&source),
            display_path(&output),
            width * scale.max(1),
            height * scale.max(1)
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BrushState, Colour, Point};
    use tempfile::tempdir;

    #[test]
    fn test_render_writes_png_with_stroke() {
        let dir = tempdir().unwrap();
        let settings = Settings {
            drawings: dir.path().to_path_buf(),
            ..Default::default()
        };

        let mut canvas = Canvas::with_brush(BrushState::new(Colour::rgb(255, 0, 0), 6.0).unwrap());
        canvas.gesture_start(Point::new(5.0, 20.0));
        canvas.gesture_move(Point::new(20.0, 20.0));
        canvas.gesture_end(Point::new(35.0, 20.0));
        DrawingLibrary::from_settings(&settings)
            .save("line", &canvas)
            .unwrap();

        let output = dir.path().join("line.png");
        let args = RenderArgs {
            name: "line".to_string(),
            output: Some(output.clone()),
            width: Some(40),
            height: Some(40),
            scale: Some(2),
        };
        run(args, &settings, &Printer::new()).unwrap();

        let img = image::open(&output).unwrap().to_rgba8();
        assert_eq!(img.width(), 80);
        assert_eq!(img.height(), 80);
        assert_eq!(img.get_pixel(40, 40).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(2, 2).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_render_missing_drawing_fails() {
        let dir = tempdir().unwrap();
        let settings = Settings {
            drawings: dir.path().to_path_buf(),
            ..Default::default()
        };
        let args = RenderArgs {
            name: "nothing".to_string(),
            output: Some(dir.path().join("nothing.png")),
            width: None,
            height: None,
            scale: None,
        };
        assert!(run(args, &settings, &Printer::new()).is_err());
    }
}
