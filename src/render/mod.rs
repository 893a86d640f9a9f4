//! Rendering module for strokepad.
//!
//! The model knows nothing about pixels. A front end implements `Surface`
//! (or uses the bundled `RasterSurface`) and calls `render` every frame.

mod png;
mod raster;

pub use png::write_png;
pub use raster::RasterSurface;

use crate::canvas::Canvas;
use crate::geometry::Curve;
use crate::types::{BrushState, Colour, Stroke};

/// Something curves can be stroked onto.
pub trait Surface {
    /// Stroke `curve` with round caps and joins.
    fn draw_curve(&mut self, curve: &Curve, colour: Colour, width: f32);
}

/// Draw every stored stroke in order with its own colour and width, then the
/// live gesture on top with the current brush.
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    strokes: &[Stroke],
    live: Option<&Curve>,
    brush: &BrushState,
) {
    for stroke in strokes {
        surface.draw_curve(stroke.curve(), stroke.colour(), stroke.width());
    }
    if let Some(curve) = live {
        surface.draw_curve(curve, brush.colour(), brush.width());
    }
}

/// Render a whole canvas, including any gesture in progress.
pub fn render_canvas<S: Surface + ?Sized>(surface: &mut S, canvas: &Canvas) {
    render(
        surface,
        canvas.store().snapshot(),
        canvas.live_curve(),
        canvas.brush(),
    );
}
