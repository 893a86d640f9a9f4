//! Core domain types for strokepad.
//!
//! - `Point` - surface-local pointer position
//! - `Colour` - opaque RGB colour
//! - `BrushState` - live brush colour and width
//! - `Stroke` - a finalized, immutable stroke

mod brush;
mod colour;
mod point;
mod stroke;

pub use brush::{validate_width, BrushState, DEFAULT_WIDTH};
pub use colour::Colour;
pub use point::{Point, MAX_COORDINATE};
pub use stroke::Stroke;
