//! Finalized strokes.

use crate::error::Result;
use crate::geometry::Curve;
use crate::types::{validate_width, Colour};

/// One finished gesture: geometry plus the colour and width it was drawn
/// with. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    curve: Curve,
    colour: Colour,
    width: f32,
}

impl Stroke {
    /// Create a stroke. Fails unless `width` is finite and positive, so
    /// every stored stroke can be written and read back.
    pub fn new(curve: Curve, colour: Colour, width: f32) -> Result<Self> {
        validate_width(width)?;
        Ok(Self {
            curve,
            colour,
            width,
        })
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}
