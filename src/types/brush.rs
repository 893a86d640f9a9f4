//! Live brush state.
//!
//! The brush seeds every stroke finalized after it is set. Strokes copy the
//! colour and width out of the brush, so changing the brush never reaches back
//! into strokes that are already stored.

use serde::{Deserialize, Serialize};

use crate::error::{PadError, Result};
use crate::types::Colour;

/// Default stroke width in pixels.
pub const DEFAULT_WIDTH: f32 = 8.0;

/// Current brush colour and width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushState {
    colour: Colour,
    width: f32,
}

impl Default for BrushState {
    fn default() -> Self {
        Self {
            colour: Colour::BLACK,
            width: DEFAULT_WIDTH,
        }
    }
}

impl BrushState {
    /// Create a brush, validating the width.
    pub fn new(colour: Colour, width: f32) -> Result<Self> {
        let mut brush = Self {
            colour,
            ..Self::default()
        };
        brush.set_width(width)?;
        Ok(brush)
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_colour(&mut self, colour: Colour) {
        self.colour = colour;
    }

    /// Set the stroke width. Rejects zero, negative and non-finite widths and
    /// leaves the current width in place.
    pub fn set_width(&mut self, width: f32) -> Result<()> {
        validate_width(width)?;
        self.width = width;
        Ok(())
    }
}

/// Check that `width` is usable as a stroke width.
pub fn validate_width(width: f32) -> Result<()> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(PadError::Validation {
            message: format!("Invalid brush width: {}", width),
            help: Some("Brush width must be a positive number of pixels".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_brush() {
        let brush = BrushState::default();
        assert_eq!(brush.colour(), Colour::BLACK);
        assert_eq!(brush.width(), 8.0);
    }

    #[test]
    fn test_set_width_rejects_invalid() {
        let mut brush = BrushState::default();
        assert!(brush.set_width(0.0).is_err());
        assert!(brush.set_width(-2.0).is_err());
        assert!(brush.set_width(f32::NAN).is_err());
        assert!(brush.set_width(f32::INFINITY).is_err());
        assert_eq!(brush.width(), 8.0);

        brush.set_width(2.5).unwrap();
        assert_eq!(brush.width(), 2.5);
    }

    #[test]
    fn test_new_validates() {
        assert!(BrushState::new(Colour::WHITE, 0.0).is_err());
        let brush = BrushState::new(Colour::WHITE, 3.0).unwrap();
        assert_eq!(brush.colour(), Colour::WHITE);
    }

    #[test]
    fn test_deserialize_partial() {
        let brush: BrushState = serde_yaml::from_str("colour: \"#FF0000\"").unwrap();
        assert_eq!(brush.colour(), Colour::rgb(255, 0, 0));
        assert_eq!(brush.width(), DEFAULT_WIDTH);
    }
}
