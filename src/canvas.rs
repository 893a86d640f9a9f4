//! The drawing surface model driven by the UI layer.
//!
//! `Canvas` ties together the brush, the in-progress gesture and the stroke
//! store, and exposes the handful of operations a front end needs: brush
//! changes, pointer events, undo/clear, and save/load as bytes.

use tracing::{debug, trace, warn};

use crate::codec;
use crate::error::Result;
use crate::geometry::{Curve, StrokeBuilder};
use crate::store::StrokeStore;
use crate::types::{BrushState, Colour, Point};

/// Single-owner drawing state.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    store: StrokeStore,
    brush: BrushState,
    gesture: Option<StrokeBuilder>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// A blank canvas with the given starting brush.
    pub fn with_brush(brush: BrushState) -> Self {
        Self {
            brush,
            ..Self::default()
        }
    }

    pub fn set_brush_colour(&mut self, colour: Colour) {
        self.brush.set_colour(colour);
    }

    /// Change the width used by future strokes. Invalid widths are rejected
    /// and the brush keeps its current width.
    pub fn set_brush_width(&mut self, width: f32) -> Result<()> {
        self.brush.set_width(width)
    }

    /// Pointer down. Any gesture already in progress is dropped. Points
    /// that are not finite or lie beyond `MAX_COORDINATE` are ignored here
    /// and in the other gesture events.
    pub fn gesture_start(&mut self, p: Point) {
        if !p.in_bounds() {
            return;
        }
        if self.gesture.is_some() {
            debug!("gesture restarted before pointer up");
        }
        self.gesture = Some(StrokeBuilder::begin(p));
    }

    /// Pointer move. Returns whether geometry was added; moves without a
    /// preceding start are ignored.
    pub fn gesture_move(&mut self, p: Point) -> bool {
        if !p.in_bounds() {
            return false;
        }
        match self.gesture.as_mut() {
            Some(builder) => builder.extend(p),
            None => {
                trace!("move without gesture ignored");
                false
            }
        }
    }

    /// Pointer up. Finalizes the gesture into a stroke with the current
    /// brush. Returns `false` if no gesture was in progress or the stroke
    /// was rejected.
    pub fn gesture_end(&mut self, p: Point) -> bool {
        let Some(builder) = self.gesture.take() else {
            trace!("pointer up without gesture ignored");
            return false;
        };
        let end = if p.in_bounds() { p } else { builder.last() };
        let curve = builder.end(end);
        match self
            .store
            .append(curve, self.brush.colour(), self.brush.width())
        {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "stroke dropped");
                false
            }
        }
    }

    /// Drop the in-progress gesture without storing it.
    pub fn cancel_gesture(&mut self) {
        self.gesture = None;
    }

    /// The curve of the gesture in progress, if any.
    pub fn live_curve(&self) -> Option<&Curve> {
        self.gesture.as_ref().map(StrokeBuilder::curve)
    }

    /// Remove the most recent stroke. Returns whether anything was removed.
    pub fn undo(&mut self) -> bool {
        self.store.undo().is_some()
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Serialize the current strokes.
    pub fn save(&self) -> Vec<u8> {
        codec::encode(self.store.snapshot())
    }

    /// Replace the strokes with a decoded drawing. On error the current
    /// strokes are left exactly as they were.
    pub fn load(&mut self, bytes: &[u8]) -> Result<()> {
        let strokes = codec::decode(bytes)?;
        self.store.replace(strokes);
        Ok(())
    }

    pub fn store(&self) -> &StrokeStore {
        &self.store
    }

    pub fn brush(&self) -> &BrushState {
        &self.brush
    }
}
