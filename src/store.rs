//! The ordered stroke list.
//!
//! Insertion order is draw order and persistence order. Strokes only ever
//! leave from the end (undo) or all at once (clear, load).

use tracing::debug;

use crate::error::Result;
use crate::geometry::Curve;
use crate::types::{Colour, Stroke};

/// Ordered, append-only-with-undo collection of finished strokes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeStore {
    strokes: Vec<Stroke>,
}

impl StrokeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finalize `curve` into a stroke and push it on the end. An invalid
    /// width is rejected and the store is left unchanged.
    pub fn append(&mut self, curve: Curve, colour: Colour, width: f32) -> Result<()> {
        self.push(Stroke::new(curve, colour, width)?);
        Ok(())
    }

    /// Push an already-built stroke.
    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
        debug!(count = self.strokes.len(), "stroke appended");
    }

    /// Remove the most recent stroke. Does nothing on an empty store.
    pub fn undo(&mut self) -> Option<Stroke> {
        let removed = self.strokes.pop();
        if removed.is_some() {
            debug!(count = self.strokes.len(), "stroke undone");
        }
        removed
    }

    /// Remove every stroke. There is no undo step for this.
    pub fn clear(&mut self) {
        debug!(removed = self.strokes.len(), "store cleared");
        self.strokes.clear();
    }

    /// Swap in a whole new set of strokes (used when loading a drawing).
    pub fn replace(&mut self, strokes: Vec<Stroke>) {
        self.strokes = strokes;
    }

    /// Read-only view in draw order.
    pub fn snapshot(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stroke> {
        self.strokes.iter()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

impl<'a> IntoIterator for &'a StrokeStore {
    type Item = &'a Stroke;
    type IntoIter = std::slice::Iter<'a, Stroke>;

    fn into_iter(self) -> Self::IntoIter {
        self.strokes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn line(x0: f32, x1: f32) -> Curve {
        let mut curve = Curve::starting_at(Point::new(x0, 0.0));
        curve.line_to(Point::new(x1, 0.0));
        curve
    }

    #[test]
    fn test_append_keeps_order() {
        let mut store = StrokeStore::new();
        store.append(line(0.0, 1.0), Colour::BLACK, 1.0).unwrap();
        store.append(line(1.0, 2.0), Colour::WHITE, 2.0).unwrap();
        store.append(line(2.0, 3.0), Colour::rgb(255, 0, 0), 3.0).unwrap();

        let widths: Vec<f32> = store.iter().map(Stroke::width).collect();
        assert_eq!(widths, vec![1.0, 2.0, 3.0]);
        assert_eq!(store.snapshot()[2].colour(), Colour::rgb(255, 0, 0));
    }

    #[test]
    fn test_undo_removes_last() {
        let mut store = StrokeStore::new();
        store.append(line(0.0, 1.0), Colour::BLACK, 1.0).unwrap();
        store.append(line(1.0, 2.0), Colour::WHITE, 2.0).unwrap();

        let removed = store.undo().unwrap();
        assert_eq!(removed.colour(), Colour::WHITE);
        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot()[0].colour(), Colour::BLACK);
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut store = StrokeStore::new();
        assert!(store.undo().is_none());
        assert!(store.undo().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_then_undo_stays_empty() {
        let mut store = StrokeStore::new();
        store.append(line(0.0, 1.0), Colour::BLACK, 1.0).unwrap();
        store.append(line(1.0, 2.0), Colour::BLACK, 1.0).unwrap();
        store.clear();
        assert!(store.is_empty());
        assert!(store.undo().is_none());
    }

    #[test]
    fn test_replace_discards_previous() {
        let mut store = StrokeStore::new();
        store.append(line(0.0, 1.0), Colour::BLACK, 1.0).unwrap();
        store.replace(vec![Stroke::new(line(5.0, 9.0), Colour::WHITE, 4.0).unwrap()]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot()[0].width(), 4.0);
    }

    #[test]
    fn test_append_rejects_zero_width() {
        let mut store = StrokeStore::new();
        store.append(line(0.0, 1.0), Colour::BLACK, 1.0).unwrap();
        assert!(store.append(line(0.0, 5.0), Colour::BLACK, 0.0).is_err());
        assert!(store.append(line(0.0, 5.0), Colour::BLACK, f32::NAN).is_err());
        assert_eq!(store.len(), 1);

        // Whatever is stored can be read back.
        let decoded = crate::codec::decode(&crate::codec::encode(store.snapshot())).unwrap();
        assert_eq!(decoded.len(), 1);
    }
}
