//! CPU rasterizer over an RGBA image.

use image::{Rgba, RgbaImage};

use crate::geometry::{Curve, MEASURE_TOLERANCE};
use crate::types::{Colour, Point};

use super::Surface;

/// An in-memory image that strokes are composited onto.
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// Create a surface filled with `background`.
    pub fn new(width: u32, height: u32, background: Colour) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(background.to_rgba())),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }

    /// Colour at a pixel, or `None` outside the surface.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let [r, g, b, _] = self.image.get_pixel(x, y).0;
        Some(Colour::rgb(r, g, b))
    }
}

impl Surface for RasterSurface {
    fn draw_curve(&mut self, curve: &Curve, colour: Colour, width: f32) {
        let points = curve.flatten(MEASURE_TOLERANCE);
        // A bare move-to has no segments to stroke.
        if points.len() < 2 || width.is_nan() || width <= 0.0 {
            return;
        }
        let radius = width / 2.0;

        let Some(bounds) = Bounds::around(&points, radius + 1.0, self.width(), self.height())
        else {
            return;
        };

        // Coverage is taken as the max over segments so joins don't darken.
        let mut mask = vec![0.0f32; bounds.area()];
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let Some(seg) = Bounds::around(&[a, b], radius + 1.0, self.width(), self.height())
            else {
                continue;
            };
            for y in seg.y0..seg.y1 {
                for x in seg.x0..seg.x1 {
                    let centre = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                    let coverage = (radius + 0.5 - segment_distance(centre, a, b)).clamp(0.0, 1.0);
                    let slot = &mut mask[bounds.index(x, y)];
                    if coverage > *slot {
                        *slot = coverage;
                    }
                }
            }
        }

        let src = colour.to_rgba();
        for y in bounds.y0..bounds.y1 {
            for x in bounds.x0..bounds.x1 {
                let alpha = mask[bounds.index(x, y)];
                if alpha <= 0.0 {
                    continue;
                }
                let pixel = self.image.get_pixel_mut(x, y);
                for channel in 0..3 {
                    let dst = pixel.0[channel] as f32;
                    let blended = src[channel] as f32 * alpha + dst * (1.0 - alpha);
                    pixel.0[channel] = blended.round().clamp(0.0, 255.0) as u8;
                }
            }
        }
    }
}

/// Half-open pixel rectangle clipped to the surface.
struct Bounds {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl Bounds {
    fn around(points: &[Point], pad: f32, width: u32, height: u32) -> Option<Self> {
        let (mut min_x, mut min_y) = (f32::INFINITY, f32::INFINITY);
        let (mut max_x, mut max_y) = (f32::NEG_INFINITY, f32::NEG_INFINITY);
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        let clip = |v: f32, limit: u32| v.clamp(0.0, limit as f32) as u32;
        let bounds = Self {
            x0: clip((min_x - pad).floor(), width),
            y0: clip((min_y - pad).floor(), height),
            x1: clip((max_x + pad).ceil(), width),
            y1: clip((max_y + pad).ceil(), height),
        };
        (bounds.x0 < bounds.x1 && bounds.y0 < bounds.y1).then_some(bounds)
    }

    fn area(&self) -> usize {
        (self.x1 - self.x0) as usize * (self.y1 - self.y0) as usize
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y - self.y0) as usize * (self.x1 - self.x0) as usize + (x - self.x0) as usize
    }
}

/// Distance from `p` to the segment `a`-`b`.
fn segment_distance(p: Point, a: Point, b: Point) -> f32 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance(a.lerp(b, t))
}
