//! PNG output for rendered drawings.
//!
//! Writes a raster surface to a PNG file with optional integer scaling.

use std::path::Path;

use image::{ImageBuffer, RgbaImage};
use tracing::debug;

use crate::error::{PadError, Result};

use super::RasterSurface;

/// Write a rendered surface to a PNG file.
///
/// # Arguments
///
/// * `surface` - The rendered surface to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(surface: &RasterSurface, path: &Path, scale: u32) -> Result<()> {
    let scale = scale.max(1); // Minimum scale of 1
    let source = surface.image();

    let img: RgbaImage = if scale == 1 {
        source.clone()
    } else {
        // Nearest-neighbour, so each source pixel becomes a solid block.
        ImageBuffer::from_fn(source.width() * scale, source.height() * scale, |x, y| {
            *source.get_pixel(x / scale, y / scale)
        })
    };

    img.save(path).map_err(|e| PadError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    debug!(path = %path.display(), width = img.width(), height = img.height(), "wrote png");
    Ok(())
}
