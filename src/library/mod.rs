//! Named drawings on disk.
//!
//! A library is one directory of `<name>.<extension>` files, each holding a
//! single encoded drawing. Project settings come from an optional
//! `strokepad.yaml`.
//!
//! # Example
//!
//! ```ignore
//! use strokepad::{Canvas, DrawingLibrary};
//!
//! let library = DrawingLibrary::new("drawings", "paint");
//! let mut canvas = Canvas::new();
//! library.load("sunset", &mut canvas)?;
//! ```

mod scanner;
mod settings;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::canvas::Canvas;
use crate::error::{PadError, Result};

pub use scanner::scan_drawings;
pub use settings::{CanvasSettings, Settings};

/// The name of the settings file.
pub const SETTINGS_FILENAME: &str = "strokepad.yaml";

/// A directory of saved drawings.
#[derive(Debug, Clone)]
pub struct DrawingLibrary {
    root: PathBuf,
    extension: String,
}

impl DrawingLibrary {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.drawings.clone(), settings.extension.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path for a drawing name. Names are trimmed; empty names and
    /// names that would escape the library directory are rejected.
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        let name = validate_name(name)?;
        Ok(self.root.join(format!("{}.{}", name, self.extension)))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).map(|p| p.is_file()).unwrap_or(false)
    }

    /// Names of all saved drawings, sorted.
    pub fn list(&self) -> Vec<String> {
        scan_drawings(&self.root, &self.extension)
    }

    /// Encode the canvas and write it under `name`, replacing any existing
    /// drawing of that name. The bytes go to a temporary file in the same
    /// directory which is then renamed over the target, so a failed write
    /// never damages the previous drawing.
    pub fn save(&self, name: &str, canvas: &Canvas) -> Result<PathBuf> {
        let path = self.path_for(name)?;

        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| PadError::Io {
                path: self.root.clone(),
                message: format!("Failed to create drawings directory: {}", e),
            })?;
        }

        let bytes = canvas.save();
        let write_err = |e: std::io::Error| PadError::Io {
            path: path.clone(),
            message: format!("Failed to write drawing: {}", e),
        };
        let mut file = NamedTempFile::new_in(&self.root).map_err(write_err)?;
        file.write_all(&bytes).map_err(write_err)?;
        file.as_file().sync_all().map_err(write_err)?;
        file.persist(&path).map_err(|e| write_err(e.error))?;

        info!(path = %path.display(), strokes = canvas.store().len(), "saved drawing");
        Ok(path)
    }

    /// Read the raw bytes of the drawing `name`.
    pub fn read(&self, name: &str) -> Result<(PathBuf, Vec<u8>)> {
        let path = self.path_for(name)?;
        let bytes = fs::read(&path).map_err(|e| PadError::Io {
            path: path.clone(),
            message: format!("Failed to read drawing: {}", e),
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "read drawing");
        Ok((path, bytes))
    }

    /// Read the drawing `name` into `canvas`, replacing its strokes. On any
    /// failure the canvas is untouched.
    pub fn load(&self, name: &str, canvas: &mut Canvas) -> Result<PathBuf> {
        let (path, bytes) = self.read(name)?;
        canvas.load(&bytes)?;
        info!(path = %path.display(), strokes = canvas.store().len(), "loaded drawing");
        Ok(path)
    }
}

fn validate_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PadError::Validation {
            message: "Drawing name is empty".to_string(),
            help: Some("Enter a file name".to_string()),
        });
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(PadError::Validation {
            message: format!("Invalid drawing name: {}", name),
            help: Some("Names cannot contain path separators".to_string()),
        });
    }
    Ok(name)
}
