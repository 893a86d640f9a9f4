//! Project settings (strokepad.yaml) parsing.
//!
//! Settings name the drawing library directory and seed the brush and the
//! canvas used for rendering.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PadError, Result};
use crate::types::{validate_width, BrushState, Colour};

/// Settings loaded from strokepad.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding drawing files.
    #[serde(default = "default_drawings")]
    pub drawings: PathBuf,

    /// Extension of drawing files, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Brush a new canvas starts with.
    #[serde(default)]
    pub brush: BrushState,

    /// Raster size and background used by `render`.
    #[serde(default)]
    pub canvas: CanvasSettings,

    /// Default integer upscaling for PNG output.
    #[serde(default)]
    pub scale: Option<u32>,
}

/// Raster canvas settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub width: u32,
    pub height: u32,
    pub background: Colour,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1920,
            background: Colour::WHITE,
        }
    }
}

fn default_drawings() -> PathBuf {
    PathBuf::from(".")
}

fn default_extension() -> String {
    "paint".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            drawings: default_drawings(),
            extension: default_extension(),
            brush: BrushState::default(),
            canvas: CanvasSettings::default(),
            scale: None,
        }
    }
}

impl Settings {
    /// Load settings from a strokepad.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PadError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read settings: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse settings from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content).map_err(|e| PadError::Parse {
            message: format!("Invalid settings: {}", e),
            help: Some("Check strokepad.yaml syntax".to_string()),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load `strokepad.yaml` from `dir` if present, otherwise use defaults.
    /// A relative `drawings` path is resolved against `dir`.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(super::SETTINGS_FILENAME);
        let mut settings = if path.is_file() {
            Self::load(&path)?
        } else {
            Self::default()
        };

        if settings.drawings.is_relative() {
            settings.drawings = dir.join(&settings.drawings);
        }
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        validate_width(self.brush.width()).map_err(|_| PadError::Parse {
            message: format!("Invalid brush width in settings: {}", self.brush.width()),
            help: Some("brush.width must be a positive number".to_string()),
        })?;

        if self.extension.is_empty() || self.extension.contains(['.', '/', '\\']) {
            return Err(PadError::Parse {
                message: format!("Invalid drawing extension: {:?}", self.extension),
                help: Some("Use a bare extension such as `paint`".to_string()),
            });
        }

        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(PadError::Parse {
                message: "Canvas dimensions must be non-zero".to_string(),
                help: None,
            });
        }

        Ok(())
    }

    /// Get the effective scale factor.
    pub fn effective_scale(&self) -> u32 {
        self.scale.unwrap_or(1).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_parse_minimal_settings() {
        let settings = Settings::parse("drawings: art").unwrap();

        assert_eq!(settings.drawings, PathBuf::from("art"));
        assert_eq!(settings.extension, "paint");
        assert!(settings.scale.is_none());
    }

    #[test]
    fn test_parse_full_settings() {
        let yaml = r##"
drawings: sketches/
extension: sketch
brush:
  colour: "#336699"
  width: 3.5
canvas:
  width: 640
  height: 480
  background: "#000"
scale: 2
"##;
        let settings = Settings::parse(yaml).unwrap();

        assert_eq!(settings.drawings, PathBuf::from("sketches/"));
        assert_eq!(settings.extension, "sketch");
        assert_eq!(settings.brush, BrushState::new(Colour::rgb(0x33, 0x66, 0x99), 3.5).unwrap());
        assert_eq!(
            settings.canvas,
            CanvasSettings {
                width: 640,
                height: 480,
                background: Colour::BLACK,
            }
        );
        assert_eq!(settings.effective_scale(), 2);
    }

    #[test]
    fn test_parse_empty_settings() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Settings::parse("brush:\n  width: 0").is_err());
        assert!(Settings::parse("extension: .paint").is_err());
        assert!(Settings::parse("canvas:\n  width: 0").is_err());
        assert!(Settings::parse("brush:\n  colour: red").is_err());
        assert!(Settings::parse("scale: [1").is_err());
    }

    #[test]
    fn test_effective_scale_never_zero() {
        let settings = Settings {
            scale: Some(0),
            ..Default::default()
        };
        assert_eq!(settings.effective_scale(), 1);
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::discover(dir.path()).unwrap();
        assert_eq!(settings.drawings, dir.path().join("."));
        assert_eq!(settings.brush, BrushState::default());
    }

    #[test]
    fn test_discover_resolves_relative_drawings() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("strokepad.yaml"), "drawings: art\n").unwrap();

        let settings = Settings::discover(dir.path()).unwrap();
        assert_eq!(settings.drawings, dir.path().join("art"));
    }
}
