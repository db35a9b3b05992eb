use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::{
    core::Canvas,
    error::{SierpinskiError, SierpinskiResult},
};

/// Side of the default square canvas, in pixels.
pub const CANVAS_SIZE: u32 = 500;
/// Edge length of the default base triangle, in pixels.
pub const TRIANGLE_LENGTH: u32 = 450;

/// Drawing extent for one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SierpinskiConfig {
    /// Surface the fractal is painted onto.
    pub canvas: Canvas,
    /// Edge length of the base triangle. Anything past the canvas is clipped.
    pub triangle_length: u32,
}

impl Default for SierpinskiConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::square(CANVAS_SIZE),
            triangle_length: TRIANGLE_LENGTH,
        }
    }
}

impl SierpinskiConfig {
    /// Reject values the geometry cannot represent.
    pub fn validate(&self) -> SierpinskiResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(SierpinskiError::validation(
                "canvas width and height must be > 0",
            ));
        }
        if self.triangle_length == 0 {
            return Err(SierpinskiError::validation("triangle_length must be > 0"));
        }
        if i32::try_from(self.triangle_length).is_err() {
            return Err(SierpinskiError::validation(
                "triangle_length must fit in i32",
            ));
        }
        Ok(())
    }

    /// Base triangle edge length in the signed pixel space of the geometry.
    pub fn length_px(&self) -> SierpinskiResult<i32> {
        i32::try_from(self.triangle_length)
            .map_err(|_| SierpinskiError::validation("triangle_length must fit in i32"))
    }

    /// Parse a config from JSON text. Missing fields fall back to the defaults.
    pub fn from_json_str(s: &str) -> SierpinskiResult<Self> {
        let cfg: Self =
            serde_json::from_str(s).map_err(|e| SierpinskiError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load and validate a config file.
    pub fn from_json_path(path: &Path) -> SierpinskiResult<Self> {
        let f = File::open(path).map_err(|e| {
            SierpinskiError::Other(anyhow::Error::new(e).context(format!(
                "open config '{}'",
                path.display()
            )))
        })?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| SierpinskiError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
