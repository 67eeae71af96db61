//! Palette request configuration.
//!
//! A [`PaletteConfig`] describes one palette: the base color, the harmony
//! mode and the number of swatches. It can be loaded from JSON files or
//! constructed programmatically:
//!
//! ```no_run
//! use hue_toolkit::PaletteConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = PaletteConfig::from_json_file(Path::new("palette.json"))?;
//!
//! // Or use defaults
//! let config = PaletteConfig::default();
//! let colors = config.generate()?;
//! # Ok::<(), hue_toolkit::ColorError>(())
//! ```
//!
//! The JSON form uses canonical hex strings and mode keywords:
//!
//! ```json
//! { "base": "#3366CC", "mode": "analogous", "count": 5 }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::{HexColor, RgbColor};
use crate::constants::MAX_PALETTE_SIZE;
use crate::generation::{generate_harmony, HarmonyMode};
use crate::{ColorError, Result};

/// Parameters for a single palette generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Base color; ignored by mood modes
    pub base: HexColor,

    /// Harmony mode keyword
    pub mode: HarmonyMode,

    /// Number of swatches to generate
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    5
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            base: HexColor::from_rgb(RgbColor::new(0x33, 0x66, 0xCC)),
            mode: HarmonyMode::Analogous,
            count: default_count(),
        }
    }
}

impl PaletteConfig {
    pub fn new(base: HexColor, mode: HarmonyMode, count: usize) -> Self {
        Self { base, mode, count }
    }

    /// Check that the requested palette size is within bounds
    pub fn validate(&self) -> Result<()> {
        if self.count > MAX_PALETTE_SIZE {
            return Err(ColorError::invalid_parameter("count", self.count));
        }
        Ok(())
    }

    /// Validate and generate the palette
    pub fn generate(&self) -> Result<Vec<HexColor>> {
        self.validate()?;
        Ok(generate_harmony(&self.base, self.mode, self.count))
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ColorError::config_format("parse palette config", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ColorError::config_io(format!("read {}", path.display()), e))?;
        Self::from_json_str(&content)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ColorError::config_format("encode palette config", e))?;
        std::fs::write(path, json)
            .map_err(|e| ColorError::config_io(format!("write {}", path.display()), e))?;
        Ok(())
    }
}
