//! Application configuration.
//!
//! Read once at startup from the JSON file named by `SKETCHPAD_CONFIG`.
//! Every field has a default, so a partial file (or no file) is fine.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use sketch_core::HistoryConfig;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::editor::{PaletteColor, DEFAULT_STROKE_WIDTH};

/// Environment variable holding the config file path.
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub canvas: CanvasConfig,
    pub history: HistoryConfig,
    pub stroke: StrokeConfig,
    pub log: LogConfig,
}

/// Canvas size in logical points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// `None` uses the display's native scale.
    pub pixels_per_point: Option<f32>,
    pub background: [u8; 3],
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 540,
            pixels_per_point: None,
            background: [255, 255, 255],
        }
    }
}

/// Stroke style the canvas starts with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeConfig {
    pub color: PaletteColor,
    pub width: f32,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            color: PaletteColor::Black,
            width: DEFAULT_STROKE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub debug: bool,
}

/// Load a config file from disk.
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<AppConfig> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let config: AppConfig = serde_json::from_str(&data)
        .with_context(|| format!("parse config json: {}", path.display()))?;
    Ok(config)
}

/// Load the config at `path`, or fall back to defaults when no path is given.
pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            debug!("No config path given, using defaults");
            Ok(AppConfig::default())
        }
    }
}
