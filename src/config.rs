use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::network::NetworkTuning;
use crate::render::Palette;
use crate::scheduler::DEFAULT_RESIZE_DEBOUNCE_MS;

/// Settings read from the optional JSON config file. Missing fields keep their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    pub window_size: [f32; 2],
    /// Frames of fading history kept by the trail canvas.
    pub trail_frames: usize,
    pub resize_debounce_ms: u64,
    pub show_stats: bool,
    pub accent: [u8; 3],
    pub tuning: NetworkTuning,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            window_size: [1440.0, 920.0],
            trail_frames: 16,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            show_stats: false,
            accent: [59, 130, 246],
            tuning: NetworkTuning::default(),
        }
    }
}

impl BackdropConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("config is not valid backdrop JSON")
    }

    pub fn palette(&self) -> Palette {
        Palette::from_accent(self.accent)
    }

    pub fn resize_debounce_secs(&self) -> f64 {
        self.resize_debounce_ms as f64 / 1000.0
    }
}
