//! Environment settings
//!
//! Loaded from JSON; every field has a default so partial files are accepted.

use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::AGENT_RADIUS;
use crate::error::Result;

/// Directional light of the stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightConfig {
    pub direction: Vec3,
    pub color: Vec3,
    pub ambient_color: Vec3,
    /// Darkening factor applied inside shadows (0.0 - 1.0)
    pub shadow_rate: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            direction: Vec3::new(0.5, -1.0, -0.5),
            color: Vec3::ONE,
            ambient_color: Vec3::splat(0.4),
            shadow_rate: 0.2,
        }
    }
}

/// Environment construction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Agent camera frame width in pixels
    pub width: u32,
    /// Agent camera frame height in pixels
    pub height: u32,
    /// Side of the square top-view frame
    pub top_view_size: u32,
    /// Seed for randomized placement fallbacks (None = draw one)
    pub seed: Option<u64>,
    /// Add raw world pose to step info
    pub debug: bool,
    /// Root directory of textures and models
    pub data_path: PathBuf,
    pub background_color: Vec3,
    pub light: LightConfig,
    pub agent_radius: f32,
    pub shadow_buffer_width: u32,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            width: 84,
            height: 84,
            top_view_size: 256,
            seed: None,
            debug: false,
            data_path: PathBuf::from("data"),
            background_color: Vec3::new(0.19, 0.3, 0.47),
            light: LightConfig::default(),
            agent_radius: AGENT_RADIUS,
            shadow_buffer_width: 1024,
        }
    }
}

impl EnvConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded environment settings from {}", path.display());
        Ok(config)
    }

    /// Resolve an asset path under `data_path`
    pub fn asset(&self, relative: &str) -> PathBuf {
        self.data_path.join(relative)
    }
}
