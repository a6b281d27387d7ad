//! Session configuration
//!
//! Defaults reproduce the classic setup: an 800x600 window, a radius 50
//! player circle in the middle and ten random circles around it. A JSON file
//! may override any subset of the fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::Error;
use crate::sim::PushMode;

/// Everything the bootstrap layer hands to a new session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Window bounds; ambient bodies are scattered over `[0,width] x [0,height]`
    pub width: f32,
    pub height: f32,
    /// Population seed
    pub seed: u64,
    /// Ticks per second
    pub tick_hz: u32,
    /// Distance moved per tick along each held axis
    pub move_step: f32,

    pub controlled_radius: f32,
    pub ambient_count: usize,
    /// Inclusive range of ambient radii
    pub ambient_radius_min: u32,
    pub ambient_radius_max: u32,

    /// Mode for ambient-ambient resolution. `push_both` matches the older
    /// behavior where both circles of an ambient pair were moved.
    pub ambient_push: PushMode,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            seed: 0,
            tick_hz: TICK_HZ,
            move_step: MOVE_STEP,
            controlled_radius: CONTROLLED_RADIUS,
            ambient_count: AMBIENT_COUNT,
            ambient_radius_min: AMBIENT_RADIUS_MIN,
            ambient_radius_max: AMBIENT_RADIUS_MAX,
            ambient_push: PushMode::PushA,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "window must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.controlled_radius > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "controlled_radius must be positive, got {}",
                self.controlled_radius
            )));
        }
        if self.ambient_radius_min == 0 || self.ambient_radius_min > self.ambient_radius_max {
            return Err(Error::InvalidConfig(format!(
                "ambient radius range {}..={} is empty or includes zero",
                self.ambient_radius_min, self.ambient_radius_max
            )));
        }
        if !(self.move_step > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "move_step must be positive, got {}",
                self.move_step
            )));
        }
        if self.tick_hz == 0 {
            return Err(Error::InvalidConfig("tick_hz must be nonzero".into()));
        }
        Ok(())
    }

    /// Length of one tick in seconds
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_hz as f32
    }
}
