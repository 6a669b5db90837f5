// Viewer settings. Defaults match the hosted overview map; a host page may
// override any of them with an `overview-config` JSON script element.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Size;

pub const DEFAULT_OVERVIEW_URL: &str = "https://piqueserver.walladge.net/overview";
pub const CONFIG_ELEMENT_ID: &str = "overview-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub overview_url: String,
    /// Logical side length of the square viewport, in world units at scale 1.
    pub viewport_size: f64,
    pub max_scale: f64,
    pub zoom_base: f64,
    /// Accumulator change per wheel notch.
    pub wheel_step: i32,
    pub entity_count: usize,
    pub entity_tick_ms: i32,
    pub indicator_frame_ms: i32,
    pub grid_divisions: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            overview_url: DEFAULT_OVERVIEW_URL.to_string(),
            viewport_size: 512.0,
            max_scale: 10.0,
            zoom_base: 1.05,
            wheel_step: 2,
            entity_count: 5,
            entity_tick_ms: 500,
            indicator_frame_ms: 1000 / 60,
            grid_divisions: 8,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: ViewerConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.viewport_size >= 0.0) {
            return Err(ConfigError::Invalid("viewport_size must be >= 0"));
        }
        if !(self.max_scale >= 1.0) {
            return Err(ConfigError::Invalid("max_scale must be >= 1"));
        }
        if !(self.zoom_base > 1.0) {
            return Err(ConfigError::Invalid("zoom_base must be > 1"));
        }
        if self.wheel_step < 1 {
            return Err(ConfigError::Invalid("wheel_step must be >= 1"));
        }
        if self.entity_tick_ms <= 0 || self.indicator_frame_ms <= 0 {
            return Err(ConfigError::Invalid("timer periods must be > 0"));
        }
        if self.grid_divisions == 0 {
            return Err(ConfigError::Invalid("grid_divisions must be >= 1"));
        }
        Ok(())
    }

    pub fn viewport(&self) -> Size {
        Size::square(self.viewport_size)
    }

    /// Reads the override element from the current document, falling back to
    /// defaults when it is absent or malformed.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|err| {
                log::warn!("{err}; using default viewer config");
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}
