//! Default implementations for configuration types.

use crate::config::types::{AspectConfig, WindowConfig};
use crate::display::types::{self, ResolutionPreset};

/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_true() -> bool {
    true
}

/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_presets() -> Vec<ResolutionPreset> {
    types::default_presets()
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            always_on_top: true,
            rounded_corners: true,
        }
    }
}

impl Default for AspectConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            logging: Default::default(),
            presets: default_presets(),
        }
    }
}
