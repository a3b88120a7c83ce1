//! Configuration type definitions for Aspect.
//!
//! # Example Configuration
//!
//! ```toml
//! [window]
//! always_on_top = true
//! rounded_corners = true
//!
//! [logging]
//! quiet = false
//!
//! [[presets]]
//! aspect = "16:9"
//! width = 1920
//! height = 1080
//! ```

use serde::{Deserialize, Serialize};

use crate::display::types::ResolutionPreset;

/// Main configuration loaded from `~/.aspect/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AspectConfig {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Aspect-ratio buttons shown below the native button.
    #[serde(default = "super::defaults::default_presets")]
    pub presets: Vec<ResolutionPreset>,
}

/// Cosmetic window hints applied when the window is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "super::defaults::default_true")]
    pub always_on_top: bool,

    #[serde(default = "super::defaults::default_true")]
    pub rounded_corners: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoggingConfig {
    /// Only emit error-level events.
    #[serde(default)]
    pub quiet: bool,
}
