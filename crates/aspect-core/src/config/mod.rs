//! # Configuration System
//!
//! Optional TOML configuration for Aspect, read from `~/.aspect/config.toml`.
//! Every field has a default, so the file may be absent or partial.
//!
//! ```rust,no_run
//! use aspect_core::config::AspectConfig;
//!
//! fn example() -> Result<(), aspect_core::errors::ConfigError> {
//!     let config = AspectConfig::load()?;
//!     for preset in &config.presets {
//!         println!("{}", preset.label());
//!     }
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use loading::ConfigSource;
pub use types::{AspectConfig, LoggingConfig, WindowConfig};
pub use validation::{MAX_PRESETS, validate_config};

impl AspectConfig {
    /// Load the user configuration.
    ///
    /// See [`loading::load_config`] for details.
    pub fn load() -> Result<Self, crate::errors::ConfigError> {
        loading::load_config()
    }

    /// Load the user configuration along with where it came from.
    ///
    /// See [`loading::load_config_with_source`] for details.
    pub fn load_with_source() -> Result<(Self, ConfigSource), crate::errors::ConfigError> {
        loading::load_config_with_source()
    }

    /// Load the user configuration, falling back to defaults on error.
    pub fn load_or_default() -> Self {
        loading::load_config_or_default()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
