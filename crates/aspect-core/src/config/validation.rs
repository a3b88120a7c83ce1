use crate::config::types::AspectConfig;
use crate::errors::ConfigError;

/// Upper bound on aspect presets; the window has a fixed height.
pub const MAX_PRESETS: usize = 3;

pub fn validate_config(config: &AspectConfig) -> Result<(), ConfigError> {
    if config.presets.is_empty() || config.presets.len() > MAX_PRESETS {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "expected between 1 and {MAX_PRESETS} presets, found {}",
                config.presets.len()
            ),
        });
    }

    for preset in &config.presets {
        if preset.aspect.trim().is_empty() {
            return Err(ConfigError::InvalidPreset {
                aspect: preset.aspect.clone(),
                message: "aspect label cannot be empty".to_string(),
            });
        }
        if preset.width == 0 || preset.height == 0 {
            return Err(ConfigError::InvalidPreset {
                aspect: preset.aspect.clone(),
                message: format!(
                    "width and height must be positive, got {}x{}",
                    preset.width, preset.height
                ),
            });
        }
    }

    Ok(())
}
