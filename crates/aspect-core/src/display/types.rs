use std::fmt;

use serde::{Deserialize, Serialize};

/// Pixel dimensions of a display mode.
///
/// Used both for the native resolution captured at startup and for every
/// change request. Only the pixel width and height are carried; refresh rate,
/// color depth and orientation are never part of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Both dimensions are non-zero.
    pub fn is_positive(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A fixed resolution offered as a one-click button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionPreset {
    /// Aspect ratio label shown on the button, e.g. `"16:9"`.
    pub aspect: String,
    pub width: u32,
    pub height: u32,
}

impl ResolutionPreset {
    pub fn new(aspect: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            aspect: aspect.into(),
            width,
            height,
        }
    }

    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.width, self.height)
    }

    /// Button label, e.g. `"16:9 • 1920x1080"`.
    pub fn label(&self) -> String {
        format!("{} • {}", self.aspect, self.resolution())
    }
}

/// The three aspect-ratio presets offered next to the native button.
pub fn default_presets() -> Vec<ResolutionPreset> {
    vec![
        ResolutionPreset::new("16:9", 1920, 1080),
        ResolutionPreset::new("4:3", 1440, 1080),
        ResolutionPreset::new("21:9", 2560, 1080),
    ]
}

/// Text for the informational native resolution label.
pub fn native_label(native: Resolution) -> String {
    format!("Native Resolution: {} x {}", native.width, native.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_display() {
        assert_eq!(Resolution::new(1920, 1080).to_string(), "1920x1080");
    }

    #[test]
    fn test_resolution_is_positive() {
        assert!(Resolution::new(1, 1).is_positive());
        assert!(!Resolution::new(0, 1080).is_positive());
        assert!(!Resolution::new(1920, 0).is_positive());
    }

    #[test]
    fn test_default_preset_labels() {
        let labels: Vec<String> = default_presets().iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            vec![
                "16:9 • 1920x1080".to_string(),
                "4:3 • 1440x1080".to_string(),
                "21:9 • 2560x1080".to_string(),
            ]
        );
    }

    #[test]
    fn test_preset_resolution() {
        let preset = ResolutionPreset::new("21:9", 2560, 1080);
        assert_eq!(preset.resolution(), Resolution::new(2560, 1080));
    }

    #[test]
    fn test_native_label() {
        assert_eq!(
            native_label(Resolution::new(3840, 2160)),
            "Native Resolution: 3840 x 2160"
        );
    }
}
