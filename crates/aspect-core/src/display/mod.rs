//! Primary display resolution control.
//!
//! - `types` - `Resolution` and the aspect-ratio presets
//! - `traits` - `DisplayBackend`, the narrow OS interface
//! - `backends` - the Win32 implementation and platform selection
//! - `controller` - `DisplayController`, which caches the native resolution
//! - `input` - parsing of the custom width/height fields

pub mod backends;
pub mod controller;
pub mod errors;
pub mod input;
pub mod traits;
pub mod types;

pub use backends::primary_backend;
pub use controller::DisplayController;
pub use errors::DisplayError;
pub use input::parse_resolution_fields;
pub use traits::DisplayBackend;
pub use types::{Resolution, ResolutionPreset, default_presets, native_label};
