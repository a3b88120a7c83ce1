#[cfg(windows)]
mod win32;

#[cfg(windows)]
pub use win32::Win32Backend;

use crate::display::errors::DisplayError;
use crate::display::traits::DisplayBackend;

/// The display backend for the platform this binary was built for.
#[cfg(windows)]
pub fn primary_backend() -> Result<Box<dyn DisplayBackend>, DisplayError> {
    Ok(Box::new(Win32Backend::new()))
}

/// The display backend for the platform this binary was built for.
#[cfg(not(windows))]
pub fn primary_backend() -> Result<Box<dyn DisplayBackend>, DisplayError> {
    Err(DisplayError::PlatformUnsupported {
        platform: std::env::consts::OS.to_string(),
    })
}
