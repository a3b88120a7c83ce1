#[cfg(windows)]
mod win32;

#[cfg(windows)]
pub use win32::Win32Chrome;

use crate::window::errors::WindowError;
use crate::window::traits::WindowChrome;

/// Window chrome for the platform this binary was built for.
#[cfg(windows)]
pub fn platform_chrome() -> Result<Box<dyn WindowChrome>, WindowError> {
    Ok(Box::new(Win32Chrome::new()))
}

/// Window chrome for the platform this binary was built for.
#[cfg(not(windows))]
pub fn platform_chrome() -> Result<Box<dyn WindowChrome>, WindowError> {
    Err(WindowError::PlatformUnsupported {
        platform: std::env::consts::OS.to_string(),
    })
}
