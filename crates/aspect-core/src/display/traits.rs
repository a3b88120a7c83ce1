//! Display backend trait definition.

use crate::display::errors::DisplayError;
use crate::display::types::Resolution;

/// Narrow interface to the OS display subsystem.
///
/// Implementations touch only the primary display and only its pixel
/// dimensions. Whether a mode is acceptable is decided entirely by the OS.
pub trait DisplayBackend {
    /// The OS-reported resolution of the primary display.
    fn native_resolution(&self) -> Result<Resolution, DisplayError>;

    /// Change the primary display's pixel width and height, keeping every
    /// other mode field (refresh rate, color depth, orientation) as is.
    ///
    /// Returns `DisplayError::Unsupported` when the OS rejects the mode.
    fn set_resolution(&mut self, resolution: Resolution) -> Result<(), DisplayError>;
}

impl<B: DisplayBackend + ?Sized> DisplayBackend for Box<B> {
    fn native_resolution(&self) -> Result<Resolution, DisplayError> {
        (**self).native_resolution()
    }

    fn set_resolution(&mut self, resolution: Resolution) -> Result<(), DisplayError> {
        (**self).set_resolution(resolution)
    }
}
