//! Window chrome trait definition.

use crate::window::errors::WindowError;
use crate::window::types::{NativeWindowId, ScreenPoint};

/// OS window operations needed by a frameless window.
///
/// The UI toolkit draws the contents; placement, corner style and z-order go
/// through this trait so the drag protocol can be driven from screen
/// coordinates.
pub trait WindowChrome {
    /// Current pointer position in screen coordinates.
    fn cursor_position(&self) -> Result<ScreenPoint, WindowError>;

    /// Screen position of the window's top-left corner.
    fn window_origin(&self, window: NativeWindowId) -> Result<ScreenPoint, WindowError>;

    /// Move the window so its top-left corner is at `origin`, keeping its size.
    fn move_window(&self, window: NativeWindowId, origin: ScreenPoint) -> Result<(), WindowError>;

    /// Ask the compositor for rounded corners.
    fn round_corners(&self, window: NativeWindowId) -> Result<(), WindowError>;

    /// Keep the window above non-topmost windows.
    fn set_topmost(&self, window: NativeWindowId) -> Result<(), WindowError>;
}

impl<C: WindowChrome + ?Sized> WindowChrome for Box<C> {
    fn cursor_position(&self) -> Result<ScreenPoint, WindowError> {
        (**self).cursor_position()
    }

    fn window_origin(&self, window: NativeWindowId) -> Result<ScreenPoint, WindowError> {
        (**self).window_origin(window)
    }

    fn move_window(&self, window: NativeWindowId, origin: ScreenPoint) -> Result<(), WindowError> {
        (**self).move_window(window, origin)
    }

    fn round_corners(&self, window: NativeWindowId) -> Result<(), WindowError> {
        (**self).round_corners(window)
    }

    fn set_topmost(&self, window: NativeWindowId) -> Result<(), WindowError> {
        (**self).set_topmost(window)
    }
}
