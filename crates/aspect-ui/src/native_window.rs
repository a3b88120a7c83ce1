//! Bridge from a gpui window to the OS handle used by `aspect_core::window`.

use aspect_core::NativeWindowId;
use gpui::Window;
use raw_window_handle::{HasWindowHandle, RawWindowHandle};

/// The OS handle behind `window`, if the platform exposes one we can drive.
pub fn native_window_id(window: &Window) -> Option<NativeWindowId> {
    let handle = match HasWindowHandle::window_handle(window) {
        Ok(handle) => handle,
        Err(e) => {
            tracing::warn!(event = "ui.native_window.handle_unavailable", error = %e);
            return None;
        }
    };

    match handle.as_raw() {
        RawWindowHandle::Win32(win32) => Some(NativeWindowId(win32.hwnd.get())),
        other => {
            tracing::debug!(
                event = "ui.native_window.unsupported_handle",
                handle = ?other
            );
            None
        }
    }
}
