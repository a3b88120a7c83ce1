use tracing::{debug, info};

use crate::config::WindowConfig;
use crate::window::drag::WindowDrag;
use crate::window::errors::WindowError;
use crate::window::traits::WindowChrome;
use crate::window::types::{NativeWindowId, ScreenPoint};

/// Apply the cosmetic window hints selected in `config`.
///
/// Both hints are best effort: a failure (e.g. rounded corners on Windows 10)
/// is logged at debug level and otherwise ignored.
pub fn apply_chrome(chrome: &dyn WindowChrome, window: NativeWindowId, config: &WindowConfig) {
    if config.rounded_corners {
        match chrome.round_corners(window) {
            Ok(()) => debug!(event = "core.window.round_corners_applied"),
            Err(e) => debug!(event = "core.window.round_corners_skipped", error = %e),
        }
    }

    if config.always_on_top {
        match chrome.set_topmost(window) {
            Ok(()) => debug!(event = "core.window.topmost_applied"),
            Err(e) => debug!(event = "core.window.topmost_skipped", error = %e),
        }
    }

    info!(
        event = "core.window.chrome_applied",
        rounded_corners = config.rounded_corners,
        always_on_top = config.always_on_top
    );
}

/// Pointer pressed on the title bar: remember where it grabbed the window.
pub fn begin_drag(
    chrome: &dyn WindowChrome,
    window: NativeWindowId,
    drag: &mut WindowDrag,
) -> Result<(), WindowError> {
    let origin = chrome.window_origin(window)?;
    let pointer = chrome.cursor_position()?;
    drag.begin(origin, pointer);

    debug!(
        event = "core.window.drag_started",
        origin_x = origin.x,
        origin_y = origin.y,
        pointer_x = pointer.x,
        pointer_y = pointer.y
    );
    Ok(())
}

/// Pointer moved with the button held: follow the cursor.
///
/// Returns the new window origin, or `None` when no drag is in progress.
pub fn drag_to_cursor(
    chrome: &dyn WindowChrome,
    window: NativeWindowId,
    drag: &WindowDrag,
) -> Result<Option<ScreenPoint>, WindowError> {
    if !drag.is_active() {
        return Ok(None);
    }

    let pointer = chrome.cursor_position()?;
    let Some(target) = drag.target_origin(pointer) else {
        return Ok(None);
    };

    chrome.move_window(window, target)?;
    Ok(Some(target))
}
