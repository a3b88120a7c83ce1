use std::mem::size_of;

use tracing::debug;
use windows::Win32::Graphics::Gdi::{
    CDS_TYPE, ChangeDisplaySettingsW, DEVMODEW, DISP_CHANGE_SUCCESSFUL, DM_PELSHEIGHT,
    DM_PELSWIDTH,
};
use windows::Win32::UI::WindowsAndMessaging::{GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN};

use crate::display::errors::DisplayError;
use crate::display::traits::DisplayBackend;
use crate::display::types::Resolution;

/// Primary display backend built on `GetSystemMetrics` and
/// `ChangeDisplaySettingsW`.
#[derive(Debug, Default)]
pub struct Win32Backend;

impl Win32Backend {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayBackend for Win32Backend {
    fn native_resolution(&self) -> Result<Resolution, DisplayError> {
        // SAFETY: GetSystemMetrics is a read-only query with no pointer arguments.
        let (width, height) =
            unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) };

        match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok(Resolution::new(w, h)),
            _ => Err(DisplayError::QueryFailed {
                message: format!("GetSystemMetrics returned {width}x{height}"),
            }),
        }
    }

    fn set_resolution(&mut self, resolution: Resolution) -> Result<(), DisplayError> {
        // Only the pixel fields are flagged; the driver keeps the rest of the
        // current mode.
        let mode = DEVMODEW {
            dmSize: size_of::<DEVMODEW>() as u16,
            dmFields: DM_PELSWIDTH | DM_PELSHEIGHT,
            dmPelsWidth: resolution.width,
            dmPelsHeight: resolution.height,
            ..Default::default()
        };

        // SAFETY: `mode` is a fully initialized DEVMODEW that outlives the call.
        let status =
            unsafe { ChangeDisplaySettingsW(Some(&mode as *const DEVMODEW), CDS_TYPE(0)) };

        debug!(
            event = "core.display.win32.change_settings_returned",
            width = resolution.width,
            height = resolution.height,
            status = status.0
        );

        if status == DISP_CHANGE_SUCCESSFUL {
            Ok(())
        } else {
            Err(DisplayError::Unsupported {
                width: resolution.width,
                height: resolution.height,
                status: status.0,
            })
        }
    }
}
