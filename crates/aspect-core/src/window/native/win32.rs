use std::ffi::c_void;
use std::mem::size_of;

use windows::Win32::Foundation::{HWND, POINT, RECT};
use windows::Win32::Graphics::Dwm::{
    DWM_WINDOW_CORNER_PREFERENCE, DWMWA_WINDOW_CORNER_PREFERENCE, DWMWCP_ROUND,
    DwmSetWindowAttribute,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GetCursorPos, GetWindowRect, HWND_TOPMOST, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE,
    SWP_NOZORDER, SetWindowPos,
};

use crate::window::errors::WindowError;
use crate::window::traits::WindowChrome;
use crate::window::types::{NativeWindowId, ScreenPoint};

fn hwnd(window: NativeWindowId) -> HWND {
    HWND(window.0 as *mut c_void)
}

/// Window chrome backed by user32 and the desktop window manager.
#[derive(Debug, Default)]
pub struct Win32Chrome;

impl Win32Chrome {
    pub fn new() -> Self {
        Self
    }
}

impl WindowChrome for Win32Chrome {
    fn cursor_position(&self) -> Result<ScreenPoint, WindowError> {
        let mut point = POINT::default();
        // SAFETY: `point` is a valid out-pointer for the duration of the call.
        unsafe { GetCursorPos(&mut point) }.map_err(|e| WindowError::CursorUnavailable {
            message: e.to_string(),
        })?;
        Ok(ScreenPoint::new(point.x, point.y))
    }

    fn window_origin(&self, window: NativeWindowId) -> Result<ScreenPoint, WindowError> {
        let mut rect = RECT::default();
        // SAFETY: `rect` is a valid out-pointer; an invalid HWND yields an error.
        unsafe { GetWindowRect(hwnd(window), &mut rect) }.map_err(|e| {
            WindowError::BoundsUnavailable {
                message: e.to_string(),
            }
        })?;
        Ok(ScreenPoint::new(rect.left, rect.top))
    }

    fn move_window(&self, window: NativeWindowId, origin: ScreenPoint) -> Result<(), WindowError> {
        // SAFETY: plain by-value arguments; size and z-order are left untouched.
        unsafe {
            SetWindowPos(
                hwnd(window),
                HWND::default(),
                origin.x,
                origin.y,
                0,
                0,
                SWP_NOSIZE | SWP_NOZORDER | SWP_NOACTIVATE,
            )
        }
        .map_err(|e| WindowError::MoveFailed {
            message: e.to_string(),
        })
    }

    fn round_corners(&self, window: NativeWindowId) -> Result<(), WindowError> {
        let preference: DWM_WINDOW_CORNER_PREFERENCE = DWMWCP_ROUND;
        // SAFETY: the attribute pointer and size describe `preference`, which
        // lives across the call. Windows 10 rejects the attribute with an error.
        unsafe {
            DwmSetWindowAttribute(
                hwnd(window),
                DWMWA_WINDOW_CORNER_PREFERENCE,
                &preference as *const DWM_WINDOW_CORNER_PREFERENCE as *const c_void,
                size_of::<DWM_WINDOW_CORNER_PREFERENCE>() as u32,
            )
        }
        .map_err(|e| WindowError::AttributeFailed {
            attribute: "corner_preference",
            message: e.to_string(),
        })
    }

    fn set_topmost(&self, window: NativeWindowId) -> Result<(), WindowError> {
        // SAFETY: plain by-value arguments; position and size are left untouched.
        unsafe {
            SetWindowPos(
                hwnd(window),
                HWND_TOPMOST,
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE,
            )
        }
        .map_err(|e| WindowError::AttributeFailed {
            attribute: "topmost",
            message: e.to_string(),
        })
    }
}
