use tracing::{info, warn};

use crate::display::errors::DisplayError;
use crate::display::input::parse_resolution_fields;
use crate::display::traits::DisplayBackend;
use crate::display::types::Resolution;

/// Owns the display backend and the native resolution captured at startup.
///
/// The native resolution is queried exactly once, in [`DisplayController::new`],
/// and never refreshed afterwards, so restoring always returns to the mode the
/// display had when the program started.
pub struct DisplayController<B: DisplayBackend> {
    backend: B,
    native: Resolution,
}

impl<B: DisplayBackend> DisplayController<B> {
    pub fn new(backend: B) -> Result<Self, DisplayError> {
        let native = backend.native_resolution()?;
        if !native.is_positive() {
            return Err(DisplayError::QueryFailed {
                message: format!("OS reported non-positive resolution {native}"),
            });
        }

        info!(
            event = "core.display.native_captured",
            width = native.width,
            height = native.height
        );

        Ok(Self { backend, native })
    }

    pub fn native(&self) -> Resolution {
        self.native
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    /// Ask the OS to switch the primary display to `resolution`.
    pub fn apply_resolution(&mut self, resolution: Resolution) -> Result<(), DisplayError> {
        info!(
            event = "core.display.apply_started",
            width = resolution.width,
            height = resolution.height
        );

        match self.backend.set_resolution(resolution) {
            Ok(()) => {
                info!(
                    event = "core.display.apply_completed",
                    width = resolution.width,
                    height = resolution.height
                );
                Ok(())
            }
            Err(e) => {
                warn!(
                    event = "core.display.apply_failed",
                    width = resolution.width,
                    height = resolution.height,
                    error = %e
                );
                Err(e)
            }
        }
    }

    pub fn restore_native(&mut self) -> Result<(), DisplayError> {
        let native = self.native;
        self.apply_resolution(native)
    }

    /// Parse the custom fields and apply the result. No OS call is made when
    /// either field fails to parse.
    pub fn apply_custom(&mut self, width: &str, height: &str) -> Result<Resolution, DisplayError> {
        let resolution = parse_resolution_fields(width, height)?;
        self.apply_resolution(resolution)?;
        Ok(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Backend that accepts a fixed set of modes and records every request.
    struct MockBackend {
        native: Resolution,
        supported: HashSet<Resolution>,
        calls: Vec<Resolution>,
    }

    impl MockBackend {
        fn new(native: Resolution, supported: &[Resolution]) -> Self {
            Self {
                native,
                supported: supported.iter().copied().collect(),
                calls: Vec::new(),
            }
        }
    }

    impl DisplayBackend for MockBackend {
        fn native_resolution(&self) -> Result<Resolution, DisplayError> {
            Ok(self.native)
        }

        fn set_resolution(&mut self, resolution: Resolution) -> Result<(), DisplayError> {
            self.calls.push(resolution);
            if self.supported.contains(&resolution) {
                self.native = resolution;
                Ok(())
            } else {
                Err(DisplayError::Unsupported {
                    width: resolution.width,
                    height: resolution.height,
                    status: -2,
                })
            }
        }
    }

    const NATIVE: Resolution = Resolution::new(2560, 1440);

    fn controller() -> DisplayController<MockBackend> {
        let backend = MockBackend::new(
            NATIVE,
            &[
                NATIVE,
                Resolution::new(1920, 1080),
                Resolution::new(1440, 1080),
            ],
        );
        DisplayController::new(backend).unwrap()
    }

    #[test]
    fn test_native_captured_at_construction() {
        assert_eq!(controller().native(), NATIVE);
    }

    #[test]
    fn test_non_positive_native_fails() {
        let backend = MockBackend::new(Resolution::new(0, 0), &[]);
        assert!(matches!(
            DisplayController::new(backend),
            Err(DisplayError::QueryFailed { .. })
        ));
    }

    #[test]
    fn test_apply_supported_succeeds() {
        let mut controller = controller();
        for resolution in [Resolution::new(1920, 1080), Resolution::new(1440, 1080)] {
            assert!(controller.apply_resolution(resolution).is_ok());
        }
        assert_eq!(
            controller.backend().calls,
            vec![Resolution::new(1920, 1080), Resolution::new(1440, 1080)]
        );
    }

    #[test]
    fn test_apply_unsupported_reports_error() {
        let mut controller = controller();
        let err = controller
            .apply_resolution(Resolution::new(2560, 1080))
            .unwrap_err();
        assert!(matches!(
            err,
            DisplayError::Unsupported {
                width: 2560,
                height: 1080,
                ..
            }
        ));
        assert_eq!(err.to_string(), "Resolution not supported");
        assert_eq!(controller.backend().calls.len(), 1);
    }

    #[test]
    fn test_restore_native_uses_startup_value() {
        let mut controller = controller();
        controller
            .apply_resolution(Resolution::new(1920, 1080))
            .unwrap();
        controller
            .apply_resolution(Resolution::new(1440, 1080))
            .unwrap();

        controller.restore_native().unwrap();

        assert_eq!(controller.native(), NATIVE);
        assert_eq!(controller.backend().calls.last(), Some(&NATIVE));
    }

    #[test]
    fn test_apply_custom_valid_fields() {
        let mut controller = controller();
        let applied = controller.apply_custom("1920", "1080").unwrap();
        assert_eq!(applied, Resolution::new(1920, 1080));
        assert_eq!(
            controller.backend().calls,
            vec![Resolution::new(1920, 1080)]
        );
    }

    #[test]
    fn test_apply_custom_invalid_fields_skip_os_call() {
        let mut controller = controller();
        for (w, h) in [("abc", "1080"), ("", "1080"), ("1920", "")] {
            let err = controller.apply_custom(w, h).unwrap_err();
            assert!(matches!(err, DisplayError::InvalidCustomInput { .. }));
        }
        assert!(controller.backend().calls.is_empty());
    }

    #[test]
    fn test_apply_custom_unsupported_mode() {
        let mut controller = controller();
        let err = controller.apply_custom("800", "600").unwrap_err();
        assert!(matches!(err, DisplayError::Unsupported { .. }));
        assert_eq!(controller.backend().calls, vec![Resolution::new(800, 600)]);
    }
}
