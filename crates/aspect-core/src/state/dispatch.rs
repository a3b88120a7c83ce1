use tracing::{debug, info};

use crate::config::AspectConfig;
use crate::display::controller::DisplayController;
use crate::display::errors::DisplayError;
use crate::display::traits::DisplayBackend;
use crate::display::types::{Resolution, ResolutionPreset};
use crate::state::errors::DispatchError;
use crate::state::events::Event;
use crate::state::store::Store;
use crate::state::types::Command;

/// Default Store implementation that routes commands to the display controller.
///
/// Constructing the store queries the native resolution; it is the single
/// owner of the controller for the lifetime of the process.
pub struct CoreStore<B: DisplayBackend = Box<dyn DisplayBackend>> {
    controller: DisplayController<B>,
    presets: Vec<ResolutionPreset>,
}

impl<B: DisplayBackend> CoreStore<B> {
    pub fn new(backend: B, config: &AspectConfig) -> Result<Self, DisplayError> {
        Ok(Self {
            controller: DisplayController::new(backend)?,
            presets: config.presets.clone(),
        })
    }

    /// Resolution captured at startup.
    pub fn native(&self) -> Resolution {
        self.controller.native()
    }

    pub fn presets(&self) -> &[ResolutionPreset] {
        &self.presets
    }

    #[cfg(test)]
    pub(crate) fn controller(&self) -> &DisplayController<B> {
        &self.controller
    }
}

impl<B: DisplayBackend> Store for CoreStore<B> {
    type Error = DispatchError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        debug!(event = "core.state.dispatch_started", command = ?cmd);

        let result = match cmd {
            Command::RestoreNative => {
                self.controller.restore_native()?;
                Ok(vec![Event::NativeRestored {
                    resolution: self.controller.native(),
                }])
            }
            Command::ApplyResolution { resolution } => {
                self.controller.apply_resolution(resolution)?;
                Ok(vec![Event::ResolutionChanged { resolution }])
            }
            Command::ApplyCustom { width, height } => {
                let resolution = self.controller.apply_custom(&width, &height)?;
                Ok(vec![Event::ResolutionChanged { resolution }])
            }
        };

        if let Ok(events) = &result {
            info!(event = "core.state.dispatch_completed", events = ?events);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockBackend {
        native: Resolution,
        rejected: Vec<Resolution>,
        calls: Vec<Resolution>,
    }

    impl DisplayBackend for MockBackend {
        fn native_resolution(&self) -> Result<Resolution, DisplayError> {
            Ok(self.native)
        }

        fn set_resolution(&mut self, resolution: Resolution) -> Result<(), DisplayError> {
            self.calls.push(resolution);
            if self.rejected.contains(&resolution) {
                return Err(DisplayError::Unsupported {
                    width: resolution.width,
                    height: resolution.height,
                    status: -2,
                });
            }
            Ok(())
        }
    }

    fn store() -> CoreStore<MockBackend> {
        let backend = MockBackend {
            native: Resolution::new(1920, 1200),
            rejected: vec![Resolution::new(2560, 1080)],
            calls: Vec::new(),
        };
        CoreStore::new(backend, &AspectConfig::default()).unwrap()
    }

    fn calls(store: &CoreStore<MockBackend>) -> &[Resolution] {
        &store.controller().backend().calls
    }

    #[test]
    fn test_store_exposes_native_and_presets() {
        let store = store();
        assert_eq!(store.native(), Resolution::new(1920, 1200));
        assert_eq!(store.presets().len(), 3);
    }

    #[test]
    fn test_restore_native_event() {
        let mut store = store();
        store
            .dispatch(Command::ApplyResolution {
                resolution: Resolution::new(1440, 1080),
            })
            .unwrap();

        let events = store.dispatch(Command::RestoreNative).unwrap();
        assert_eq!(
            events,
            vec![Event::NativeRestored {
                resolution: Resolution::new(1920, 1200)
            }]
        );
        assert_eq!(calls(&store).last(), Some(&Resolution::new(1920, 1200)));
    }

    #[test]
    fn test_apply_resolution_event() {
        let mut store = store();
        let events = store
            .dispatch(Command::ApplyResolution {
                resolution: Resolution::new(1920, 1080),
            })
            .unwrap();
        assert_eq!(
            events,
            vec![Event::ResolutionChanged {
                resolution: Resolution::new(1920, 1080)
            }]
        );
    }

    #[test]
    fn test_apply_rejected_resolution() {
        let mut store = store();
        let err = store
            .dispatch(Command::ApplyResolution {
                resolution: Resolution::new(2560, 1080),
            })
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Display(DisplayError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_apply_custom_parses_fields() {
        let mut store = store();
        let events = store
            .dispatch(Command::ApplyCustom {
                width: "1920".to_string(),
                height: "1080".to_string(),
            })
            .unwrap();
        assert_eq!(
            events,
            vec![Event::ResolutionChanged {
                resolution: Resolution::new(1920, 1080)
            }]
        );
        assert_eq!(calls(&store), &[Resolution::new(1920, 1080)]);
    }

    #[test]
    fn test_apply_custom_invalid_makes_no_os_call() {
        let mut store = store();
        let err = store
            .dispatch(Command::ApplyCustom {
                width: "abc".to_string(),
                height: "1080".to_string(),
            })
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Display(DisplayError::InvalidCustomInput { .. })
        ));
        assert!(calls(&store).is_empty());
    }
}
