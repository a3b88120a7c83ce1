//! aspect-core: Core library for switching the primary display resolution
//!
//! This library holds everything except the gpui view layer: the display
//! controller and its Win32 backend, the frameless window chrome, the command
//! store used by the UI, configuration and logging.
//!
//! # Main Entry Points
//!
//! - [`display`] - Query the native resolution and request mode changes
//! - [`window`] - Drag-to-move and cosmetic window hints
//! - [`state`] - Command dispatch used by the UI
//! - [`config`] - Optional user configuration

pub mod config;
pub mod display;
pub mod errors;
pub mod logging;
pub mod state;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use config::AspectConfig;
pub use display::{
    DisplayBackend, DisplayController, DisplayError, Resolution, ResolutionPreset,
    parse_resolution_fields,
};
pub use errors::AspectError;
pub use state::{Command, CoreStore, DispatchError, Event, Store};
pub use window::{NativeWindowId, ScreenPoint, WindowChrome, WindowDrag, WindowError};

// Re-export handler modules as the primary API
pub use window::handler as window_ops;

// Re-export logging initialization
pub use logging::init_logging;
