//! Frameless window chrome: drag-to-move, rounded corners and z-order.

pub mod drag;
pub mod errors;
pub mod handler;
pub mod native;
pub mod traits;
pub mod types;

pub use drag::WindowDrag;
pub use errors::WindowError;
pub use native::platform_chrome;
pub use traits::WindowChrome;
pub use types::{NativeWindowId, ScreenPoint};
