//! View components for aspect-ui.
//!
//! - `main_view` - Root view; owns the state and handles input
//! - `title_bar` - Drag handle, title and close button
//! - `resolution_panel` - Native/preset buttons and the custom form
//! - `error_dialog` - Modal error overlay

pub mod error_dialog;
pub mod main_view;
pub mod resolution_panel;
pub mod title_bar;

pub use main_view::MainView;
