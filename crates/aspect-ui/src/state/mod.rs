//! Application state for aspect-ui.
//!
//! `AppState` is the facade the views talk to; the dialog and form modules
//! hold the plain data it manages.

pub mod app_state;
pub mod dialog;
pub mod form;

pub use app_state::AppState;
pub use dialog::DialogState;
pub use form::{CustomField, CustomFormState};
