/// Dialog state for the application.
///
/// Only one dialog can be open at a time. While a dialog is open it is modal:
/// every other action is ignored until the user acknowledges it.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DialogState {
    /// No dialog is open.
    #[default]
    None,
    /// An error is waiting for acknowledgement.
    Error { title: String, message: String },
}

impl DialogState {
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogState::Error {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Returns true if any dialog is open.
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::None)
    }
}
