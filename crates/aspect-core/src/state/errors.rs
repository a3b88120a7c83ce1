use crate::display::errors::DisplayError;
use crate::errors::AspectError;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Display(#[from] DisplayError),
}

impl DispatchError {
    /// Title for the modal dialog that reports this error.
    pub fn dialog_title(&self) -> &'static str {
        match self {
            DispatchError::Display(e) => e.dialog_title(),
        }
    }
}

impl AspectError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::Display(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DispatchError::Display(e) => e.is_user_error(),
        }
    }
}
