use crate::errors::AspectError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Failed to read cursor position: {message}")]
    CursorUnavailable { message: String },

    #[error("Failed to read window bounds: {message}")]
    BoundsUnavailable { message: String },

    #[error("Failed to move window: {message}")]
    MoveFailed { message: String },

    #[error("Failed to apply window attribute '{attribute}': {message}")]
    AttributeFailed {
        attribute: &'static str,
        message: String,
    },

    #[error("Native window handle is not available")]
    HandleUnavailable,

    #[error("Native window chrome is not supported on {platform}")]
    PlatformUnsupported { platform: String },
}

impl AspectError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::CursorUnavailable { .. } => "WINDOW_CURSOR_UNAVAILABLE",
            WindowError::BoundsUnavailable { .. } => "WINDOW_BOUNDS_UNAVAILABLE",
            WindowError::MoveFailed { .. } => "WINDOW_MOVE_FAILED",
            WindowError::AttributeFailed { .. } => "WINDOW_ATTRIBUTE_FAILED",
            WindowError::HandleUnavailable => "WINDOW_HANDLE_UNAVAILABLE",
            WindowError::PlatformUnsupported { .. } => "WINDOW_PLATFORM_UNSUPPORTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_failed_display() {
        let error = WindowError::AttributeFailed {
            attribute: "corner_preference",
            message: "parameter is incorrect".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to apply window attribute 'corner_preference': parameter is incorrect"
        );
        assert_eq!(error.error_code(), "WINDOW_ATTRIBUTE_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_handle_unavailable() {
        let error = WindowError::HandleUnavailable;
        assert_eq!(error.error_code(), "WINDOW_HANDLE_UNAVAILABLE");
    }
}
