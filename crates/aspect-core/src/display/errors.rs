use crate::errors::AspectError;

#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    /// The OS rejected the requested mode. `status` is the raw OS result code.
    #[error("Resolution not supported")]
    Unsupported { width: u32, height: u32, status: i32 },

    /// One or both custom fields did not parse as a positive integer.
    #[error("Enter valid numbers")]
    InvalidCustomInput { width: String, height: String },

    #[error("Failed to query primary display resolution: {message}")]
    QueryFailed { message: String },

    #[error("Display mode changes are not supported on {platform}")]
    PlatformUnsupported { platform: String },
}

impl DisplayError {
    /// Title for the modal dialog that reports this error.
    pub fn dialog_title(&self) -> &'static str {
        match self {
            DisplayError::InvalidCustomInput { .. } => "Invalid Input",
            _ => "Error",
        }
    }
}

impl AspectError for DisplayError {
    fn error_code(&self) -> &'static str {
        match self {
            DisplayError::Unsupported { .. } => "RESOLUTION_UNSUPPORTED",
            DisplayError::InvalidCustomInput { .. } => "INVALID_CUSTOM_INPUT",
            DisplayError::QueryFailed { .. } => "DISPLAY_QUERY_FAILED",
            DisplayError::PlatformUnsupported { .. } => "PLATFORM_UNSUPPORTED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            DisplayError::Unsupported { .. } | DisplayError::InvalidCustomInput { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_display() {
        let error = DisplayError::Unsupported {
            width: 1234,
            height: 567,
            status: -2,
        };
        assert_eq!(error.to_string(), "Resolution not supported");
        assert_eq!(error.error_code(), "RESOLUTION_UNSUPPORTED");
        assert_eq!(error.dialog_title(), "Error");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_invalid_custom_input_display() {
        let error = DisplayError::InvalidCustomInput {
            width: "abc".to_string(),
            height: "1080".to_string(),
        };
        assert_eq!(error.to_string(), "Enter valid numbers");
        assert_eq!(error.error_code(), "INVALID_CUSTOM_INPUT");
        assert_eq!(error.dialog_title(), "Invalid Input");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_startup_errors_are_system_errors() {
        let query = DisplayError::QueryFailed {
            message: "GetSystemMetrics returned 0".to_string(),
        };
        assert!(!query.is_user_error());
        assert_eq!(query.error_code(), "DISPLAY_QUERY_FAILED");

        let platform = DisplayError::PlatformUnsupported {
            platform: "linux".to_string(),
        };
        assert!(!platform.is_user_error());
        assert_eq!(
            platform.to_string(),
            "Display mode changes are not supported on linux"
        );
    }
}
