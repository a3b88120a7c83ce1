use tracing::debug;

use crate::display::errors::DisplayError;
use crate::display::types::Resolution;

/// Parse the two custom resolution fields.
///
/// Each field must hold a positive integer, optionally surrounded by
/// whitespace. No range check is applied: whether the mode is usable is up
/// to the OS.
pub fn parse_resolution_fields(width: &str, height: &str) -> Result<Resolution, DisplayError> {
    match (parse_dimension(width), parse_dimension(height)) {
        (Some(w), Some(h)) => Ok(Resolution::new(w, h)),
        (w, h) => {
            debug!(
                event = "core.display.custom_input_rejected",
                width = width,
                height = height,
                width_valid = w.is_some(),
                height_valid = h.is_some()
            );
            Err(DisplayError::InvalidCustomInput {
                width: width.to_string(),
                height: height.to_string(),
            })
        }
    }
}

fn parse_dimension(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|value| *value > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_fields() {
        let resolution = parse_resolution_fields("1920", "1080").unwrap();
        assert_eq!(resolution, Resolution::new(1920, 1080));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let resolution = parse_resolution_fields(" 2560 ", "\t1440").unwrap();
        assert_eq!(resolution, Resolution::new(2560, 1440));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err = parse_resolution_fields("abc", "1080").unwrap_err();
        assert!(matches!(
            err,
            DisplayError::InvalidCustomInput { ref width, ref height }
                if width == "abc" && height == "1080"
        ));
    }

    #[test]
    fn test_parse_rejects_empty_fields() {
        assert!(matches!(
            parse_resolution_fields("", "1080"),
            Err(DisplayError::InvalidCustomInput { .. })
        ));
        assert!(matches!(
            parse_resolution_fields("1920", ""),
            Err(DisplayError::InvalidCustomInput { .. })
        ));
        assert!(matches!(
            parse_resolution_fields("   ", "   "),
            Err(DisplayError::InvalidCustomInput { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_zero_negative_and_fractional() {
        for (w, h) in [("0", "1080"), ("-1920", "1080"), ("1920.5", "1080"), ("1920", "1e3")] {
            assert!(
                parse_resolution_fields(w, h).is_err(),
                "expected ({w}, {h}) to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_has_no_range_check() {
        let resolution = parse_resolution_fields("1", "99999").unwrap();
        assert_eq!(resolution, Resolution::new(1, 99999));
    }
}
