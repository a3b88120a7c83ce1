use serde::{Deserialize, Serialize};

use crate::display::types::Resolution;

/// Successful state changes produced by a dispatched command.
///
/// Failures travel through the `Result` error channel, never as events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// The OS accepted a new primary display resolution.
    ResolutionChanged { resolution: Resolution },
    /// The primary display was switched back to its startup resolution.
    NativeRestored { resolution: Resolution },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde_roundtrip() {
        let event = Event::NativeRestored {
            resolution: Resolution::new(3840, 2160),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
