use serde::{Deserialize, Serialize};

use crate::display::types::Resolution;

/// All business operations that can be dispatched through the store.
///
/// Commands use owned types so they can be serialized, logged, and sent
/// across boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Switch back to the resolution captured at startup.
    RestoreNative,
    /// Switch to a preset or any other already-parsed resolution.
    ApplyResolution { resolution: Resolution },
    /// Switch to the resolution typed into the custom fields.
    ///
    /// Carries the raw field text; parsing happens during dispatch.
    ApplyCustom { width: String, height: String },
}
