use super::events::Event;
use super::types::Command;

/// Trait for dispatching business commands.
///
/// Decouples command definitions from their execution.
///
/// # Semantics
///
/// - **Ordering**: Commands execute synchronously in the order received.
/// - **Idempotency**: Re-applying the current resolution is allowed and goes
///   to the OS again.
/// - **Error handling**: Implementations define their own error type.
///   A failed command leaves the display unchanged.
/// - **Events**: On success, dispatch returns a non-empty `Vec<Event>`
///   describing what changed.
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}
