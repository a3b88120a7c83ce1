pub mod dispatch;
pub mod errors;
pub mod events;
pub mod store;
pub mod types;

pub use dispatch::CoreStore;
pub use errors::DispatchError;
pub use events::Event;
pub use store::Store;
pub use types::Command;
