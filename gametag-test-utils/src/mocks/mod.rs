//! Mock implementations for testing

mod provider;
mod store;

pub use provider::MockTagProvider;
pub use store::{FailingStore, RecordingStore, StoreCall};
