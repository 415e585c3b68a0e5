//! Storage adapters for the response store port.

mod file_response_store;
mod in_memory_response_store;

pub use file_response_store::FileResponseStore;
pub use in_memory_response_store::InMemoryResponseStore;
