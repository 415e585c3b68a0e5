//! Ports - trait boundaries between the application core and its adapters.

mod response_store;

pub use response_store::{ResponseStore, ResponseStoreError};
