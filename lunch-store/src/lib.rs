//! Record store for the lunch log
//!
//! Finalized form submissions are appended to an embedded redb database,
//! one table per record kind. Nothing is ever updated or removed.

mod error;
mod storage;
mod traits;

pub use error::{StoreError, StoreResult};
pub use storage::RecordStorage;
pub use traits::RecordStore;
