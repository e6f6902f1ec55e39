//! Flat-file persistence for the character catalog.
//!
//! The whole catalog lives in one pretty-printed JSON document. [`JsonStore`]
//! owns the file; repositories in [`repositories`] express the catalog
//! operations on top of its load/save primitives.

pub mod error;
pub mod models;
pub mod repositories;
mod store;

pub use error::StoreError;
pub use store::{JsonStore, StoreStatus};

/// Verify the backing file is readable and well-formed.
///
/// Returns the number of stored records; a missing file counts as empty.
pub async fn health_check(store: &JsonStore) -> Result<usize, StoreError> {
    match store.inspect().await? {
        StoreStatus::Missing | StoreStatus::Created => Ok(0),
        StoreStatus::Ready { records } => Ok(records),
    }
}
