//! Infrastructure layer: record storage and repositories.

pub mod repository;
pub mod store;

pub use repository::ProductRepository;
pub use store::{InMemoryRecordStore, RecordStore};
