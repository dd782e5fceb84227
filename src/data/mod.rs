//! Data ingestion
//!
//! CSV loading of match records and a caller-owned cache that reloads when
//! the source file changes.

pub mod cache;
pub mod loader;

pub use cache::DatasetCache;
pub use loader::{load_csv, load_from_reader};
