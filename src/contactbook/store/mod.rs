//! # Storage Layer
//!
//! The contact book keeps all records in memory; persistence is a snapshot
//! read once when the book is opened and written back when it is saved. The
//! [`BookBackend`] trait is that snapshot service.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileBackend`]: production storage, a pretty-printed JSON array
//!   of records in a single file (`book.json` by default).
//! - [`memory::MemBackend`]: in-memory storage for tests.
//!
//! ## Durability
//!
//! `save` overwrites the whole file in place. There is no write-ahead or
//! temp-file rename, so a crash mid-write can leave a truncated file, which
//! the next `load` reports as a serialization error.

use crate::error::Result;
use crate::record::Record;

pub mod fs;
pub mod memory;

/// Snapshot persistence for the contact book.
pub trait BookBackend {
    /// Read the stored records in their saved order.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<Record>>>;

    /// Replace the stored snapshot with `records`.
    fn save(&mut self, records: &[Record]) -> Result<()>;
}
