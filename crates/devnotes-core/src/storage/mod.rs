//! Key-value storage layer.
//!
//! `NoteStore` never touches a concrete backend; it talks to the
//! [`KeyValueStore`] trait so tests can swap in an in-memory double.

mod file;
mod memory;
pub mod traits;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
