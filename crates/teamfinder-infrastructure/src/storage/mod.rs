//! Local storage backends.

mod file_local_storage;
mod memory_local_storage;

pub use file_local_storage::{FileLocalStorage, LocalStorageError};
pub use memory_local_storage::MemoryLocalStorage;
