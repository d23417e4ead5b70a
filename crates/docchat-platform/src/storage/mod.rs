pub mod detect;
pub mod local_storage;
pub mod memory;

pub use detect::detect_storage;
pub use local_storage::LocalStorageBackend;
pub use memory::MemoryStorage;
