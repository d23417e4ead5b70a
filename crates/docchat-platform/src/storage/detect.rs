//! Pick a storage backend from configuration.
//!
//! Priority for Auto: localStorage → Memory (fallback). Both backends
//! construct synchronously, so unlike heavier stores no async probing is
//! needed here.

use std::rc::Rc;

use docchat_core::ports::StoragePort;
use docchat_types::config::StorageBackendType;

use super::{LocalStorageBackend, MemoryStorage};

/// Open the configured storage backend.
/// Returns a trait object so callers are backend-agnostic.
pub fn detect_storage(backend: &StorageBackendType) -> Rc<dyn StoragePort> {
    match backend {
        StorageBackendType::Memory => {
            log::info!("Storage backend: memory");
            Rc::new(MemoryStorage::new())
        }
        StorageBackendType::LocalStorage | StorageBackendType::Auto => {
            match LocalStorageBackend::new() {
                Ok(ls) => {
                    log::info!("Storage backend: localStorage");
                    Rc::new(ls)
                }
                Err(e) => {
                    log::warn!("localStorage unavailable ({}), falling back to memory", e);
                    Rc::new(MemoryStorage::new())
                }
            }
        }
    }
}
