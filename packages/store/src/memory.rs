use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionStorage;

/// In-memory SessionStorage for testing and native fallback.
///
/// Clones share the same map, like two handles on one `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match self.items.lock() {
            Ok(items) => items.get(key).cloned(),
            Err(_) => {
                tracing::warn!("Memory storage poisoned, reading {} as empty", key);
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        match self.items.lock() {
            Ok(mut items) => {
                items.insert(key.to_string(), value.to_string());
            }
            Err(_) => tracing::warn!("Memory storage poisoned, dropping write of {}", key),
        }
    }

    fn remove_item(&self, key: &str) {
        match self.items.lock() {
            Ok(mut items) => {
                items.remove(key);
            }
            Err(_) => tracing::warn!("Memory storage poisoned, dropping removal of {}", key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert!(storage.get_item("user").is_none());

        storage.set_item("user", "{}");
        assert_eq!(storage.get_item("user").as_deref(), Some("{}"));
        assert_eq!(storage.len(), 1);

        storage.remove_item("user");
        assert!(storage.get_item("user").is_none());
    }

    #[test]
    fn test_poisoned_storage_degrades_to_empty() {
        let storage = MemoryStorage::new();
        storage.set_item("user", "x");

        let poisoner = storage.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.items.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        // Reads come back empty and writes are dropped rather than panicking.
        assert!(storage.get_item("user").is_none());
        storage.set_item("user", "y");
        storage.remove_item("user");
        assert!(storage.is_empty());
    }

    #[test]
    fn test_clones_share_items() {
        let a = MemoryStorage::new();
        let b = a.clone();
        a.set_item("user", "x");
        assert_eq!(b.get_item("user").as_deref(), Some("x"));
    }
}
