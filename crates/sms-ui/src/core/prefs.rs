//! Key/value preference storage seam.

use std::collections::HashMap;

/// String preference storage (browser local storage or an in-memory stand-in).
pub trait PreferenceStore {
    /// Read the raw value stored under `key`.
    fn load(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str);
}

/// In-memory store used when local storage is unavailable, and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    /// Number of successful writes since creation.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryStore, PreferenceStore};

    #[test]
    fn memory_store_overwrites_values() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load("theme"), None);
        store.save("theme", "dark");
        store.save("theme", "light");
        assert_eq!(store.load("theme").as_deref(), Some("light"));
        assert_eq!(store.writes(), 2);
    }
}
