//! Bridge between UI preferences and eframe's persistence.
//!
//! eframe hands out its storage only at creation time and through `Frame` during
//! `update`, so preferences are read once into [`PrefsStore`] and written back whenever
//! a setter marked it dirty.

use log::debug;
use useradmin_business::prefs::{COLUMN_WIDTHS_KEY, GRADIENT_KEY, MemoryStore, PreferenceStore};

const KEYS: [&str; 2] = [COLUMN_WIDTHS_KEY, GRADIENT_KEY];

#[derive(Debug, Default)]
pub struct PrefsStore {
    entries: MemoryStore,
    dirty: bool,
}

impl PrefsStore {
    /// Seed from eframe storage (browser `localStorage` on the web). `None` in tests.
    pub fn from_storage(storage: Option<&dyn eframe::Storage>) -> Self {
        let mut entries = MemoryStore::new();
        if let Some(storage) = storage {
            for key in KEYS {
                if let Some(value) = storage.get_string(key) {
                    entries.set_string(key, value);
                }
            }
        }
        Self {
            entries,
            dirty: false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write every known key to `storage` and flush it.
    pub fn write_to(&mut self, storage: &mut dyn eframe::Storage) {
        for key in KEYS {
            if let Some(value) = self.entries.get_string(key) {
                storage.set_string(key, value);
            }
        }
        storage.flush();
        self.dirty = false;
        debug!("UI preferences persisted");
    }
}

impl PreferenceStore for PrefsStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.entries.get_string(key)
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.entries.set_string(key, value);
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct FakeStorage {
        values: HashMap<String, String>,
        flushes: usize,
    }

    impl eframe::Storage for FakeStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    #[test]
    fn reads_known_keys_and_writes_back() {
        let mut storage = FakeStorage::default();
        storage
            .values
            .insert(GRADIENT_KEY.to_owned(), r##"{"start":"#000000","end":"#ffffff"}"##.to_owned());
        storage.values.insert("unrelated".to_owned(), "x".to_owned());

        let mut store = PrefsStore::from_storage(Some(&storage));
        assert!(!store.is_dirty());
        assert!(store.get_string(GRADIENT_KEY).is_some());
        assert_eq!(store.get_string("unrelated"), None);

        store.set_string(COLUMN_WIDTHS_KEY, "[1]".to_owned());
        assert!(store.is_dirty());

        store.write_to(&mut storage);
        assert!(!store.is_dirty());
        assert_eq!(storage.flushes, 1);
        assert_eq!(storage.values.get(COLUMN_WIDTHS_KEY).map(String::as_str), Some("[1]"));
    }
}
