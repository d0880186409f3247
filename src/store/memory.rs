//! In-memory store
//!
//! HashMap-based store with RwLock for concurrency.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::{DirectoryError, Result};
use crate::model::Document;
use super::Store;

/// Volatile document store
pub struct MemoryStore<T> {
    docs: RwLock<HashMap<String, T>>,
}

impl<T: Document> MemoryStore<T> {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            docs: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: Document> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Document> Store<T> for MemoryStore<T> {
    fn insert(&self, doc: T) -> Result<T> {
        let mut docs = self.docs.write();
        match docs.entry(doc.key().to_string()) {
            Entry::Occupied(_) => Err(DirectoryError::DuplicateKey(format!(
                "{} {}",
                T::KIND,
                doc.key()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(doc.clone());
                Ok(doc)
            }
        }
    }

    fn find(&self, key: &str) -> Result<Option<T>> {
        Ok(self.docs.read().get(key).cloned())
    }

    fn save(&self, doc: T) -> Result<T> {
        self.docs.write().insert(doc.key().to_string(), doc.clone());
        Ok(doc)
    }

    fn clear(&self) -> Result<()> {
        self.docs.write().clear();
        Ok(())
    }

    fn len(&self) -> usize {
        self.docs.read().len()
    }
}
