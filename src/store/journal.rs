//! Journaled store
//!
//! An in-memory index made durable by a write-ahead log.
//!
//! ## Write path
//! 1. Take the index write lock (serializes all writers)
//! 2. Append the operation to the WAL
//! 3. Apply it to the index
//!
//! A failed WAL append leaves the index untouched.
//!
//! ## Open path
//! Recover the WAL (dropping any damaged tail), replay it into the index,
//! then reopen the WAL for appending.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use parking_lot::{Mutex, RwLock};

use crate::config::WalSyncStrategy;
use crate::error::{DirectoryError, Result};
use crate::model::Document;
use crate::wal::{Operation, WalRecovery, WalWriter};
use super::Store;

/// Durable document store backed by a WAL file
pub struct JournalStore<T> {
    path: PathBuf,

    /// Current documents (internal RwLock)
    index: RwLock<HashMap<String, T>>,

    /// Append handle (exclusive access needed)
    wal: Mutex<WalWriter>,

    _doc: PhantomData<fn() -> T>,
}

impl<T: Document> JournalStore<T> {
    /// Open or create a journaled store at `path`
    pub fn open(path: &Path, sync_strategy: WalSyncStrategy) -> Result<Self> {
        let mut index = HashMap::new();

        if path.exists() {
            let (entries, recovery) = WalRecovery::recover(path)?;

            tracing::info!(
                kind = T::KIND,
                path = %path.display(),
                recovered = recovery.entries_recovered,
                corrupted = recovery.entries_corrupted,
                last_lsn = recovery.last_lsn,
                "replaying journal"
            );

            for entry in entries {
                match entry.operation {
                    Operation::Put { key, value } => {
                        let doc: T = serde_json::from_slice(&value).map_err(|e| {
                            DirectoryError::WalCorruption(format!(
                                "{} {} at lsn {}: {}",
                                T::KIND,
                                key,
                                entry.lsn,
                                e
                            ))
                        })?;
                        index.insert(key, doc);
                    }
                    Operation::Clear => index.clear(),
                }
            }
        }

        let wal = WalWriter::open(path, sync_strategy)?;

        Ok(Self {
            path: path.to_path_buf(),
            index: RwLock::new(index),
            wal: Mutex::new(wal),
            _doc: PhantomData,
        })
    }

    /// Path of the journal file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// LSN of the last logged mutation
    pub fn last_lsn(&self) -> u64 {
        self.wal.lock().current_lsn()
    }

    /// Force buffered journal writes to disk
    pub fn sync(&self) -> Result<()> {
        self.wal.lock().sync()
    }

    fn log_put(&self, doc: &T) -> Result<()> {
        let value = serde_json::to_vec(doc)?;
        self.wal.lock().append(Operation::Put {
            key: doc.key().to_string(),
            value,
        })?;
        Ok(())
    }
}

impl<T: Document> Store<T> for JournalStore<T> {
    fn insert(&self, doc: T) -> Result<T> {
        let mut index = self.index.write();
        if index.contains_key(doc.key()) {
            return Err(DirectoryError::DuplicateKey(format!(
                "{} {}",
                T::KIND,
                doc.key()
            )));
        }

        self.log_put(&doc)?;
        index.insert(doc.key().to_string(), doc.clone());
        Ok(doc)
    }

    fn find(&self, key: &str) -> Result<Option<T>> {
        Ok(self.index.read().get(key).cloned())
    }

    fn save(&self, doc: T) -> Result<T> {
        let mut index = self.index.write();
        self.log_put(&doc)?;
        index.insert(doc.key().to_string(), doc.clone());
        Ok(doc)
    }

    fn clear(&self) -> Result<()> {
        let mut index = self.index.write();
        self.wal.lock().append(Operation::Clear)?;
        index.clear();
        Ok(())
    }

    fn len(&self) -> usize {
        self.index.read().len()
    }
}
