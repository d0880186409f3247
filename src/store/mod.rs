//! Store Module
//!
//! Key-value persistence for documents, keyed by employee identifier.
//!
//! ## Backends
//! - [`MemoryStore`]: a `HashMap` behind a `parking_lot::RwLock`
//! - [`JournalStore`]: the same index, with every mutation appended to a
//!   WAL first and replayed on open
//!
//! ## Atomicity
//! Each single-key operation is atomic. `insert` checks for an existing key
//! and writes under one write lock, so two racing inserts for the same key
//! cannot both succeed. There are no cross-key transactions.

mod journal;
mod memory;

pub use journal::JournalStore;
pub use memory::MemoryStore;

use std::sync::Arc;

use crate::config::{Config, StorageBackend};
use crate::error::Result;
use crate::model::{Compensation, Document, Employee};

/// Capability set the directory needs from a backing store
pub trait Store<T: Document>: Send + Sync {
    /// Add a new document; fails with `DuplicateKey` if the key is taken
    fn insert(&self, doc: T) -> Result<T>;

    /// Look a document up by key
    fn find(&self, key: &str) -> Result<Option<T>>;

    /// Insert or replace a document
    fn save(&self, doc: T) -> Result<T>;

    /// Remove every document
    fn clear(&self) -> Result<()>;

    /// Number of stored documents
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The pair of stores backing a directory
#[derive(Clone)]
pub struct Stores {
    pub employees: Arc<dyn Store<Employee>>,
    pub compensations: Arc<dyn Store<Compensation>>,
}

impl Stores {
    const EMPLOYEE_WAL: &'static str = "employees.wal";
    const COMPENSATION_WAL: &'static str = "compensations.wal";

    /// Volatile stores
    pub fn in_memory() -> Self {
        Self {
            employees: Arc::new(MemoryStore::new()),
            compensations: Arc::new(MemoryStore::new()),
        }
    }

    /// Open the stores selected by the config
    pub fn open(config: &Config) -> Result<Self> {
        match &config.storage {
            StorageBackend::Memory => Ok(Self::in_memory()),
            StorageBackend::Journal { data_dir } => {
                std::fs::create_dir_all(data_dir)?;

                let employees = JournalStore::open(
                    &data_dir.join(Self::EMPLOYEE_WAL),
                    config.wal_sync_strategy,
                )?;
                let compensations = JournalStore::open(
                    &data_dir.join(Self::COMPENSATION_WAL),
                    config.wal_sync_strategy,
                )?;

                Ok(Self {
                    employees: Arc::new(employees),
                    compensations: Arc::new(compensations),
                })
            }
        }
    }
}
