//! Configuration for orgchart
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{DirectoryError, Result};

/// Main configuration for an orgchart instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Where employee and compensation documents live
    pub storage: StorageBackend,

    /// Sync strategy: how often to fsync the journals
    pub wal_sync_strategy: WalSyncStrategy,

    // -------------------------------------------------------------------------
    // Bootstrap Configuration
    // -------------------------------------------------------------------------
    /// Employees loaded into the store at startup
    pub seed: SeedSource,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,
}

/// Storage backend selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Volatile in-process maps
    Memory,

    /// Journaled stores rooted at `data_dir`
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── employees.wal
    ///     └── compensations.wal
    Journal { data_dir: PathBuf },
}

/// WAL sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalSyncStrategy {
    /// fsync after every write (safest, slowest)
    EveryWrite,

    /// fsync after N uncommitted entries (balanced durability/performance)
    EveryNEntries { count: usize },
}

/// Source of the startup employee set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// The reference hierarchy compiled into the binary
    Bundled,

    /// A JSON array of employees on disk
    File(PathBuf),

    /// Start empty
    None,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageBackend::Memory,
            wal_sync_strategy: WalSyncStrategy::EveryNEntries { count: 100 },
            seed: SeedSource::Bundled,
            listen_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject configurations the server cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.listen_addr.trim().is_empty() {
            return Err(DirectoryError::Config("listen address is empty".to_string()));
        }
        if let WalSyncStrategy::EveryNEntries { count: 0 } = self.wal_sync_strategy {
            return Err(DirectoryError::Config(
                "sync interval must be at least one entry".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Keep all documents in memory
    pub fn in_memory(mut self) -> Self {
        self.config.storage = StorageBackend::Memory;
        self
    }

    /// Journal documents under the given directory
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.storage = StorageBackend::Journal {
            data_dir: path.into(),
        };
        self
    }

    /// Set the WAL sync strategy
    pub fn wal_sync_strategy(mut self, strategy: WalSyncStrategy) -> Self {
        self.config.wal_sync_strategy = strategy;
        self
    }

    /// Set the startup employee set
    pub fn seed(mut self, seed: SeedSource) -> Self {
        self.config.seed = seed;
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
