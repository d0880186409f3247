//! WAL Writer
//!
//! Handles appending entries to the WAL file.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::WalSyncStrategy;
use crate::error::{DirectoryError, Result};
use super::{Operation, WalEntry, WalReader};

/// Writes entries to the WAL file
///
/// Each frame goes to the file in a single unbuffered write. A failed
/// append is rolled back by truncating the file to the end of the last
/// good frame; if that truncate also fails the writer is poisoned and
/// refuses further appends until reopened.
pub struct WalWriter {
    path: PathBuf,
    file: File,

    /// LSN of the last entry written (0 when empty)
    current_lsn: u64,

    /// File length up to the end of the last successful frame
    len: u64,

    sync_strategy: WalSyncStrategy,

    /// Entries appended since the last fsync
    unsynced: usize,

    /// Set when a failed append could not be rolled back
    poisoned: bool,
}

impl WalWriter {
    /// Open or create a WAL file
    ///
    /// Continues the LSN sequence found in an existing file. Run recovery
    /// first if the tail may be damaged; appending after a torn frame would
    /// hide every later entry from readers.
    pub fn open(path: &Path, sync_strategy: WalSyncStrategy) -> Result<Self> {
        let mut current_lsn = 0;
        if path.exists() {
            for entry in WalReader::open(path)?.entries() {
                match entry {
                    Ok(entry) => current_lsn = entry.lsn,
                    Err(_) => break,
                }
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let len = file.metadata()?.len();

        Ok(Self {
            path: path.to_path_buf(),
            file,
            current_lsn,
            len,
            sync_strategy,
            unsynced: 0,
            poisoned: false,
        })
    }

    /// Append an operation to the WAL, returning its LSN
    ///
    /// On error nothing of this entry remains in the file and the LSN is
    /// not consumed.
    pub fn append(&mut self, operation: Operation) -> Result<u64> {
        if self.poisoned {
            return Err(DirectoryError::WalWrite(format!(
                "{}: writer disabled after an unrecoverable failure, reopen to continue",
                self.path.display()
            )));
        }

        let lsn = self.current_lsn + 1;
        let bytes = WalEntry::new(lsn, operation).serialize()?;

        let due = match self.sync_strategy {
            WalSyncStrategy::EveryWrite => true,
            WalSyncStrategy::EveryNEntries { count } => self.unsynced + 1 >= count,
        };

        let written = self.file.write_all(&bytes).and_then(|_| {
            if due {
                self.file.sync_data()
            } else {
                Ok(())
            }
        });

        if let Err(e) = written {
            self.roll_back(lsn, &e);
            return Err(DirectoryError::WalWrite(format!("{}: {}", self.path.display(), e)));
        }

        self.len += bytes.len() as u64;
        self.current_lsn = lsn;
        self.unsynced = if due { 0 } else { self.unsynced + 1 };

        Ok(lsn)
    }

    /// Force sync to disk
    pub fn sync(&mut self) -> Result<()> {
        self.file.sync_data()?;
        self.unsynced = 0;
        Ok(())
    }

    /// Get the current LSN
    pub fn current_lsn(&self) -> u64 {
        self.current_lsn
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True once a failed append could not be undone
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// Cut the file back to the last good frame after a failed append
    fn roll_back(&mut self, lsn: u64, cause: &io::Error) {
        match self.file.set_len(self.len) {
            Ok(()) => {
                tracing::warn!(
                    path = %self.path.display(),
                    lsn,
                    error = %cause,
                    "WAL append failed, discarded partial frame"
                );
            }
            Err(e) => {
                tracing::error!(
                    path = %self.path.display(),
                    lsn,
                    error = %cause,
                    truncate_error = %e,
                    "WAL append failed and could not be rolled back, disabling writer"
                );
                self.poisoned = true;
            }
        }
    }
}
