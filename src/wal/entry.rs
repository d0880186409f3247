//! WAL Entry definitions
//!
//! Defines the structure of individual WAL log entries and their framing.

use std::time::{SystemTime, UNIX_EPOCH};

use bytes::{BufMut, BytesMut};
use serde::{Deserialize, Serialize};

use crate::error::{DirectoryError, Result};

/// Frame header: LSN (8) + CRC (4) + LEN (4)
pub const HEADER_SIZE: usize = 16;

/// Largest DATA section accepted when decoding (16 MB)
pub const MAX_ENTRY_SIZE: usize = 16 * 1024 * 1024;

/// A single entry in the WAL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalEntry {
    /// Log Sequence Number - monotonically increasing
    pub lsn: u64,

    /// The operation to perform
    pub operation: Operation,

    /// Timestamp (unix millis) when entry was created
    pub timestamp: u64,
}

/// Operations that can be logged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    /// Insert or replace a document
    Put { key: String, value: Vec<u8> },

    /// Remove every document
    Clear,
}

impl WalEntry {
    /// Create an entry stamped with the current wall-clock time
    pub fn new(lsn: u64, operation: Operation) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        Self {
            lsn,
            operation,
            timestamp,
        }
    }

    /// Encode as a full frame: header followed by the bincode body
    pub fn serialize(&self) -> Result<Vec<u8>> {
        let data = bincode::serialize(self)?;
        if data.len() > MAX_ENTRY_SIZE {
            return Err(DirectoryError::WalWrite(format!(
                "entry of {} bytes exceeds limit of {}",
                data.len(),
                MAX_ENTRY_SIZE
            )));
        }

        let mut frame = BytesMut::with_capacity(HEADER_SIZE + data.len());
        frame.put_u64(self.lsn);
        frame.put_u32(Self::compute_crc(&data));
        frame.put_u32(data.len() as u32);
        frame.put_slice(&data);

        Ok(frame.to_vec())
    }

    /// Decode a full frame, verifying length, checksum and LSN
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        let header = Self::parse_header(bytes)?;

        let end = HEADER_SIZE + header.len;
        if bytes.len() < end {
            return Err(DirectoryError::WalCorruption(format!(
                "truncated entry: expected {} bytes of data, got {}",
                header.len,
                bytes.len() - HEADER_SIZE
            )));
        }

        let data = &bytes[HEADER_SIZE..end];
        let actual_crc = Self::compute_crc(data);
        if actual_crc != header.crc {
            return Err(DirectoryError::WalCorruption(format!(
                "CRC mismatch at lsn {}: stored {:08x}, computed {:08x}",
                header.lsn, header.crc, actual_crc
            )));
        }

        let entry: WalEntry = bincode::deserialize(data)
            .map_err(|e| DirectoryError::WalCorruption(format!("undecodable entry: {}", e)))?;

        if entry.lsn != header.lsn {
            return Err(DirectoryError::WalCorruption(format!(
                "LSN mismatch: header {}, body {}",
                header.lsn, entry.lsn
            )));
        }

        Ok(entry)
    }

    /// CRC32 over the DATA section
    pub fn compute_crc(data: &[u8]) -> u32 {
        crc32fast::hash(data)
    }

    pub(crate) fn parse_header(bytes: &[u8]) -> Result<FrameHeader> {
        if bytes.len() < HEADER_SIZE {
            return Err(DirectoryError::WalCorruption(format!(
                "incomplete header: expected {} bytes, got {}",
                HEADER_SIZE,
                bytes.len()
            )));
        }

        let mut lsn = [0u8; 8];
        lsn.copy_from_slice(&bytes[0..8]);
        let mut crc = [0u8; 4];
        crc.copy_from_slice(&bytes[8..12]);
        let mut len = [0u8; 4];
        len.copy_from_slice(&bytes[12..16]);

        let len = u32::from_be_bytes(len) as usize;
        if len > MAX_ENTRY_SIZE {
            return Err(DirectoryError::WalCorruption(format!(
                "entry length {} exceeds limit of {}",
                len, MAX_ENTRY_SIZE
            )));
        }

        Ok(FrameHeader {
            lsn: u64::from_be_bytes(lsn),
            crc: u32::from_be_bytes(crc),
            len,
        })
    }
}

/// Decoded frame header
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrameHeader {
    pub lsn: u64,
    pub crc: u32,
    pub len: usize,
}
