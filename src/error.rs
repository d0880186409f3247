//! Error types for orgchart
//!
//! Provides a unified error type for all operations. Domain failures carry
//! the identifier they concern; everything else collapses to an internal
//! error at the HTTP boundary.

use thiserror::Error;

/// Result type alias using DirectoryError
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Unified error type for orgchart operations
#[derive(Debug, Error)]
pub enum DirectoryError {
    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Employee not found with ID: {0}")]
    EmployeeNotFound(String),

    #[error("Compensation not found for employee ID: {0}")]
    CompensationNotFound(String),

    #[error(
        "Compensation already exists for employee ID: {0}. \
         Use the update endpoint to update the compensation."
    )]
    CompensationAlreadyExists(String),

    #[error("{0}")]
    InvalidRequest(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // WAL Errors
    // -------------------------------------------------------------------------
    #[error("WAL corruption detected: {0}")]
    WalCorruption(String),

    #[error("WAL write failed: {0}")]
    WalWrite(String),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Seed error: {0}")]
    Seed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DirectoryError {
    /// Stable error code reported to clients
    pub fn error_code(&self) -> &'static str {
        match self {
            DirectoryError::EmployeeNotFound(_) => "EMPLOYEE_NOT_FOUND",
            DirectoryError::CompensationNotFound(_) => "COMPENSATION_NOT_FOUND",
            DirectoryError::CompensationAlreadyExists(_) => "COMPENSATION_ALREADY_EXISTS",
            DirectoryError::InvalidRequest(_) => "INVALID_REQUEST",
            _ => "INTERNAL_SERVER_ERROR",
        }
    }

    /// True for failures caused by the request rather than the service
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            DirectoryError::EmployeeNotFound(_)
                | DirectoryError::CompensationNotFound(_)
                | DirectoryError::CompensationAlreadyExists(_)
                | DirectoryError::InvalidRequest(_)
        )
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(e: serde_json::Error) -> Self {
        DirectoryError::Serialization(e.to_string())
    }
}

impl From<bincode::Error> for DirectoryError {
    fn from(e: bincode::Error) -> Self {
        DirectoryError::Serialization(e.to_string())
    }
}
