//! # orgchart
//!
//! An employee directory service with:
//! - Employee CRUD over a key-value document store
//! - Reporting structure: transitive report counts over the org hierarchy
//! - Compensation records guarded by existence and identity checks
//! - Optional WAL-journaled persistence with crash recovery
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     HTTP (axum)                              │
//! │          routes, JSON bodies, error → status mapping         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Directory                                 │
//! │     employee CRUD · ReportingCalculator · CompensationGuard  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Employee   │          │Compensation │
//!   │   Store     │          │   Store     │
//!   └──────┬──────┘          └──────┬──────┘
//!          │   (JournalStore only)   │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │     WAL     │          │     WAL     │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod wal;
pub mod model;
pub mod store;
pub mod directory;
pub mod seed;
pub mod http;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DirectoryError, Result};
pub use config::Config;
pub use directory::Directory;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of orgchart
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
