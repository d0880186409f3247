//! HTTP Module
//!
//! REST surface of the directory.
//!
//! ## Routes
//! ```text
//! POST /employee                           create employee
//! GET  /employee/:id                       read employee
//! PUT  /employee/:id                       replace employee
//! GET  /employee/:id/reporting-structure   transitive report count
//! GET  /employee/:id/compensation          read compensation
//! POST /employee/:id/compensation          create compensation (201)
//! PUT  /employee/:id/compensation          update compensation
//! GET  /health                             liveness
//! ```

mod handlers;
mod response;
mod router;
mod server;

pub use response::{ApiError, ErrorResponse, INTERNAL_MESSAGE};
pub use router::build_router;
pub use server::Server;
