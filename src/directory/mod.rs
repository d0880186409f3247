//! Directory Module
//!
//! Core logic of the service.
//!
//! ## Responsibilities
//! - Employee CRUD over the employee store
//! - Transitive reporting counts ([`ReportingCalculator`])
//! - Compensation existence and identity checks ([`CompensationGuard`])
//!
//! Every operation is synchronous and all-or-nothing; failures surface as
//! typed [`DirectoryError`](crate::DirectoryError)s for the HTTP layer to map.

mod compensation;
mod reporting;
mod service;

pub use compensation::CompensationGuard;
pub use reporting::ReportingCalculator;
pub use service::Directory;
