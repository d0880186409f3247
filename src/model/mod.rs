//! Model Module
//!
//! Records held by the stores and the views computed from them.

mod compensation;
mod employee;

pub use compensation::{today, Compensation, CompensationRequest};
pub use employee::{Employee, EmployeeDraft, EmployeeRef};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record that can live in a [`Store`](crate::store::Store)
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Short name used in logs and errors
    const KIND: &'static str;

    /// Unique key within its store
    fn key(&self) -> &str;
}

/// An employee plus the count of everyone transitively beneath them
///
/// Computed per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingStructure {
    pub employee: Employee,
    pub number_of_reports: usize,
}
