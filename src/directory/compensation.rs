//! Compensation lifecycle guard
//!
//! Enforces the existence and identity rules around compensation records.
//!
//! ## Error precedence
//! - create: `EmployeeNotFound` → `InvalidRequest` → `CompensationAlreadyExists`
//! - update: `CompensationNotFound` → `InvalidRequest`
//! - get:    `EmployeeNotFound` → `CompensationNotFound`
//!
//! The existence pre-check on create only produces the early error; the
//! store's unique-key insert is what actually rejects a concurrent
//! duplicate.

use std::sync::Arc;

use crate::error::{DirectoryError, Result};
use crate::model::{today, Compensation, CompensationRequest, Employee};
use crate::store::Store;

const IDENTITY_MISMATCH: &str = "EmployeeId in request body does not match employeeId in path";

/// Validates and applies compensation mutations
#[derive(Clone)]
pub struct CompensationGuard {
    employees: Arc<dyn Store<Employee>>,
    compensations: Arc<dyn Store<Compensation>>,
}

impl CompensationGuard {
    pub fn new(
        employees: Arc<dyn Store<Employee>>,
        compensations: Arc<dyn Store<Compensation>>,
    ) -> Self {
        Self {
            employees,
            compensations,
        }
    }

    /// Create the compensation for an employee that has none yet
    pub fn create(&self, employee_id: &str, request: CompensationRequest) -> Result<Compensation> {
        self.require_employee(employee_id)?;
        Self::require_identity(employee_id, &request)?;

        if self.compensations.find(employee_id)?.is_some() {
            return Err(DirectoryError::CompensationAlreadyExists(employee_id.to_string()));
        }

        let compensation = Compensation {
            salary: request.salary,
            effective_date: request.effective_date.unwrap_or_else(today),
            employee_id: employee_id.to_string(),
        };

        self.compensations
            .insert(compensation)
            .map_err(|e| match e {
                DirectoryError::DuplicateKey(_) => {
                    DirectoryError::CompensationAlreadyExists(employee_id.to_string())
                }
                other => other,
            })
    }

    /// Replace an existing compensation, stamping it with today's date
    pub fn update(&self, employee_id: &str, request: CompensationRequest) -> Result<Compensation> {
        if self.compensations.find(employee_id)?.is_none() {
            return Err(DirectoryError::CompensationNotFound(employee_id.to_string()));
        }
        Self::require_identity(employee_id, &request)?;

        let compensation = Compensation {
            salary: request.salary,
            effective_date: today(),
            employee_id: employee_id.to_string(),
        };

        self.compensations.save(compensation)
    }

    /// Fetch the compensation of an existing employee
    pub fn get(&self, employee_id: &str) -> Result<Compensation> {
        self.require_employee(employee_id)?;

        self.compensations
            .find(employee_id)?
            .ok_or_else(|| DirectoryError::CompensationNotFound(employee_id.to_string()))
    }

    /// Drop every compensation record
    pub fn reset(&self) -> Result<()> {
        self.compensations.clear()
    }

    fn require_employee(&self, employee_id: &str) -> Result<Employee> {
        self.employees
            .find(employee_id)?
            .ok_or_else(|| DirectoryError::EmployeeNotFound(employee_id.to_string()))
    }

    fn require_identity(employee_id: &str, request: &CompensationRequest) -> Result<()> {
        if request.targets(employee_id) {
            Ok(())
        } else {
            Err(DirectoryError::InvalidRequest(IDENTITY_MISMATCH.to_string()))
        }
    }
}
