//! Directory service
//!
//! The single entry point the HTTP layer talks to. Employee CRUD goes
//! straight to the store; the two derived views delegate to the reporting
//! calculator and the compensation guard.

use std::sync::Arc;

use uuid::Uuid;

use crate::config::Config;
use crate::error::{DirectoryError, Result};
use crate::model::{
    Compensation, CompensationRequest, Employee, EmployeeDraft, ReportingStructure,
};
use crate::store::{Store, Stores};
use super::{CompensationGuard, ReportingCalculator};

/// Employee directory over a pair of stores
#[derive(Clone)]
pub struct Directory {
    employees: Arc<dyn Store<Employee>>,
    reporting: ReportingCalculator,
    compensation: CompensationGuard,
}

impl Directory {
    pub fn new(stores: Stores) -> Self {
        Self {
            reporting: ReportingCalculator::new(Arc::clone(&stores.employees)),
            compensation: CompensationGuard::new(
                Arc::clone(&stores.employees),
                Arc::clone(&stores.compensations),
            ),
            employees: stores.employees,
        }
    }

    /// Open the configured stores and apply the configured seed
    ///
    /// On startup:
    /// 1. Open stores (journaled stores replay their WAL)
    /// 2. Seed the employee store if nothing was recovered
    pub fn open(config: &Config) -> Result<Self> {
        config.validate()?;

        let directory = Self::new(Stores::open(config)?);
        crate::seed::bootstrap(&directory, &config.seed)?;

        Ok(directory)
    }

    /// Directory over fresh in-memory stores
    pub fn in_memory() -> Self {
        Self::new(Stores::in_memory())
    }

    // =========================================================================
    // Employees
    // =========================================================================

    /// Create an employee under a freshly generated identifier
    pub fn create_employee(&self, draft: EmployeeDraft) -> Result<Employee> {
        let employee = draft.into_employee(Uuid::new_v4().to_string());
        tracing::debug!(employee_id = %employee.employee_id, "creating employee");

        self.employees.insert(employee)
    }

    pub fn get_employee(&self, employee_id: &str) -> Result<Employee> {
        tracing::debug!(%employee_id, "reading employee");

        self.employees
            .find(employee_id)?
            .ok_or_else(|| DirectoryError::EmployeeNotFound(employee_id.to_string()))
    }

    /// Replace the employee stored under `employee_id`
    pub fn update_employee(&self, employee_id: &str, draft: EmployeeDraft) -> Result<Employee> {
        tracing::debug!(%employee_id, "updating employee");

        self.employees.save(draft.into_employee(employee_id))
    }

    /// Store an employee with its identifier as given
    pub fn put_employee(&self, employee: Employee) -> Result<Employee> {
        self.employees.save(employee)
    }

    // =========================================================================
    // Reporting structure
    // =========================================================================

    pub fn reporting_structure(&self, employee_id: &str) -> Result<ReportingStructure> {
        tracing::debug!(%employee_id, "computing reporting structure");

        let employee = self.get_employee(employee_id)?;
        self.reporting.structure(employee)
    }

    // =========================================================================
    // Compensation
    // =========================================================================

    pub fn get_compensation(&self, employee_id: &str) -> Result<Compensation> {
        tracing::debug!(%employee_id, "reading compensation");
        self.compensation.get(employee_id)
    }

    pub fn create_compensation(
        &self,
        employee_id: &str,
        request: CompensationRequest,
    ) -> Result<Compensation> {
        tracing::debug!(%employee_id, "creating compensation");
        self.compensation.create(employee_id, request)
    }

    pub fn update_compensation(
        &self,
        employee_id: &str,
        request: CompensationRequest,
    ) -> Result<Compensation> {
        tracing::debug!(%employee_id, "updating compensation");
        self.compensation.update(employee_id, request)
    }

    /// Administrative reset of all compensation records
    pub fn reset_compensations(&self) -> Result<()> {
        tracing::info!("clearing all compensation records");
        self.compensation.reset()
    }

    /// Number of stored employees
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }
}
