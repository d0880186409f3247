//! Employee records
//!
//! Direct reports are held as [`EmployeeRef`]s, identifier-only pointers
//! that must be resolved through the employee store. A full [`Employee`]
//! never owns its subordinates.

use serde::{Deserialize, Deserializer, Serialize};

use super::Document;

/// A stored employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Assigned at creation, never reassigned
    pub employee_id: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub position: String,

    #[serde(default)]
    pub department: String,

    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub direct_reports: Vec<EmployeeRef>,
}

/// Pointer-by-identifier from a manager to a subordinate
///
/// Clients may send full employee stubs here; everything but the
/// identifier is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRef {
    pub employee_id: String,
}

impl EmployeeRef {
    pub fn new(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
        }
    }
}

/// Employee body accepted by create and replace requests
///
/// Any `employeeId` in the body is ignored: creation generates one and
/// replacement takes it from the path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub position: String,

    #[serde(default)]
    pub department: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub direct_reports: Vec<EmployeeRef>,
}

impl EmployeeDraft {
    /// Attach an identifier, producing a storable employee
    pub fn into_employee(self, employee_id: impl Into<String>) -> Employee {
        Employee {
            employee_id: employee_id.into(),
            first_name: self.first_name,
            last_name: self.last_name,
            position: self.position,
            department: self.department,
            direct_reports: self.direct_reports,
        }
    }
}

impl Employee {
    /// Reference to this employee, for use in a manager's report list
    pub fn reference(&self) -> EmployeeRef {
        EmployeeRef::new(self.employee_id.clone())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Document for Employee {
    const KIND: &'static str = "employee";

    fn key(&self) -> &str {
        &self.employee_id
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<EmployeeRef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<EmployeeRef>>::deserialize(deserializer)?.unwrap_or_default())
}
