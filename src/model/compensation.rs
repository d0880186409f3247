//! Compensation records

use serde::{Deserialize, Serialize};

use super::Document;

/// A stored compensation, keyed by employee identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compensation {
    pub salary: f64,

    /// Calendar date (`YYYY-MM-DD`) from which the salary applies
    pub effective_date: String,

    pub employee_id: String,
}

/// Compensation body accepted by create and update requests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompensationRequest {
    #[serde(default)]
    pub salary: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

impl CompensationRequest {
    pub fn new(employee_id: impl Into<String>, salary: f64) -> Self {
        Self {
            salary,
            effective_date: None,
            employee_id: Some(employee_id.into()),
        }
    }

    pub fn effective_on(mut self, date: impl Into<String>) -> Self {
        self.effective_date = Some(date.into());
        self
    }

    /// True when the body names exactly the given employee
    pub fn targets(&self, employee_id: &str) -> bool {
        self.employee_id.as_deref() == Some(employee_id)
    }
}

impl Document for Compensation {
    const KIND: &'static str = "compensation";

    fn key(&self) -> &str {
        &self.employee_id
    }
}

/// Today's local calendar date as `YYYY-MM-DD`
pub fn today() -> String {
    chrono::Local::now().date_naive().to_string()
}
