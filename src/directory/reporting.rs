//! Reporting structure calculator
//!
//! Counts every employee transitively beneath a root by walking the
//! direct-report graph with an explicit stack.
//!
//! ## Counting rules
//! - Each distinct identifier reachable from the root counts once
//! - A reference that does not resolve still counts, but its subtree is
//!   unknown and contributes nothing
//! - An identifier met a second time (a cycle back to an ancestor, the
//!   root itself, or two managers sharing a report) adds nothing further
//!
//! For a proper tree this equals
//! `|direct reports| + Σ count(resolved report)`.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::Result;
use crate::model::{Employee, ReportingStructure};
use crate::store::Store;

/// Computes transitive report counts against an employee store
#[derive(Clone)]
pub struct ReportingCalculator {
    employees: Arc<dyn Store<Employee>>,
}

impl ReportingCalculator {
    pub fn new(employees: Arc<dyn Store<Employee>>) -> Self {
        Self { employees }
    }

    /// Total number of direct and indirect reports of `root`
    ///
    /// `root` is assumed to exist; callers resolve it first.
    pub fn report_count(&self, root: &Employee) -> Result<usize> {
        let mut visited = HashSet::new();
        visited.insert(root.employee_id.clone());

        let mut pending = Vec::new();
        let mut count = 0;

        self.enqueue_reports(root, &mut visited, &mut pending, &mut count);

        while let Some(id) = pending.pop() {
            match self.employees.find(&id)? {
                Some(report) => {
                    self.enqueue_reports(&report, &mut visited, &mut pending, &mut count)
                }
                None => {
                    tracing::debug!(employee_id = %id, "direct report does not resolve, not descending");
                }
            }
        }

        Ok(count)
    }

    /// Build the reporting structure view for `root`
    pub fn structure(&self, root: Employee) -> Result<ReportingStructure> {
        let number_of_reports = self.report_count(&root)?;
        Ok(ReportingStructure {
            employee: root,
            number_of_reports,
        })
    }

    fn enqueue_reports(
        &self,
        manager: &Employee,
        visited: &mut HashSet<String>,
        pending: &mut Vec<String>,
        count: &mut usize,
    ) {
        for report in &manager.direct_reports {
            if visited.insert(report.employee_id.clone()) {
                *count += 1;
                pending.push(report.employee_id.clone());
            } else {
                tracing::warn!(
                    manager = %manager.employee_id,
                    employee_id = %report.employee_id,
                    "report reached twice in hierarchy, counting once"
                );
            }
        }
    }
}
