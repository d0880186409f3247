//! Seed data
//!
//! Loads an initial set of employees at startup. Seeding only happens into
//! an empty employee store, so a journaled store that recovered data keeps
//! its own edits across restarts.

use std::path::Path;

use crate::config::SeedSource;
use crate::directory::Directory;
use crate::error::{DirectoryError, Result};
use crate::model::Employee;

/// Reference hierarchy compiled into the binary
const BUNDLED: &str = include_str!("../data/employee_database.json");

/// Parse the bundled employee set
pub fn bundled() -> Result<Vec<Employee>> {
    parse(BUNDLED, "bundled seed")
}

/// Parse a JSON array of employees from disk
pub fn load(path: &Path) -> Result<Vec<Employee>> {
    let raw = std::fs::read_to_string(path)?;
    parse(&raw, &path.display().to_string())
}

/// Save every employee into the directory, returning how many were written
pub fn apply(directory: &Directory, employees: Vec<Employee>) -> Result<usize> {
    let mut written = 0;
    for employee in employees {
        if employee.employee_id.trim().is_empty() {
            return Err(DirectoryError::Seed(format!(
                "employee {} has no identifier",
                employee.full_name()
            )));
        }
        directory.put_employee(employee)?;
        written += 1;
    }
    Ok(written)
}

/// Resolve a seed source and apply it to an empty directory
pub fn bootstrap(directory: &Directory, source: &SeedSource) -> Result<usize> {
    if directory.employee_count() > 0 {
        tracing::info!(
            employees = directory.employee_count(),
            "employee store already populated, skipping seed"
        );
        return Ok(0);
    }

    let employees = match source {
        SeedSource::Bundled => bundled()?,
        SeedSource::File(path) => load(path)?,
        SeedSource::None => return Ok(0),
    };

    let written = apply(directory, employees)?;
    tracing::info!(employees = written, source = ?source, "seeded employee store");
    Ok(written)
}

fn parse(raw: &str, origin: &str) -> Result<Vec<Employee>> {
    serde_json::from_str(raw).map_err(|e| DirectoryError::Seed(format!("{}: {}", origin, e)))
}
