//! Tests for the reporting structure calculator
//!
//! These tests verify:
//! - Leaf employees have no reports
//! - Tree hierarchies sum direct reports plus resolved subtrees
//! - Unresolvable references count but are not explored
//! - Cycles and shared reports terminate and count each employee once
//! - The bundled hierarchy gives John Lennon four reports

use std::sync::Arc;

use orgchart::directory::{Directory, ReportingCalculator};
use orgchart::model::{Employee, EmployeeRef};
use orgchart::store::{MemoryStore, Store, Stores};
use orgchart::{seed, DirectoryError};

// =============================================================================
// Helper Functions
// =============================================================================

fn employee(id: &str, reports: &[&str]) -> Employee {
    Employee {
        employee_id: id.to_string(),
        first_name: id.to_uppercase(),
        last_name: "Test".to_string(),
        position: "Developer".to_string(),
        department: "Engineering".to_string(),
        direct_reports: reports.iter().map(|r| EmployeeRef::new(*r)).collect(),
    }
}

/// Store holding the given employees, plus a calculator over it
fn setup(employees: Vec<Employee>) -> (Arc<MemoryStore<Employee>>, ReportingCalculator) {
    let store: Arc<MemoryStore<Employee>> = Arc::new(MemoryStore::new());
    for e in employees {
        store.save(e).unwrap();
    }
    let calculator = ReportingCalculator::new(store.clone());
    (store, calculator)
}

fn count(calculator: &ReportingCalculator, store: &MemoryStore<Employee>, id: &str) -> usize {
    let root = store.find(id).unwrap().unwrap();
    calculator.report_count(&root).unwrap()
}

// =============================================================================
// Tree Tests
// =============================================================================

#[test]
fn test_no_direct_reports_is_zero() {
    let (store, calculator) = setup(vec![employee("solo", &[])]);

    assert_eq!(count(&calculator, &store, "solo"), 0);
}

#[test]
fn test_direct_reports_only() {
    let (store, calculator) = setup(vec![
        employee("boss", &["a", "b", "c"]),
        employee("a", &[]),
        employee("b", &[]),
        employee("c", &[]),
    ]);

    assert_eq!(count(&calculator, &store, "boss"), 3);
}

#[test]
fn test_tree_matches_recursive_sum() {
    let (store, calculator) = setup(vec![
        employee("ceo", &["cto", "cfo"]),
        employee("cto", &["dev1", "dev2", "dev3"]),
        employee("cfo", &["acct"]),
        employee("dev1", &["intern"]),
        employee("dev2", &[]),
        employee("dev3", &[]),
        employee("acct", &[]),
        employee("intern", &[]),
    ]);

    let cto = count(&calculator, &store, "cto");
    let cfo = count(&calculator, &store, "cfo");
    assert_eq!(cto, 4);
    assert_eq!(cfo, 1);
    assert_eq!(count(&calculator, &store, "ceo"), 2 + cto + cfo);
}

#[test]
fn test_hierarchy_linked_by_reference() {
    let dev = employee("dev", &[]);
    let qa = employee("qa", &[]);
    let mut lead = employee("lead", &[]);
    lead.direct_reports = vec![dev.reference(), qa.reference()];
    let mut head = employee("head", &[]);
    head.direct_reports.push(lead.reference());

    let (store, calculator) = setup(vec![head, lead, dev, qa]);

    assert_eq!(count(&calculator, &store, "lead"), 2);
    assert_eq!(count(&calculator, &store, "head"), 3);
}

#[test]
fn test_unresolvable_report_counts_but_is_not_explored() {
    let (store, calculator) = setup(vec![
        employee("boss", &["known", "ghost"]),
        employee("known", &["leaf"]),
        employee("leaf", &[]),
    ]);

    assert_eq!(count(&calculator, &store, "boss"), 3);
}

// =============================================================================
// Malformed Hierarchy Tests
// =============================================================================

#[test]
fn test_cycle_terminates() {
    let (store, calculator) = setup(vec![
        employee("a", &["b"]),
        employee("b", &["c"]),
        employee("c", &["a"]),
    ]);

    assert_eq!(count(&calculator, &store, "a"), 2);
    assert_eq!(count(&calculator, &store, "b"), 2);
}

#[test]
fn test_self_report_not_counted() {
    let (store, calculator) = setup(vec![
        employee("narcissus", &["narcissus", "x"]),
        employee("x", &[]),
    ]);

    assert_eq!(count(&calculator, &store, "narcissus"), 1);
}

#[test]
fn test_shared_report_counted_once() {
    let (store, calculator) = setup(vec![
        employee("top", &["left", "right"]),
        employee("left", &["shared"]),
        employee("right", &["shared"]),
        employee("shared", &["deep"]),
        employee("deep", &[]),
    ]);

    assert_eq!(count(&calculator, &store, "top"), 4);
}

#[test]
fn test_duplicate_reference_counted_once() {
    let (store, calculator) = setup(vec![employee("boss", &["a", "a"]), employee("a", &[])]);

    assert_eq!(count(&calculator, &store, "boss"), 1);
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let depth = 50_000;
    let employees = (0..depth)
        .map(|i| {
            let next = format!("e{}", i + 1);
            if i + 1 < depth {
                employee(&format!("e{}", i), &[next.as_str()])
            } else {
                employee(&format!("e{}", i), &[])
            }
        })
        .collect();
    let (store, calculator) = setup(employees);

    assert_eq!(count(&calculator, &store, "e0"), depth - 1);
}

// =============================================================================
// Directory Tests
// =============================================================================

#[test]
fn test_bundled_hierarchy_john_lennon_has_four_reports() {
    let directory = Directory::in_memory();
    seed::apply(&directory, seed::bundled().unwrap()).unwrap();

    let structure = directory
        .reporting_structure("16a596ae-edd3-4847-99fe-c4518e82c86f")
        .unwrap();

    assert_eq!(structure.number_of_reports, 4);
    assert_eq!(structure.employee.first_name, "John");
    assert_eq!(structure.employee.last_name, "Lennon");
}

#[test]
fn test_bundled_hierarchy_ringo_has_two_reports() {
    let directory = Directory::new(Stores::in_memory());
    seed::apply(&directory, seed::bundled().unwrap()).unwrap();

    let structure = directory
        .reporting_structure("03aa1462-ffa9-4978-901b-7c001562cf6f")
        .unwrap();

    assert_eq!(structure.number_of_reports, 2);
}

#[test]
fn test_reporting_structure_unknown_employee() {
    let directory = Directory::in_memory();

    let result = directory.reporting_structure("nonexistent-id");

    assert!(matches!(result, Err(DirectoryError::EmployeeNotFound(id)) if id == "nonexistent-id"));
}
