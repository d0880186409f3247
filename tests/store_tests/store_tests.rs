//! Tests for document stores
//!
//! These tests verify:
//! - Insert/find/save/clear semantics for both backends
//! - Unique-key insert under concurrent callers
//! - Journal replay across reopen, including clears
//! - Recovery of a journal with a damaged tail

use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Arc;
use std::thread;

use orgchart::config::{Config, WalSyncStrategy};
use orgchart::model::{Compensation, Employee, EmployeeRef};
use orgchart::store::{JournalStore, MemoryStore, Store, Stores};
use orgchart::DirectoryError;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn employee(id: &str, first: &str) -> Employee {
    Employee {
        employee_id: id.to_string(),
        first_name: first.to_string(),
        last_name: "Doe".to_string(),
        position: "Developer".to_string(),
        department: "Engineering".to_string(),
        direct_reports: Vec::new(),
    }
}

fn compensation(id: &str, salary: f64) -> Compensation {
    Compensation {
        salary,
        effective_date: "2024-01-01".to_string(),
        employee_id: id.to_string(),
    }
}

fn open_journal<T: orgchart::model::Document>(dir: &TempDir, name: &str) -> JournalStore<T> {
    JournalStore::open(&dir.path().join(name), WalSyncStrategy::EveryWrite).unwrap()
}

/// Shared checks every backend must pass
fn exercise_store(store: &dyn Store<Employee>) {
    assert!(store.is_empty());

    store.insert(employee("a", "Ann")).unwrap();
    assert_eq!(store.find("a").unwrap().unwrap().first_name, "Ann");
    assert!(store.find("missing").unwrap().is_none());

    let dup = store.insert(employee("a", "Other"));
    assert!(matches!(dup, Err(DirectoryError::DuplicateKey(_))));
    assert_eq!(store.find("a").unwrap().unwrap().first_name, "Ann");

    store.save(employee("a", "Anne")).unwrap();
    store.save(employee("b", "Bob")).unwrap();
    assert_eq!(store.find("a").unwrap().unwrap().first_name, "Anne");
    assert_eq!(store.len(), 2);

    store.clear().unwrap();
    assert!(store.is_empty());
    assert!(store.find("b").unwrap().is_none());
}

// =============================================================================
// Backend Semantics Tests
// =============================================================================

#[test]
fn test_memory_store_semantics() {
    let store: MemoryStore<Employee> = MemoryStore::new();
    exercise_store(&store);
}

#[test]
fn test_journal_store_semantics() {
    let temp = TempDir::new().unwrap();
    let store = open_journal::<Employee>(&temp, "employees.wal");
    exercise_store(&store);
}

#[test]
fn test_concurrent_inserts_single_winner() {
    let store: Arc<MemoryStore<Compensation>> = Arc::new(MemoryStore::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.insert(compensation("emp", 1000.0 * i as f64)).is_ok())
        })
        .collect();

    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|won| *won)
        .count();

    assert_eq!(winners, 1);
    assert_eq!(store.len(), 1);
}

// =============================================================================
// Journal Persistence Tests
// =============================================================================

#[test]
fn test_journal_survives_reopen() {
    let temp = TempDir::new().unwrap();

    {
        let store = open_journal::<Employee>(&temp, "employees.wal");
        let mut manager = employee("m", "Mia");
        manager.direct_reports = vec![EmployeeRef::new("r")];
        store.insert(manager).unwrap();
        store.insert(employee("r", "Rob")).unwrap();
        store.save(employee("r", "Robert")).unwrap();
        assert_eq!(store.last_lsn(), 3);
    }

    let store = open_journal::<Employee>(&temp, "employees.wal");
    assert_eq!(store.len(), 2);
    assert_eq!(store.find("r").unwrap().unwrap().first_name, "Robert");
    assert_eq!(
        store.find("m").unwrap().unwrap().direct_reports,
        vec![EmployeeRef::new("r")]
    );
    assert_eq!(store.last_lsn(), 3);
}

#[test]
fn test_journal_batched_sync() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("employees.wal");

    {
        let store: JournalStore<Employee> =
            JournalStore::open(&path, WalSyncStrategy::EveryNEntries { count: 100 }).unwrap();
        assert_eq!(store.path(), path.as_path());
        for i in 0..10 {
            store.insert(employee(&format!("e{}", i), "Eve")).unwrap();
        }
        store.sync().unwrap();
    }

    let store = open_journal::<Employee>(&temp, "employees.wal");
    assert_eq!(store.len(), 10);
    assert_eq!(store.last_lsn(), 10);
}

#[test]
fn test_journal_replays_clear() {
    let temp = TempDir::new().unwrap();

    {
        let store = open_journal::<Compensation>(&temp, "compensations.wal");
        store.insert(compensation("a", 1.0)).unwrap();
        store.clear().unwrap();
        store.insert(compensation("b", 2.0)).unwrap();
    }

    let store = open_journal::<Compensation>(&temp, "compensations.wal");
    assert_eq!(store.len(), 1);
    assert!(store.find("a").unwrap().is_none());
    assert_eq!(store.find("b").unwrap().unwrap().salary, 2.0);
}

#[test]
fn test_journal_recovers_from_torn_tail() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("employees.wal");

    {
        let store = open_journal::<Employee>(&temp, "employees.wal");
        store.insert(employee("a", "Ann")).unwrap();
    }

    let mut file = OpenOptions::new().append(true).open(&path).unwrap();
    file.write_all(&[0x00, 0x01, 0x02]).unwrap();
    drop(file);

    let store = open_journal::<Employee>(&temp, "employees.wal");
    assert_eq!(store.len(), 1);

    store.insert(employee("b", "Bob")).unwrap();
    drop(store);

    let store = open_journal::<Employee>(&temp, "employees.wal");
    assert_eq!(store.len(), 2);
}

#[test]
fn test_stores_open_creates_journal_files() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    let config = Config::builder()
        .data_dir(&data_dir)
        .wal_sync_strategy(WalSyncStrategy::EveryWrite)
        .build();

    let stores = Stores::open(&config).unwrap();
    stores.employees.insert(employee("a", "Ann")).unwrap();

    assert!(data_dir.join("employees.wal").exists());
    assert!(data_dir.join("compensations.wal").exists());
}
