use std::fs;

use tempfile::tempdir;
use wallet_core::ledger::{Category, ExpenseDraft, Ledger, DEFAULT_STARTING_BALANCE};
use wallet_core::storage::json_backend::{load_snapshot_from_path, save_snapshot_to_path};
use wallet_core::storage::{JsonStore, SnapshotStore};

fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::with_balance(900.0);
    ledger
        .add_expense(ExpenseDraft::new("Lunch", 100.0, Category::Food))
        .expect("add sample expense");
    ledger
}

#[test]
fn snapshot_survives_a_new_store_instance() {
    let temp = tempdir().unwrap();
    let base = temp.path().to_path_buf();

    let store = JsonStore::new(Some(base.clone())).unwrap();
    store.save(&sample_ledger()).unwrap();

    let reopened = JsonStore::new(Some(base)).unwrap();
    let loaded = reopened.load().unwrap().expect("snapshot present");
    assert_eq!(loaded.balance, 800.0);
    assert_eq!(loaded.transactions[0].title, "Lunch");
    assert_eq!(loaded.transactions[0].category, Category::Food);
}

#[test]
fn atomic_save_failure_preserves_original_file() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf())).unwrap();

    let mut ledger = sample_ledger();
    store.save(&ledger).expect("initial save");
    let original = fs::read_to_string(store.snapshot_path()).expect("read original file");

    // Create a directory that collides with the temp file name to force File::create to fail.
    let tmp_path = store.snapshot_path().with_extension("json.tmp");
    fs::create_dir_all(&tmp_path).unwrap();

    // Mutate the ledger so the new JSON would differ if the save succeeded.
    ledger
        .add_expense(ExpenseDraft::new("Taxi", 50.0, Category::Transport))
        .unwrap();
    let result = store.save(&ledger);
    assert!(
        result.is_err(),
        "expected save to fail when the temp path is a directory"
    );

    let current = fs::read_to_string(store.snapshot_path()).expect("read after failure");
    assert_eq!(
        current, original,
        "atomic save failure must not corrupt the original file"
    );

    let _ = fs::remove_dir_all(&tmp_path);
}

#[test]
fn malformed_snapshot_reads_as_absent() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf())).unwrap();
    fs::write(store.snapshot_path(), "{\"balance\": ").unwrap();

    assert!(store.load().unwrap().is_none());
}

#[test]
fn partial_snapshot_fills_missing_fields_with_defaults() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf())).unwrap();
    fs::write(store.snapshot_path(), r#"{"balance": 123.0}"#).unwrap();

    let loaded = store.load().unwrap().expect("snapshot present");
    assert_eq!(loaded.balance, 123.0);
    assert!(loaded.transactions.is_empty());
}

#[test]
fn save_creates_missing_parent_directories() {
    let temp = tempdir().unwrap();
    let nested = temp.path().join("deep").join("wallet.json");

    save_snapshot_to_path(&sample_ledger(), &nested).unwrap();
    let loaded = load_snapshot_from_path(&nested).unwrap();
    assert_eq!(loaded.balance, 800.0);
}

#[test]
fn missing_snapshot_leaves_the_default_to_the_caller() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf())).unwrap();

    assert!(store.load().unwrap().is_none());
    assert_eq!(Ledger::default().balance, DEFAULT_STARTING_BALANCE);
}
