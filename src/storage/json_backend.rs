use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{ledger::Ledger, utils::ensure_dir};

use super::{Result, SnapshotStore};

const SNAPSHOT_FILE: &str = "wallet.json";
const TMP_SUFFIX: &str = "tmp";

/// Stores the wallet snapshot as pretty-printed JSON under the application
/// data directory.
#[derive(Clone)]
pub struct JsonStore {
    snapshot_path: PathBuf,
}

impl JsonStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(crate::utils::app_data_dir);
        ensure_dir(&root)?;
        Ok(Self {
            snapshot_path: root.join(SNAPSHOT_FILE),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }
}

impl SnapshotStore for JsonStore {
    fn load(&self) -> Result<Option<Ledger>> {
        if !self.snapshot_path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.snapshot_path)?;
        match serde_json::from_str(&data) {
            Ok(ledger) => {
                tracing::debug!("Loaded snapshot from {}", self.snapshot_path.display());
                Ok(Some(ledger))
            }
            Err(err) => {
                tracing::warn!(
                    "Discarding malformed snapshot {}: {err}",
                    self.snapshot_path.display()
                );
                Ok(None)
            }
        }
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        save_snapshot_to_path(ledger, &self.snapshot_path)
    }
}

/// Serializes `ledger` to `path` through a temp file and rename, so a
/// failed write never truncates an existing snapshot.
pub fn save_snapshot_to_path(ledger: &Ledger, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(ledger)?;
    let tmp = tmp_path(path);
    write_all(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    tracing::debug!("Saved snapshot to {}", path.display());
    Ok(())
}

pub fn load_snapshot_from_path(path: &Path) -> Result<Ledger> {
    let data = fs::read_to_string(path)?;
    let ledger: Ledger = serde_json::from_str(&data)?;
    Ok(ledger)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Category, ExpenseDraft};
    use tempfile::tempdir;

    fn store_in_tempdir() -> (JsonStore, tempfile::TempDir) {
        let dir = tempdir().expect("tempdir");
        let store = JsonStore::new(Some(dir.path().to_path_buf())).expect("store");
        (store, dir)
    }

    #[test]
    fn load_returns_none_when_no_snapshot_exists() {
        let (store, _dir) = store_in_tempdir();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let (store, _dir) = store_in_tempdir();
        let mut ledger = Ledger::with_balance(900.0);
        ledger
            .add_expense(ExpenseDraft::new("Lunch", 100.0, Category::Food))
            .unwrap();

        store.save(&ledger).unwrap();
        let loaded = store.load().unwrap().expect("snapshot present");
        assert_eq!(loaded.balance, 800.0);
        assert_eq!(loaded.transaction_count(), 1);
        assert_eq!(loaded.transactions[0].title, "Lunch");
    }

    #[test]
    fn malformed_snapshot_reads_as_absent() {
        let (store, _dir) = store_in_tempdir();
        fs::write(store.snapshot_path(), "{not json").unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
