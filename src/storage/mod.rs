pub mod json_backend;

use crate::{errors::LedgerError, ledger::Ledger};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends holding the wallet snapshot.
pub trait SnapshotStore: Send + Sync {
    /// Loads the saved snapshot, or `None` when no usable snapshot exists.
    fn load(&self) -> Result<Option<Ledger>>;

    /// Overwrites the snapshot. Best effort; callers treat a failure as
    /// non-fatal and keep the in-memory state.
    fn save(&self, ledger: &Ledger) -> Result<()>;
}

pub use json_backend::JsonStore;
