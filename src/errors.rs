use thiserror::Error;
use uuid::Uuid;

/// Error type that captures ledger command rejections and persistence
/// failures. Command rejections never mutate state.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Amount must be a positive number")]
    InvalidAmount,
    #[error("Insufficient balance: requested {requested:.2}, available {available:.2}")]
    InsufficientBalance { requested: f64, available: f64 },
    #[error("Transaction not found: {0}")]
    NotFound(Uuid),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
