use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

use super::{
    command::{Applied, Command},
    transaction::{ExpenseDraft, Transaction},
};

/// Snapshot schema version written into every serialized ledger.
pub const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Balance a fresh wallet starts with when no snapshot exists.
pub const DEFAULT_STARTING_BALANCE: f64 = 5000.0;

/// The authoritative record of the wallet balance and its expense history.
///
/// Every mutation validates fully before touching state, so a rejected
/// command leaves the ledger exactly as it was. The balance always equals
/// the starting balance plus all credited income minus the amounts of the
/// transactions currently present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub balance: f64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::with_balance(DEFAULT_STARTING_BALANCE)
    }
}

impl Ledger {
    pub fn with_balance(balance: f64) -> Self {
        Self {
            balance,
            transactions: Vec::new(),
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Applies a command as a single atomic step, returning what happened.
    pub fn apply(&mut self, command: Command) -> Result<Applied, LedgerError> {
        match command {
            Command::AddIncome { amount } => {
                self.add_income(amount)?;
                Ok(Applied::IncomeAdded { amount })
            }
            Command::AddExpense { draft } => {
                let id = self.add_expense(draft)?;
                Ok(Applied::ExpenseAdded { id })
            }
            Command::EditExpense { id, draft } => {
                self.edit_expense(id, draft)?;
                Ok(Applied::ExpenseEdited { id })
            }
            Command::DeleteExpense { id } => {
                let removed = self.delete_expense(id).map(|txn| txn.id);
                Ok(Applied::ExpenseDeleted { removed })
            }
        }
    }

    /// Credits the wallet. The amount must be a finite number greater than
    /// zero; anything else is rejected without touching the balance.
    pub fn add_income(&mut self, amount: f64) -> Result<(), LedgerError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount);
        }
        self.balance += amount;
        Ok(())
    }

    /// Appends a new expense and debits its amount. An expense may never
    /// spend more than the current balance.
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Result<Uuid, LedgerError> {
        let valid = draft.validated()?;
        if valid.amount > self.balance {
            return Err(LedgerError::InsufficientBalance {
                requested: valid.amount,
                available: self.balance,
            });
        }
        let mut transaction = Transaction::new(valid.title, valid.amount, valid.category);
        transaction.date = valid.date;
        let id = transaction.id;
        self.balance -= transaction.amount;
        self.transactions.push(transaction);
        Ok(id)
    }

    /// Replaces the fields of an existing expense in place, keeping its id
    /// and position. The overdraft check runs against the balance with the
    /// replaced amount credited back, so an edit can always re-spend what
    /// the old entry already held.
    pub fn edit_expense(&mut self, id: Uuid, draft: ExpenseDraft) -> Result<(), LedgerError> {
        let position = self
            .transactions
            .iter()
            .position(|txn| txn.id == id)
            .ok_or(LedgerError::NotFound(id))?;
        let valid = draft.validated()?;
        let old_amount = self.transactions[position].amount;
        let available = self.balance + old_amount;
        if valid.amount > available {
            return Err(LedgerError::InsufficientBalance {
                requested: valid.amount,
                available,
            });
        }
        let transaction = &mut self.transactions[position];
        transaction.title = valid.title;
        transaction.amount = valid.amount;
        transaction.category = valid.category;
        transaction.date = valid.date;
        self.balance = available - valid.amount;
        Ok(())
    }

    /// Removes an expense and refunds its amount. Unknown ids are a
    /// tolerated no-op and return `None`.
    pub fn delete_expense(&mut self, id: Uuid) -> Option<Transaction> {
        let position = self.transactions.iter().position(|txn| txn.id == id)?;
        let transaction = self.transactions.remove(position);
        self.balance += transaction.amount;
        Some(transaction)
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Sum of all amounts currently debited from the balance.
    pub fn total_expenses(&self) -> f64 {
        self.transactions.iter().map(|txn| txn.amount).sum()
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
