//! Wallet ledger domain models, commands, and derived reports.

pub mod category;
pub mod command;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod reports;
pub mod transaction;

pub use category::{Category, UnknownCategory};
pub use command::{parse_amount, Applied, Command};
pub use ledger::{Ledger, CURRENT_SCHEMA_VERSION, DEFAULT_STARTING_BALANCE};
pub use reports::{category_totals, CategoryTotal};
pub use transaction::{ExpenseDraft, Transaction};
