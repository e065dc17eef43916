use uuid::Uuid;

use crate::errors::LedgerError;

use super::transaction::ExpenseDraft;

/// A requested state transition, tagged and fully parsed at the input
/// boundary.
#[derive(Debug, Clone)]
pub enum Command {
    AddIncome { amount: f64 },
    AddExpense { draft: ExpenseDraft },
    EditExpense { id: Uuid, draft: ExpenseDraft },
    DeleteExpense { id: Uuid },
}

/// Outcome of a successfully applied command.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    IncomeAdded { amount: f64 },
    ExpenseAdded { id: Uuid },
    ExpenseEdited { id: Uuid },
    /// `removed` is `None` when the id matched nothing; deletes tolerate
    /// stale references.
    ExpenseDeleted { removed: Option<Uuid> },
}

/// Parses a raw amount string into a positive, finite value.
///
/// This is the single place raw text becomes money: blank input reads as
/// a missing field, anything unparseable, non-finite, or not strictly
/// positive is rejected. A NaN can never leak into the ledger.
pub fn parse_amount(raw: &str) -> Result<f64, LedgerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::MissingFields);
    }
    let value: f64 = trimmed.parse().map_err(|_| LedgerError::InvalidAmount)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(LedgerError::InvalidAmount);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(parse_amount("250").unwrap(), 250.0);
        assert_eq!(parse_amount(" 19.99 ").unwrap(), 19.99);
    }

    #[test]
    fn blank_input_is_a_missing_field() {
        assert!(matches!(parse_amount("   "), Err(LedgerError::MissingFields)));
    }

    #[test]
    fn garbage_zero_and_nan_are_invalid() {
        for raw in ["abc", "0", "-12", "NaN", "inf"] {
            assert!(
                matches!(parse_amount(raw), Err(LedgerError::InvalidAmount)),
                "`{raw}` should be rejected"
            );
        }
    }
}
