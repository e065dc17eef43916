use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

use super::category::Category;

/// A committed expense entry. The amount is always a positive debit
/// against the wallet balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub title: String,
    pub amount: f64,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Transaction {
    pub fn new(title: impl Into<String>, amount: f64, category: Category) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            amount,
            category,
            date: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Unvalidated expense fields as collected at the input boundary.
///
/// Absent fields stay `None` so the ledger can report them as missing
/// instead of the collector inventing placeholder values.
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: Option<f64>,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
}

impl ExpenseDraft {
    pub fn new(title: impl Into<String>, amount: f64, category: Category) -> Self {
        Self {
            title: title.into(),
            amount: Some(amount),
            category: Some(category),
            date: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Checks the draft into a fully typed expense. Field presence is
    /// checked before the amount's value, so an empty form reads as
    /// `MissingFields` even when the amount is also out of range.
    pub(crate) fn validated(&self) -> Result<ValidExpense, LedgerError> {
        if self.title.trim().is_empty() || self.amount.is_none() || self.category.is_none() {
            return Err(LedgerError::MissingFields);
        }
        let amount = self.amount.unwrap_or_default();
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount);
        }
        Ok(ValidExpense {
            title: self.title.trim().to_string(),
            amount,
            category: self.category.unwrap_or(Category::Other),
            date: self.date,
        })
    }
}

/// Draft fields after boundary validation.
pub(crate) struct ValidExpense {
    pub(crate) title: String,
    pub(crate) amount: f64,
    pub(crate) category: Category,
    pub(crate) date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_reported_before_amount_range() {
        let draft = ExpenseDraft {
            title: "  ".into(),
            amount: Some(-5.0),
            category: Some(Category::Food),
            date: None,
        };
        assert!(matches!(
            draft.validated(),
            Err(LedgerError::MissingFields)
        ));
    }

    #[test]
    fn non_finite_amount_is_invalid() {
        let mut draft = ExpenseDraft::new("Lunch", f64::NAN, Category::Food);
        assert!(matches!(draft.validated(), Err(LedgerError::InvalidAmount)));

        draft.amount = Some(0.0);
        assert!(matches!(draft.validated(), Err(LedgerError::InvalidAmount)));
    }

    #[test]
    fn validated_trims_title() {
        let draft = ExpenseDraft::new(" Lunch ", 20.0, Category::Food);
        let valid = draft.validated().unwrap();
        assert_eq!(valid.title, "Lunch");
        assert_eq!(valid.amount, 20.0);
    }
}
