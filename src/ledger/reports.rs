use serde::Serialize;

use super::{category::Category, ledger::Ledger};

/// Aggregated spend for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

/// Sums the current expenses per category.
///
/// Every category in [`Category::ALL`] appears exactly once, in that
/// order, with a total of 0 for categories that have no entries. Chart
/// consumers rely on the stable axis.
pub fn category_totals(ledger: &Ledger) -> Vec<CategoryTotal> {
    Category::ALL
        .iter()
        .map(|&category| CategoryTotal {
            category,
            total: ledger
                .transactions
                .iter()
                .filter(|txn| txn.category == category)
                .map(|txn| txn.amount)
                .sum(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::ExpenseDraft;

    #[test]
    fn totals_cover_the_full_category_set_in_order() {
        let mut ledger = Ledger::with_balance(1000.0);
        ledger
            .add_expense(ExpenseDraft::new("Lunch", 100.0, Category::Food))
            .unwrap();
        ledger
            .add_expense(ExpenseDraft::new("Snack", 50.0, Category::Food))
            .unwrap();
        ledger
            .add_expense(ExpenseDraft::new("Bus", 30.0, Category::Travel))
            .unwrap();

        let totals = category_totals(&ledger);
        assert_eq!(totals.len(), Category::ALL.len());
        for (row, category) in totals.iter().zip(Category::ALL) {
            assert_eq!(row.category, category);
        }
        assert_eq!(totals[0].total, 150.0);
        assert_eq!(totals[2].total, 30.0);
        assert_eq!(totals[1].total, 0.0);
    }

    #[test]
    fn empty_ledger_yields_all_zero_rows() {
        let ledger = Ledger::default();
        let totals = category_totals(&ledger);
        assert!(totals.iter().all(|row| row.total == 0.0));
    }
}
