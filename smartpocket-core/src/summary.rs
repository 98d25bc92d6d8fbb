//! Dashboard aggregates over a list of transactions

use crate::finance::{Category, Transaction};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Summary {
    /// Income minus expenses
    pub balance: f64,
    pub total_income: f64,
    pub total_expenses: f64,
    /// Expense totals per category, in category order, zero entries omitted
    pub expense_breakdown: Vec<(Category, f64)>,
    /// Most recent transactions, newest first
    pub recent: Vec<Transaction>,
}

impl Summary {
    pub fn from_transactions(txns: &[Transaction], recent_limit: usize) -> Self {
        let total_income: f64 = txns.iter().filter(|t| t.is_income()).map(|t| t.amount).sum();
        let total_expenses: f64 = txns.iter().filter(|t| t.is_expense()).map(|t| t.amount).sum();

        let mut by_category: HashMap<Category, f64> = HashMap::new();
        for t in txns.iter().filter(|t| t.is_expense()) {
            *by_category.entry(t.category).or_insert(0.0) += t.amount;
        }
        let expense_breakdown = Category::ALL
            .into_iter()
            .filter_map(|c| by_category.get(&c).map(|total| (c, *total)))
            .filter(|(_, total)| *total > 0.0)
            .collect();

        // Stable sort keeps insertion order for same-day entries, then reverse
        // so later-logged entries of the same day come first.
        let mut recent: Vec<Transaction> = txns.to_vec();
        recent.sort_by_key(|t| t.date);
        recent.reverse();
        recent.truncate(recent_limit);

        Self {
            balance: balance(txns),
            total_income,
            total_expenses,
            expense_breakdown,
            recent,
        }
    }
}

/// Running balance: income adds, expenses subtract.
pub fn balance(txns: &[Transaction]) -> f64 {
    txns.iter().map(Transaction::signed_amount).sum()
}
