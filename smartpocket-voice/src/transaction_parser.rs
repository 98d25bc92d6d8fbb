//! Free-text transaction parsing: amount, direction, category and a
//! confidence score for gating user confirmation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smartpocket_core::{Category, Direction, Transaction};
use tracing::debug;

use crate::amount::extract_amount;
use crate::category_rules::classify;

/// Any of these flips the direction to income.
pub const INCOME_KEYWORDS: &[&str] = &["earned", "got", "received", "income", "allowance", "gift"];

/// Recognized for confidence only; expense is already the default direction.
pub const EXPENSE_KEYWORDS: &[&str] = &["spent", "bought", "paid", "cost", "expense", "bill"];

/// Best-effort reading of one utterance, pending user confirmation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTransaction {
    pub amount: f64,
    pub direction: Direction,
    pub category: Category,
    /// The utterance as given, original case
    pub source_text: String,
    /// Heuristic score in [0, 1]; not a probability
    pub confidence: f64,
}

impl ParsedTransaction {
    /// True when the candidate is worth offering for commit.
    pub fn is_committable(&self, min_confidence: f64) -> bool {
        self.amount > 0.0 && self.confidence >= min_confidence
    }

    pub fn glyph(&self) -> &'static str {
        self.category.glyph()
    }

    pub fn into_transaction(self, id: impl Into<String>, date: NaiveDate) -> Transaction {
        Transaction::new(
            id,
            date,
            self.amount,
            self.direction,
            self.category,
            self.source_text,
        )
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Parse an utterance into a transaction candidate. Never fails.
///
/// Confidence is summed in tenths:
/// - +4 if an amount was found
/// - +3 if any income or expense keyword is present
/// - +3 if a category keyword matched, otherwise +1
pub fn parse(text: &str) -> ParsedTransaction {
    let lower = text.to_lowercase();

    let amount = extract_amount(&lower);

    let is_income = contains_any(&lower, INCOME_KEYWORDS);
    let is_expense = contains_any(&lower, EXPENSE_KEYWORDS);
    let direction = if is_income {
        Direction::Income
    } else {
        Direction::Expense
    };

    let classification = classify(&lower);

    let mut tenths: u8 = 0;
    if amount > 0.0 {
        tenths += 4;
    }
    if is_income || is_expense {
        tenths += 3;
    }
    tenths += if classification.match_count > 0 { 3 } else { 1 };
    let confidence = f64::from(tenths.min(10)) / 10.0;

    debug!(
        amount,
        %direction,
        category = %classification.category,
        confidence,
        "parsed utterance"
    );

    ParsedTransaction {
        amount,
        direction,
        category: classification.category,
        source_text: text.to_string(),
        confidence,
    }
}
