//! Routes one utterance to the right parser.
//!
//! Deposit commands are tried first so "save 100 to Phone" is never logged
//! as a generic expense. Both `Resolved` and `GoalNotFound` stop there; only
//! `NoMatch` falls through to transaction parsing.

use serde::Serialize;
use smartpocket_core::GoalNameLookup;

use crate::deposit_parser::{self, DepositOutcome};
use crate::transaction_parser::{self, ParsedTransaction};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "result", rename_all = "snake_case")]
pub enum Interpretation {
    /// A deposit command; never carries `DepositOutcome::NoMatch`.
    Deposit(DepositOutcome),
    Transaction(ParsedTransaction),
}

pub fn interpret(text: &str, goals: &GoalNameLookup) -> Interpretation {
    match deposit_parser::try_parse(text, goals) {
        DepositOutcome::NoMatch => Interpretation::Transaction(transaction_parser::parse(text)),
        outcome => Interpretation::Deposit(outcome),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartpocket_core::{Category, Direction};

    #[test]
    fn test_deposit_short_circuits_transaction_parsing() {
        let goals = GoalNameLookup::from_titles(["New Phone"]);
        match interpret("save 100 to Phone", &goals) {
            Interpretation::Deposit(DepositOutcome::GoalNotFound { amount, attempted_title }) => {
                assert_eq!(amount, 100);
                assert_eq!(attempted_title, "Phone");
            }
            other => panic!("expected GoalNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_no_match_falls_through() {
        let goals = GoalNameLookup::from_titles(["New Phone"]);
        match interpret("I spent 100 on lunch", &goals) {
            Interpretation::Transaction(p) => {
                assert_eq!(p.amount, 100.0);
                assert_eq!(p.direction, Direction::Expense);
                assert_eq!(p.category, Category::Food);
            }
            other => panic!("expected a transaction, got {other:?}"),
        }
    }
}
