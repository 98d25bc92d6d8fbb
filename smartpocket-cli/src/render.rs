//! Plain-text output for the CLI commands.

use smartpocket_core::{SavingsGoal, Summary, Transaction};
use smartpocket_voice::{DepositOutcome, Interpretation, ParsedTransaction};

pub fn parsed_transaction(p: &ParsedTransaction, currency: &str) -> String {
    format!(
        "{} {}{:.2} | {} {} | confidence {:.0}%",
        p.direction,
        currency,
        p.amount,
        p.glyph(),
        p.category,
        p.confidence * 100.0
    )
}

pub fn deposit_outcome(outcome: &DepositOutcome, currency: &str) -> String {
    match outcome {
        DepositOutcome::Resolved { amount, goal_title } => {
            format!("Deposit {currency}{amount} to '{goal_title}'")
        }
        DepositOutcome::GoalNotFound { attempted_title, .. } => {
            format!("No goal found matching '{attempted_title}'")
        }
        DepositOutcome::NoMatch => "Not a deposit command".to_string(),
    }
}

pub fn interpretation(i: &Interpretation, currency: &str) -> String {
    match i {
        Interpretation::Deposit(outcome) => deposit_outcome(outcome, currency),
        Interpretation::Transaction(p) => parsed_transaction(p, currency),
    }
}

pub fn transaction_row(t: &Transaction, currency: &str) -> String {
    let sign = if t.is_income() { '+' } else { '-' };
    format!(
        "{} {} {}{}{:.2} {}",
        t.date, t.glyph, sign, currency, t.amount, t.description
    )
}

pub fn goal_row(g: &SavingsGoal, currency: &str) -> String {
    format!(
        "{} {} | {}{:.0} / {}{:.0} ({}%)",
        g.glyph,
        g.title,
        currency,
        g.saved_amount,
        currency,
        g.target_amount,
        g.progress_percent()
    )
}

pub fn summary(s: &Summary, currency: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("Balance: {currency}{:.2}\n", s.balance));
    out.push_str(&format!(
        "Income: {currency}{:.2} | Expenses: {currency}{:.2}\n",
        s.total_income, s.total_expenses
    ));

    if !s.expense_breakdown.is_empty() {
        out.push_str("\nExpense breakdown:\n");
        for (category, total) in &s.expense_breakdown {
            out.push_str(&format!(
                "- {} {}: {currency}{:.2}\n",
                category.glyph(),
                category,
                total
            ));
        }
    }

    if !s.recent.is_empty() {
        out.push_str("\nRecent:\n");
        for t in &s.recent {
            out.push_str(&format!("- {}\n", transaction_row(t, currency)));
        }
    }
    out
}
