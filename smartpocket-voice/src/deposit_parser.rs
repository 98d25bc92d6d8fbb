//! "save 200 to New Phone" style commands that move money into a goal.
//!
//! Matching is two-step: the command shape first, then an exact
//! (case-insensitive, trimmed) title lookup against the caller's goals.

use regex::Regex;
use serde::{Deserialize, Serialize};
use smartpocket_core::GoalNameLookup;
use std::sync::LazyLock;
use tracing::debug;

// verb, integer amount, optional "to"/"for", goal title
static DEPOSIT_COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:saved|save|put|add)\s+(?P<amount>[0-9]+)\s+(?:(?:to|for)\s+)?(?P<title>.+)")
        .expect("deposit command pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DepositOutcome {
    /// Not a deposit command; parse the text as a transaction instead.
    NoMatch,
    /// Command recognized and the goal exists. `goal_title` is the stored title.
    Resolved { amount: u64, goal_title: String },
    /// Command recognized but no goal has that title. `attempted_title` is as typed.
    GoalNotFound { amount: u64, attempted_title: String },
}

/// Try to read `text` as a deposit command against `goals`.
///
/// A zero or out-of-range amount, or a missing goal title, is not a
/// deposit command.
pub fn try_parse(text: &str, goals: &GoalNameLookup) -> DepositOutcome {
    let Some(caps) = DEPOSIT_COMMAND.captures(text) else {
        return DepositOutcome::NoMatch;
    };

    let amount = match caps["amount"].parse::<u64>() {
        Ok(n) if n > 0 => n,
        _ => return DepositOutcome::NoMatch,
    };
    let typed_title = caps["title"].trim();
    // "save 100 to" names no goal
    if typed_title.eq_ignore_ascii_case("to") || typed_title.eq_ignore_ascii_case("for") {
        return DepositOutcome::NoMatch;
    }

    let outcome = match goals.find(typed_title) {
        Some(goal) => DepositOutcome::Resolved {
            amount,
            goal_title: goal.title.clone(),
        },
        None => DepositOutcome::GoalNotFound {
            amount,
            attempted_title: typed_title.to_string(),
        },
    };

    debug!(?outcome, goals = goals.len(), "deposit command");
    outcome
}
